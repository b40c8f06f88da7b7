//! Material writers.
//!
//! A material property holds exactly one of `solidColor`, `image` or `grid`.

use crate::util::DVec2;
use crate::value::{Color, ColorEncoding, Uri, UriResolver};
use crate::writer::Scoped;

czml_writer! {
    /// Writes a `material` property.
    pub struct MaterialWriter {
        properties {}
        composites {
            /// Fill with a single colour.
            solid_color("solidColor"): SolidColorMaterialWriter
                => solid_color_writer, open_solid_color_property;
            /// Fill with an image.
            image("image"): ImageMaterialWriter => image_writer, open_image_property;
            /// Fill with a grid of lines.
            grid("grid"): GridMaterialWriter => grid_writer, open_grid_property;
        }
    }
}

czml_writer! {
    /// Writes a `solidColor` material.
    pub struct SolidColorMaterialWriter {
        properties {
            /// Write the `color` property.
            color("color"): Color = Some("white")
                => color_writer, open_color_property,
                   write_color_property, write_color_property_reference,
                   write_color_property_rgbaf(ColorEncoding::Rgbaf);
        }
        composites {}
    }
}

czml_writer! {
    /// Writes an `image` material.
    pub struct ImageMaterialWriter {
        properties {
            /// Write the `image` property, the image to fill with.
            image("image"): Uri = None
                => image_writer, open_image_property,
                   write_image_property, write_image_property_reference;
            /// Write the `repeat` property, the number of times the image repeats
            /// along each axis.
            repeat("repeat"): DVec2 = Some("[1, 1]")
                => repeat_writer, open_repeat_property,
                   write_repeat_property, write_repeat_property_reference;
            /// Write the `color` property, which tints the image.
            color("color"): Color = Some("white")
                => color_writer, open_color_property,
                   write_color_property, write_color_property_reference,
                   write_color_property_rgbaf(ColorEncoding::Rgbaf);
            /// Write the `transparent` property.
            transparent("transparent"): bool = Some("false")
                => transparent_writer, open_transparent_property,
                   write_transparent_property, write_transparent_property_reference;
        }
        composites {}
    }
}

czml_writer! {
    /// Writes a `grid` material.
    pub struct GridMaterialWriter {
        properties {
            /// Write the `color` property of the grid lines.
            color("color"): Color = Some("white")
                => color_writer, open_color_property,
                   write_color_property, write_color_property_reference,
                   write_color_property_rgbaf(ColorEncoding::Rgbaf);
            /// Write the `cellAlpha` property, the alpha of the space between lines.
            cell_alpha("cellAlpha"): f64 = Some("0.1")
                => cell_alpha_writer, open_cell_alpha_property,
                   write_cell_alpha_property, write_cell_alpha_property_reference;
            /// Write the `lineCount` property, rows and columns.
            line_count("lineCount"): DVec2 = Some("[8, 8]")
                => line_count_writer, open_line_count_property,
                   write_line_count_property, write_line_count_property_reference;
            /// Write the `lineThickness` property, in pixels.
            line_thickness("lineThickness"): DVec2 = Some("[1, 1]")
                => line_thickness_writer, open_line_thickness_property,
                   write_line_thickness_property, write_line_thickness_property_reference;
            /// Write the `lineOffset` property, as a fraction of a cell.
            line_offset("lineOffset"): DVec2 = Some("[0, 0]")
                => line_offset_writer, open_line_offset_property,
                   write_line_offset_property, write_line_offset_property_reference;
        }
        composites {}
    }
}

impl ImageMaterialWriter {
    /// Write the `image` property after passing the URI through `resolver`.
    pub fn write_image_property_resolved(
        &mut self,
        uri: &Uri,
        resolver: &dyn UriResolver,
    ) -> crate::Result<()> {
        let mut image = Scoped::adopt(self.open_image_property()?);
        image.write_uri_with(uri, resolver)?;
        image.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_tables() {
        let names: Vec<_> = MaterialWriter::PROPERTIES.iter().map(|p| p.name).collect();
        assert_eq!(names, ["solidColor", "image", "grid"]);
        assert!(MaterialWriter::PROPERTIES.iter().all(|p| p.kind == ValueKind::Composite));
        assert_eq!(GridMaterialWriter::PROPERTIES[1].default, Some("0.1"));
        assert_eq!(ImageMaterialWriter::PROPERTIES[0].kind, ValueKind::Uri);
    }
}
