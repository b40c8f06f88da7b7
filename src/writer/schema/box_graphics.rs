//! Box graphics writer.

use super::MaterialWriter;
use crate::util::DVec3;
use crate::value::{Bounds, Color, ColorEncoding, HeightReference, ShadowMode};

czml_writer! {
    /// Writes a `box`: a closed box positioned at the object's position.
    pub struct BoxWriter {
        properties {
            /// Write the `show` property, whether the box is shown.
            show("show"): bool = Some("true")
                => show_writer, open_show_property,
                   write_show_property, write_show_property_reference;
            /// Write the `dimensions` property, the length, width and height of
            /// the box in meters.
            dimensions("dimensions"): DVec3 = None
                => dimensions_writer, open_dimensions_property,
                   write_dimensions_property, write_dimensions_property_reference;
            /// Write the `heightReference` property.
            height_reference("heightReference"): HeightReference = Some("NONE")
                => height_reference_writer, open_height_reference_property,
                   write_height_reference_property, write_height_reference_property_reference;
            /// Write the `fill` property, whether the box is filled.
            fill("fill"): bool = Some("true")
                => fill_writer, open_fill_property,
                   write_fill_property, write_fill_property_reference;
            /// Write the `outline` property, whether the box is outlined.
            outline("outline"): bool = Some("false")
                => outline_writer, open_outline_property,
                   write_outline_property, write_outline_property_reference;
            /// Write the `outlineColor` property.
            outline_color("outlineColor"): Color = Some("black")
                => outline_color_writer, open_outline_color_property,
                   write_outline_color_property, write_outline_color_property_reference,
                   write_outline_color_property_rgbaf(ColorEncoding::Rgbaf);
            /// Write the `outlineWidth` property.
            outline_width("outlineWidth"): f64 = Some("1.0")
                => outline_width_writer, open_outline_width_property,
                   write_outline_width_property, write_outline_width_property_reference;
            /// Write the `shadows` property.
            shadows("shadows"): ShadowMode = Some("DISABLED")
                => shadows_writer, open_shadows_property,
                   write_shadows_property, write_shadows_property_reference;
            /// Write the `distanceDisplayCondition` property.
            distance_display_condition("distanceDisplayCondition"): Bounds = None
                => distance_display_condition_writer, open_distance_display_condition_property,
                   write_distance_display_condition_property,
                   write_distance_display_condition_property_reference;
        }
        composites {
            /// The material used to fill the box.
            material("material"): MaterialWriter => material_writer, open_material_property;
        }
    }
}
