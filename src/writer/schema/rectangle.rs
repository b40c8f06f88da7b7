//! Rectangle graphics writer.

use super::MaterialWriter;
use crate::value::{
    Bounds, CartographicExtent, ClassificationType, Color, ColorEncoding, ExtentEncoding,
    HeightReference, ShadowMode,
};

czml_writer! {
    /// Writes a `rectangle`: a cartographic rectangle conforming to the
    /// curvature of the globe, optionally extruded into a volume.
    pub struct RectangleWriter {
        properties {
            /// Write the `show` property, whether the rectangle is shown.
            show("show"): bool = Some("true")
                => show_writer, open_show_property,
                   write_show_property, write_show_property_reference;
            /// Write the `coordinates` property, the extent of the rectangle.
            coordinates("coordinates"): CartographicExtent = None
                => coordinates_writer, open_coordinates_property,
                   write_coordinates_property, write_coordinates_property_reference,
                   write_coordinates_property_wsen_degrees(ExtentEncoding::WsenDegrees);
            /// Write the `height` property, the height of the rectangle.
            height("height"): f64 = Some("0.0")
                => height_writer, open_height_property,
                   write_height_property, write_height_property_reference;
            /// Write the `heightReference` property, whether `height` is relative
            /// to terrain.
            height_reference("heightReference"): HeightReference = Some("NONE")
                => height_reference_writer, open_height_reference_property,
                   write_height_reference_property, write_height_reference_property_reference;
            /// Write the `extrudedHeight` property, the height of the extruded face.
            extruded_height("extrudedHeight"): f64 = None
                => extruded_height_writer, open_extruded_height_property,
                   write_extruded_height_property, write_extruded_height_property_reference;
            /// Write the `extrudedHeightReference` property.
            extruded_height_reference("extrudedHeightReference"): HeightReference = Some("NONE")
                => extruded_height_reference_writer, open_extruded_height_reference_property,
                   write_extruded_height_reference_property,
                   write_extruded_height_reference_property_reference;
            /// Write the `rotation` property, counter-clockwise from north in radians.
            rotation("rotation"): f64 = Some("0.0")
                => rotation_writer, open_rotation_property,
                   write_rotation_property, write_rotation_property_reference;
            /// Write the `stRotation` property, the rotation of the texture.
            st_rotation("stRotation"): f64 = Some("0.0")
                => st_rotation_writer, open_st_rotation_property,
                   write_st_rotation_property, write_st_rotation_property_reference;
            /// Write the `granularity` property, the angular distance between
            /// points on the rectangle.
            granularity("granularity"): f64 = Some("0.017453292519943295")
                => granularity_writer, open_granularity_property,
                   write_granularity_property, write_granularity_property_reference;
            /// Write the `fill` property, whether the rectangle is filled.
            fill("fill"): bool = Some("true")
                => fill_writer, open_fill_property,
                   write_fill_property, write_fill_property_reference;
            /// Write the `outline` property, whether the rectangle is outlined.
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
            /// Write the `shadows` property, whether the rectangle casts or
            /// receives shadows.
            shadows("shadows"): ShadowMode = Some("DISABLED")
                => shadows_writer, open_shadows_property,
                   write_shadows_property, write_shadows_property_reference;
            /// Write the `distanceDisplayCondition` property, the camera distances
            /// at which the rectangle is displayed.
            distance_display_condition("distanceDisplayCondition"): Bounds = None
                => distance_display_condition_writer, open_distance_display_condition_property,
                   write_distance_display_condition_property,
                   write_distance_display_condition_property_reference;
            /// Write the `classificationType` property, what a ground rectangle
            /// classifies.
            classification_type("classificationType"): ClassificationType = Some("BOTH")
                => classification_type_writer, open_classification_type_property,
                   write_classification_type_property, write_classification_type_property_reference;
            /// Write the `zIndex` property, ordering ground geometry.
            z_index("zIndex"): i32 = Some("0")
                => z_index_writer, open_z_index_property,
                   write_z_index_property, write_z_index_property_reference;
        }
        composites {
            /// The material used to fill the rectangle.
            material("material"): MaterialWriter => material_writer, open_material_property;
        }
    }
}
