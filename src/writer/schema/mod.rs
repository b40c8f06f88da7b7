//! Graphics and material writers built from property tables.

mod box_graphics;
mod material;
mod rectangle;

pub use box_graphics::BoxWriter;
pub use material::{GridMaterialWriter, ImageMaterialWriter, MaterialWriter, SolidColorMaterialWriter};
pub use rectangle::RectangleWriter;
