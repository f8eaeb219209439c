pub mod batch;
pub mod image;

pub use batch::*;
pub use image::*;
