pub mod batch;
pub mod image_client;
pub mod traits;

pub use batch::run_batch;
pub use image_client::ImageClient;
pub use traits::ImageGenerator;
