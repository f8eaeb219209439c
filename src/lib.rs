//! Client for the image generation endpoint of a local Ollama server.
//!
//! ```no_run
//! use ollama_imagegen::{batch_generate_images, BatchGenerateImageConfig, GenerationOptions};
//!
//! # async fn run() -> ollama_imagegen::Result<()> {
//! let config = BatchGenerateImageConfig::new(["a cat", "a dog"])
//!     .with_count_per_prompt(2)
//!     .with_options(GenerationOptions::new().width(512).height(512))
//!     .on_progress(|done, total| println!("{}/{}", done, total));
//!
//! for entry in batch_generate_images(config).await? {
//!     println!("{}: {} images", entry.prompt, entry.results.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod ollama;
pub mod output;

pub use config::{OllamaConfig, DEFAULT_HOST, DEFAULT_MODEL};
pub use error::{OllamaError, Result};
pub use models::*;
pub use ollama::{ImageClient, ImageGenerator};
pub use output::ImageWriter;

/// Generate a single image, resolving any missing host/model to the built-in defaults.
pub async fn generate_image(request: GenerateImageRequest) -> Result<GenerateImageResult> {
    ImageClient::default().generate(request).await
}

/// Generate `count_per_prompt` images for every prompt, strictly one after another.
pub async fn batch_generate_images(
    config: BatchGenerateImageConfig,
) -> Result<Vec<BatchGenerateImageResult>> {
    ImageClient::default().generate_batch(config).await
}
