use crate::{
    error::Result,
    models::{GenerateImageRequest, GenerateImageResult},
};
use async_trait::async_trait;

/// Anything that can turn one prompt into one image.
///
/// The batch runner only talks to this trait, so it never knows whether the
/// image came from a live server or from somewhere else.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerateImageRequest) -> Result<GenerateImageResult>;
}
