use serde::{Deserialize, Serialize};
use std::fmt;

use super::image::{GenerateImageRequest, GenerateImageResult, GenerationOptions};
use crate::error::{OllamaError, Result};

/// Called with `(completed, total)` after every finished generation.
pub type ProgressCallback = Box<dyn FnMut(usize, usize) + Send>;

pub struct BatchGenerateImageConfig {
    pub prompts: Vec<String>,
    pub count_per_prompt: usize,
    pub host: Option<String>,
    pub model: Option<String>,
    pub options: Option<GenerationOptions>,
    pub on_progress: Option<ProgressCallback>,
}

impl BatchGenerateImageConfig {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompts: prompts.into_iter().map(Into::into).collect(),
            count_per_prompt: 1,
            host: None,
            model: None,
            options: None,
            on_progress: None,
        }
    }

    pub fn with_count_per_prompt(mut self, count: usize) -> Self {
        self.count_per_prompt = count;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Number of generations the batch will request.
    pub fn total(&self) -> Result<usize> {
        self.prompts
            .len()
            .checked_mul(self.count_per_prompt)
            .ok_or_else(|| {
                OllamaError::ConfigError(format!(
                    "{} prompts x {} images per prompt overflows",
                    self.prompts.len(),
                    self.count_per_prompt
                ))
            })
    }

    /// The single request issued for `prompt`, sharing this batch's host/model/options.
    pub fn request_for(&self, prompt: &str) -> GenerateImageRequest {
        GenerateImageRequest {
            prompt: prompt.to_string(),
            host: self.host.clone(),
            model: self.model.clone(),
            options: self.options.clone(),
        }
    }
}

impl fmt::Debug for BatchGenerateImageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchGenerateImageConfig")
            .field("prompts", &self.prompts)
            .field("count_per_prompt", &self.count_per_prompt)
            .field("host", &self.host)
            .field("model", &self.model)
            .field("options", &self.options)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGenerateImageResult {
    pub prompt: String,
    pub results: Vec<GenerateImageResult>,
}
