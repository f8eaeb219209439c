use crate::{
    config::{generate_url, OllamaConfig},
    error::{OllamaError, Result},
    models::{
        BatchGenerateImageConfig, BatchGenerateImageResult, GenerateImageRequest,
        GenerateImageResult, OllamaGenerateBody, OllamaGenerateResponse,
    },
};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{header::CONTENT_TYPE, Client, Response};

use super::{batch, ImageGenerator};

#[derive(Debug, Clone, Default)]
pub struct ImageClient {
    client: Client,
    config: OllamaConfig,
}

impl ImageClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: OllamaConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OllamaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Host and model a request will use: its own, then this client's config,
    /// then the built-in defaults.
    pub fn resolve<'a>(&'a self, request: &'a GenerateImageRequest) -> (&'a str, &'a str) {
        let host = request
            .host
            .as_deref()
            .unwrap_or_else(|| self.config.resolved_host());
        let model = request
            .model
            .as_deref()
            .unwrap_or_else(|| self.config.resolved_model());
        (host, model)
    }

    pub fn endpoint(&self, request: &GenerateImageRequest) -> String {
        generate_url(self.resolve(request).0)
    }

    /// Issues exactly one `POST {host}/api/generate`.
    ///
    /// A non-2xx status fails with [`OllamaError::ApiError`] without reading
    /// the body. Nothing is retried.
    pub async fn generate(&self, request: GenerateImageRequest) -> Result<GenerateImageResult> {
        let (host, model) = self.resolve(&request);
        let url = generate_url(host);

        let body = OllamaGenerateBody {
            model,
            prompt: &request.prompt,
            stream: false,
            options: request.options.as_ref(),
        };
        let request_json =
            serde_json::to_vec(&body).map_err(|e| OllamaError::SerializationError(e.to_string()))?;

        log::debug!("Generating image with model: {} ({})", model, url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(request_json)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::ApiError {
                status: status.as_u16(),
                status_text: status_text(&response),
            });
        }

        let response_bytes = response.bytes().await?;
        let ollama_response: OllamaGenerateResponse = serde_json::from_slice(&response_bytes)
            .map_err(|e| OllamaError::ResponseError(e.to_string()))?;

        let result = GenerateImageResult::from(ollama_response);
        log::trace!(
            "Image generated: {} base64 chars, created_at {:?}",
            result.image_base64.len(),
            result.created_at
        );

        Ok(result)
    }

    pub async fn generate_batch(
        &self,
        config: BatchGenerateImageConfig,
    ) -> Result<Vec<BatchGenerateImageResult>> {
        batch::run_batch(self, config).await
    }
}

// hyper only keeps the reason phrase when it differs from the canonical one.
fn status_text(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: GenerateImageRequest) -> Result<GenerateImageResult> {
        ImageClient::generate(self, request).await
    }
}
