use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Model-specific tuning parameters, passed to the server untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationOptions(Map<String, Value>);

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(self, seed: i64) -> Self {
        self.with("seed", seed)
    }

    pub fn width(self, width: u32) -> Self {
        self.with("width", width)
    }

    pub fn height(self, height: u32) -> Self {
        self.with("height", height)
    }

    pub fn steps(self, steps: u32) -> Self {
        self.with("steps", steps)
    }

    pub fn negative_prompt(self, negative_prompt: impl Into<String>) -> Self {
        self.with("negative_prompt", negative_prompt.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for GenerationOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub host: Option<String>,
    pub model: Option<String>,
    pub options: Option<GenerationOptions>,
}

impl GenerateImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            host: None,
            model: None,
            options: None,
        }
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
}

/// One generated image as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResult {
    /// Empty when the server sent no image.
    pub image_base64: String,
    pub model: Option<String>,
    pub created_at: Option<String>,
}

impl GenerateImageResult {
    pub fn has_image(&self) -> bool {
        !self.image_base64.is_empty()
    }

    pub fn decode_image(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.image_base64)?)
    }
}

impl From<OllamaGenerateResponse> for GenerateImageResult {
    fn from(response: OllamaGenerateResponse) -> Self {
        Self {
            image_base64: response.image.unwrap_or_default(),
            model: response.model,
            created_at: response.created_at,
        }
    }
}

// Wire format of POST /api/generate

#[derive(Debug, Serialize)]
pub struct OllamaGenerateBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a GenerationOptions>,
}

#[derive(Debug, Deserialize)]
pub struct OllamaGenerateResponse {
    #[serde(default, deserialize_with = "opaque_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "opaque_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "opaque_string")]
    pub created_at: Option<String>,
}

// Non-string values are kept as their JSON text instead of failing the call.
fn opaque_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
