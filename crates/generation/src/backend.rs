use async_trait::async_trait;
use serde_json::Value;

use crate::GenerationError;

/// A single structured-output request to the text model.
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub prompt: String,
    pub schema: Value,
    pub temperature: Option<f32>,
}

impl TextRequest {
    pub fn new(prompt: String, schema: Value) -> Self {
        Self {
            prompt,
            schema,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// The remote generation service: one text endpoint, one image endpoint.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Returns the raw JSON text produced for `request`.
    async fn generate_json(&self, request: TextRequest) -> Result<String, GenerationError>;

    /// Returns a base64 encoded PNG.
    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError>;
}
