// https://ai.google.dev/api/generate-content - text with responseSchema
// https://ai.google.dev/api/generate-content#imagen - image predictions

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::backend::{GenerativeBackend, TextRequest};
use crate::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct GeminiApi {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiApi {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::NotConfigured("API key"))
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn post(&self, url: &str, body: &Value) -> Result<reqwest::Response, GenerationError> {
        let api_key = self.api_key()?;
        let res = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GenerationError::HttpStatus { status, body });
        }
        Ok(res)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

pub(crate) fn text_request_body(request: &TextRequest) -> Value {
    let mut generation_config = json!({
        "responseMimeType": "application/json",
        "responseSchema": request.schema,
    });
    if let Some(temperature) = request.temperature {
        generation_config["temperature"] = json!(temperature);
    }
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
        "generationConfig": generation_config,
    })
}

pub(crate) fn image_request_body(prompt: &str) -> Value {
    json!({
        "instances": [{ "prompt": prompt }],
        "parameters": {
            "sampleCount": 1,
            "aspectRatio": "1:1",
            "outputMimeType": "image/png",
        },
    })
}

fn first_candidate_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text.to_owned())
}

fn first_prediction(response: PredictResponse) -> Result<String, GenerationError> {
    response
        .predictions
        .into_iter()
        .find_map(|prediction| prediction.bytes_base64_encoded)
        .filter(|bytes| !bytes.is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

#[async_trait]
impl GenerativeBackend for GeminiApi {
    async fn generate_json(&self, request: TextRequest) -> Result<String, GenerationError> {
        let url = self.endpoint(&self.config.text_model, "generateContent");
        debug!(model = %self.config.text_model, "requesting structured text");
        let res = self.post(&url, &text_request_body(&request)).await?;
        let response: GenerateContentResponse = res.json().await?;
        first_candidate_text(response)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.endpoint(&self.config.image_model, "predict");
        debug!(model = %self.config.image_model, "requesting image");
        let res = self.post(&url, &image_request_body(prompt)).await?;
        let response: PredictResponse = res.json().await?;
        first_prediction(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_body_carries_schema_and_temperature() {
        let request = TextRequest::new("hi".into(), json!({"type": "OBJECT"})).with_temperature(1.2);
        let body = text_request_body(&request);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(body["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn text_body_without_temperature_leaves_it_out() {
        let body = text_request_body(&TextRequest::new("hi".into(), json!({})));
        assert!(body["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn candidate_parts_are_joined_and_trimmed() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  {\"hint\":" }, { "text": "\"pet\"} \n" }] } }]
        }))
        .unwrap();
        assert_eq!(first_candidate_text(response).unwrap(), "{\"hint\":\"pet\"}");
    }

    #[test]
    fn missing_candidates_is_an_empty_response() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            first_candidate_text(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn prediction_bytes_are_extracted() {
        let response: PredictResponse = serde_json::from_value(json!({
            "predictions": [{ "bytesBase64Encoded": "iVBORw0KGgo=", "mimeType": "image/png" }]
        }))
        .unwrap();
        assert_eq!(first_prediction(response).unwrap(), "iVBORw0KGgo=");
        let empty: PredictResponse = serde_json::from_value(json!({ "predictions": [] })).unwrap();
        assert!(first_prediction(empty).is_err());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let api = GeminiApi::new(GeminiConfig::default());
        let result = api.generate_image("dog").await;
        assert!(matches!(result, Err(GenerationError::NotConfigured(_))));
    }
}
