//! Gemini generation client. Single-shot requests, no retry; any unexpected
//! response shape surfaces as [`RelayError::Upstream`].

use async_trait::async_trait;
use relay_core::{RelayError, RelayResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

const TEXT_MODEL: &str = "gemini-pro:generateContent";
const IMAGE_MODEL: &str = "gemini-pro-vision:generateImage";

/// Generation upstream, object-safe so the dispatcher can be exercised with
/// an in-memory fake.
#[async_trait]
pub trait GenAi: Send + Sync {
    /// Returns the generated chat reply for `prompt`.
    async fn generate_text(&self, prompt: &str) -> RelayResult<String>;
    /// Returns the URL of a generated image for `prompt`.
    async fn generate_image(&self, prompt: &str) -> RelayResult<String>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: Client, api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}", self.api_base.trim_end_matches('/'))
    }

    async fn post(&self, model: &str, body: &Value) -> RelayResult<reqwest::Response> {
        // The platform authenticates by `key` query parameter; it never goes
        // into logs.
        let response = self
            .http
            .post(self.url(model))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|err| RelayError::Upstream(format!("gemini request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream(format!("gemini returned {status}: {body}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl GenAi for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> RelayResult<String> {
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });
        let response = self.post(TEXT_MODEL, &body).await?;
        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| RelayError::Upstream(format!("decode gemini text response: {err}")))?;
        decoded
            .first_text()
            .ok_or_else(|| RelayError::Upstream("gemini response carried no candidate text".into()))
    }

    async fn generate_image(&self, prompt: &str) -> RelayResult<String> {
        let body = json!({ "prompt": { "text": prompt } });
        let response = self.post(IMAGE_MODEL, &body).await?;
        let decoded: GenerateImageResponse = response
            .json()
            .await
            .map_err(|err| RelayError::Upstream(format!("decode gemini image response: {err}")))?;
        decoded
            .first_url()
            .ok_or_else(|| RelayError::Upstream("gemini response carried no generated image".into()))
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateImageResponse {
    #[serde(default, rename = "generatedImages")]
    generated_images: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    #[serde(default)]
    url: Option<String>,
}

impl GenerateImageResponse {
    fn first_url(self) -> Option<String> {
        self.generated_images.into_iter().next()?.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_response_reads_first_candidate_part() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        });
        let decoded: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.first_text().as_deref(), Some("first"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let decoded: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(decoded.first_text(), None);

        let decoded: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(decoded.first_text(), None);
    }

    #[test]
    fn image_response_reads_first_url() {
        let body = json!({
            "generatedImages": [
                {"url": "https://img.example/a.png"},
                {"url": "https://img.example/b.png"}
            ]
        });
        let decoded: GenerateImageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.first_url().as_deref(), Some("https://img.example/a.png"));
    }

    #[test]
    fn image_response_without_url_yields_none() {
        let decoded: GenerateImageResponse =
            serde_json::from_value(json!({"generatedImages": [{}]})).unwrap();
        assert_eq!(decoded.first_url(), None);
    }

    #[test]
    fn url_joins_base_and_model() {
        let client = GeminiClient::new(Client::new(), "https://generativelanguage.googleapis.com/", "key");
        assert_eq!(
            client.url(TEXT_MODEL),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(
            client.url(IMAGE_MODEL),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro-vision:generateImage"
        );
    }
}
