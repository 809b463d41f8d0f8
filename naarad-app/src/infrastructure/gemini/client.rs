use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::application::TextGenerator;
use crate::config::GeminiConfig;
use async_trait::async_trait;
use naarad_errors::AppError;

/// Value some deployments ship instead of a real key; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "mock_api_key_placeholder";

const INVALID_KEY_MARKER: &str = "API key not valid";

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn has_credential(&self) -> bool {
        self.usable_key().is_some()
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self.usable_key().ok_or(AppError::InvalidApiKey)?;
        let request = GenerateContentRequest::json(prompt.to_string());

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GeminiError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);

            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| format!("{} {}", e.error.status, e.error.message))
                .unwrap_or(body);
            if message.contains(INVALID_KEY_MARKER) {
                return Err(AppError::InvalidApiKey);
            }
            return Err(AppError::GeminiError(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeminiError(e.to_string()))?;

        completion
            .text()
            .ok_or_else(|| AppError::GeminiError("No response from AI".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            base_url: server.uri(),
        })
    }

    #[tokio::test]
    async fn test_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "real-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "{\"summaryText\":\"hi\"}" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server, Some("real-key"))
            .generate_json("prompt")
            .await
            .unwrap();
        assert_eq!(text, "{\"summaryText\":\"hi\"}");
    }

    #[tokio::test]
    async fn test_rejected_key_is_distinguished() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = client(&server, Some("bad-key"))
            .generate_json("prompt")
            .await
            .unwrap_err();
        assert_eq!(err, AppError::InvalidApiKey);
    }

    #[tokio::test]
    async fn test_server_error_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = client(&server, Some("real-key"))
            .generate_json("prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GeminiError(_)));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client(&server, Some("real-key"))
            .generate_json("prompt")
            .await
            .unwrap_err();
        assert_eq!(err, AppError::GeminiError("No response from AI".to_string()));
    }

    #[test]
    fn test_placeholder_and_blank_keys_are_not_credentials() {
        let config = |key: Option<&str>| GeminiConfig {
            api_key: key.map(str::to_string),
            model: "m".to_string(),
            base_url: "http://localhost".to_string(),
        };
        assert!(!GeminiClient::new(config(None)).has_credential());
        assert!(!GeminiClient::new(config(Some("  "))).has_credential());
        assert!(!GeminiClient::new(config(Some(PLACEHOLDER_API_KEY))).has_credential());
        assert!(GeminiClient::new(config(Some("AIza-real"))).has_credential());
    }
}
