use crate::config::AuthConfig;
use crate::infrastructure::security::InputSanitizer;
use naarad_errors::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    country_code: &'a str,
    phone_number: &'a str,
    email: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Client for the account service that registers an email + WhatsApp pair.
#[derive(Clone)]
pub struct LoginClient {
    http_client: reqwest::Client,
    base_url: String,
    country_code: String,
}

impl LoginClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code,
        }
    }

    pub async fn login(&self, email: &str, whatsapp_number: &str) -> Result<LoginResponse, AppError> {
        let request = LoginRequest {
            country_code: &self.country_code,
            phone_number: InputSanitizer::strip_country_code(whatsapp_number, &self.country_code),
            email,
        };

        let response = self
            .http_client
            .post(format!("{}/auth/login", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Login service error: {}", status);
            return Err(AppError::LoginFailed(format!("status {}", status)));
        }

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?;
        tracing::info!("Login successful (user_id returned: {})", parsed.user_id.is_some());
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> LoginClient {
        LoginClient::new(AuthConfig {
            base_url: server.uri(),
            country_code: "+91".to_string(),
        })
    }

    #[tokio::test]
    async fn test_posts_number_without_country_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "country_code": "+91",
                "phone_number": "9876543210",
                "email": "me@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": "u-42" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .login("me@example.com", "+919876543210")
            .await
            .unwrap();
        assert_eq!(response.user_id.as_deref(), Some("u-42"));
    }

    #[tokio::test]
    async fn test_non_success_is_login_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server)
            .login("me@example.com", "+919876543210")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LoginFailed(_)));
        assert_eq!(err.user_message(), "Login failed. Please try again.");
    }
}
