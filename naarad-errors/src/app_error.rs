use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid WhatsApp number: {0}")]
    InvalidWhatsappNumber(String),

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Gemini request failed: {0}")]
    GeminiError(String),

    #[error("Gemini rejected the API key")]
    InvalidApiKey,

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("Alert not found")]
    AlertNotFound,

    #[error("Alert name cannot be empty")]
    InvalidAlertName,

    #[error("Custom frequency requires a delivery time")]
    MissingCustomTime,

    #[error("Invalid delivery time: {0}")]
    InvalidCustomTime(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session error: {0}")]
    Session(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text shown to the person using the page. Validation variants carry
    /// their own wording, everything else gets a fixed sentence.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(msg) | Self::InvalidWhatsappNumber(msg) => msg.clone(),
            Self::LoginFailed(_) => "Login failed. Please try again.".to_string(),
            Self::GeminiError(_) | Self::MalformedResponse(_) => {
                "Sorry, we couldn't generate a sample message at this time.".to_string()
            }
            Self::InvalidApiKey => "Could not generate sample: API key is not valid.".to_string(),
            Self::AlertNotFound => "That alert no longer exists.".to_string(),
            Self::InvalidAlertName => "Alert name cannot be empty.".to_string(),
            Self::MissingCustomTime => "Please specify a time for custom frequency.".to_string(),
            Self::InvalidCustomTime(_) => "Please enter a time as HH:MM.".to_string(),
            Self::NotLoggedIn => "Please log in to continue.".to_string(),
            Self::Session(_) | Self::Internal(_) => {
                "Something went wrong on our side. Please try again.".to_string()
            }
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::InvalidEmail(_)
                | AppError::InvalidWhatsappNumber(_)
                | AppError::InvalidAlertName
                | AppError::MissingCustomTime
                | AppError::InvalidCustomTime(_) => StatusCode::BAD_REQUEST,
                AppError::LoginFailed(_)
                | AppError::GeminiError(_)
                | AppError::InvalidApiKey
                | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
                AppError::AlertNotFound => StatusCode::NOT_FOUND,
                AppError::NotLoggedIn => StatusCode::UNAUTHORIZED,
                AppError::Session(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_pass_through() {
        let err = AppError::InvalidEmail("Email is required.".to_string());
        assert_eq!(err.user_message(), "Email is required.");
    }

    #[test]
    fn test_api_key_message_is_specific() {
        assert_eq!(
            AppError::InvalidApiKey.user_message(),
            "Could not generate sample: API key is not valid."
        );
        assert_eq!(
            AppError::GeminiError("503".to_string()).user_message(),
            "Sorry, we couldn't generate a sample message at this time."
        );
    }
}
