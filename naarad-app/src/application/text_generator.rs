use async_trait::async_trait;
use naarad_errors::AppError;

/// A hosted model that answers a prompt with (possibly fenced) JSON text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a usable credential is configured. Without one no request is
    /// ever attempted.
    fn has_credential(&self) -> bool;

    async fn generate_json(&self, prompt: &str) -> Result<String, AppError>;
}
