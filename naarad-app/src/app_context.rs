use crate::application::{LoginUser, SampleMessageGenerator, TextGenerator};
use crate::domain::{Alert, SampleMessage, SampleVariant, UserPreferences};
use crate::config::AppConfig;
use crate::infrastructure::auth::LoginClient;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::security::RateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub sample_generator: Arc<SampleMessageGenerator>,
    pub login_user: Arc<LoginUser>,
    pub rate_limiter: RateLimiter,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let gemini = GeminiClient::new(config.gemini);
        Self::with_backend(Arc::new(gemini), LoginClient::new(config.auth))
    }

    /// Wires the use cases around any text backend.
    pub fn with_backend(backend: Arc<dyn TextGenerator>, login_client: LoginClient) -> Self {
        Self {
            sample_generator: Arc::new(SampleMessageGenerator::new(backend)),
            login_user: Arc::new(LoginUser::new(login_client)),
            rate_limiter: RateLimiter::new(),
        }
    }

    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        tracing::info!(
            "Using Gemini model {} (auth service at {})",
            config.gemini.model,
            config.auth.base_url
        );

        let context = Self::new(config);
        if !context.sample_generator.is_enabled() {
            tracing::warn!("GEMINI_API_KEY is not set; sample messages will use placeholders");
        }
        context
    }

    /// Live preview for the cadence page. Over the preview limit the
    /// placeholder sample is returned instead of calling the backend.
    pub async fn preview_sample(&self, alert: &Alert, user: &UserPreferences) -> SampleMessage {
        if !self.preview_allowed(&user.email) {
            return SampleMessage::disabled();
        }
        self.sample_generator.generate_one(alert, user).await
    }

    /// The six tuning samples, falling back to the fixed set over the limit.
    pub async fn tuning_samples(
        &self,
        alert: &Alert,
        user: &UserPreferences,
    ) -> Vec<SampleMessage> {
        if !self.preview_allowed(&user.email) {
            return SampleVariant::fallback_batch();
        }
        self.sample_generator.generate_batch(alert, user).await
    }

    // Placeholders cost nothing, so only real backend calls are counted.
    fn preview_allowed(&self, key: &str) -> bool {
        if !self.sample_generator.is_enabled() {
            return true;
        }
        match self.rate_limiter.check_rate_limit(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Preview limit reached: {}", e.message());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use async_trait::async_trait;
    use naarad_errors::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE: &str = r#"{"summaryText":"IPL final tonight","actionText":"See More","imageSuggestion":"🏏"}"#;

    struct CountingGenerator {
        credential: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        fn has_credential(&self) -> bool {
            self.credential
        }

        async fn generate_json(&self, prompt: &str) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if prompt.contains("exactly 6") {
                Ok(format!("[{}]", vec![SAMPLE; 6].join(",")))
            } else {
                Ok(SAMPLE.to_string())
            }
        }
    }

    fn context(credential: bool) -> (AppContext, Arc<CountingGenerator>) {
        let backend = Arc::new(CountingGenerator {
            credential,
            calls: AtomicUsize::new(0),
        });
        let login = LoginClient::new(AuthConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            country_code: "+91".to_string(),
        });
        let mut ctx = AppContext::with_backend(backend.clone(), login);
        ctx.rate_limiter = RateLimiter::with_limits(2, 10);
        (ctx, backend)
    }

    fn user_with_alert() -> (UserPreferences, Alert) {
        let mut user = UserPreferences::new("me@example.com".to_string(), "+919876543210".to_string());
        let id = user.start_new_alert();
        let alert = user.alerts.iter().find(|a| a.id == id).cloned().unwrap();
        (user, alert)
    }

    #[tokio::test]
    async fn test_preview_over_limit_falls_back_to_placeholder() {
        let (ctx, backend) = context(true);
        let (user, alert) = user_with_alert();

        for _ in 0..2 {
            let sample = ctx.preview_sample(&alert, &user).await;
            assert_eq!(sample.summary_text, "IPL final tonight");
        }
        let sample = ctx.preview_sample(&alert, &user).await;

        assert_eq!(sample, SampleMessage::disabled());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_tuning_samples_over_limit_fall_back_to_fixed_set() {
        let (ctx, backend) = context(true);
        let (user, alert) = user_with_alert();

        ctx.tuning_samples(&alert, &user).await;
        ctx.tuning_samples(&alert, &user).await;
        let samples = ctx.tuning_samples(&alert, &user).await;

        assert_eq!(samples, SampleVariant::fallback_batch());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_placeholders_are_never_limited() {
        let (ctx, backend) = context(false);
        let (user, alert) = user_with_alert();

        for _ in 0..10 {
            assert_eq!(ctx.preview_sample(&alert, &user).await, SampleMessage::disabled());
        }
        assert_eq!(ctx.tuning_samples(&alert, &user).await.len(), 6);
        assert!(ctx.rate_limiter.check_rate_limit(&user.email).is_ok());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }
}
