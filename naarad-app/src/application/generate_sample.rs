use super::TextGenerator;
use crate::domain::{Alert, PreferenceFormatter, SampleMessage, SampleVariant, UserPreferences};
use crate::infrastructure::gemini::{
    build_sample_prompt, build_tuning_prompt, parse_sample, parse_samples,
};
use naarad_errors::AppError;
use std::sync::Arc;

/// Produces preview messages for an alert.
///
/// The public operations never fail: missing credentials, transport errors
/// and unusable payloads all turn into fixed placeholder samples. The
/// `attempt_*` methods expose the underlying result for callers that want to
/// see what went wrong.
pub struct SampleMessageGenerator {
    backend: Arc<dyn TextGenerator>,
    formatter: PreferenceFormatter<'static>,
}

impl SampleMessageGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend,
            formatter: PreferenceFormatter::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.has_credential()
    }

    pub async fn generate_one(&self, alert: &Alert, user: &UserPreferences) -> SampleMessage {
        if !self.is_enabled() {
            return SampleMessage::disabled();
        }

        match self.attempt_one(alert, user).await {
            Ok(sample) => sample,
            Err(e) => {
                tracing::error!("Error generating sample message for alert {}: {}", alert.id, e);
                SampleMessage::disabled().with_summary(failure_summary(&e))
            }
        }
    }

    /// Always exactly six samples, in [`SampleVariant::ALL`] order when they
    /// come from the fallback set.
    pub async fn generate_batch(
        &self,
        alert: &Alert,
        user: &UserPreferences,
    ) -> Vec<SampleMessage> {
        if !self.is_enabled() {
            return SampleVariant::fallback_batch();
        }

        match self.attempt_batch(alert, user).await {
            Ok(samples) => fill_to_six(samples),
            Err(e) => {
                tracing::error!("Error generating tuning samples for alert {}: {}", alert.id, e);
                SampleVariant::fallback_batch()
            }
        }
    }

    pub async fn attempt_one(
        &self,
        alert: &Alert,
        user: &UserPreferences,
    ) -> Result<SampleMessage, AppError> {
        let prompt = build_sample_prompt(&self.formatter.format(alert, user));
        let raw = self.backend.generate_json(&prompt).await?;
        parse_sample(&raw)
    }

    pub async fn attempt_batch(
        &self,
        alert: &Alert,
        user: &UserPreferences,
    ) -> Result<Vec<SampleMessage>, AppError> {
        let prompt = build_tuning_prompt(&self.formatter.format(alert, user));
        let raw = self.backend.generate_json(&prompt).await?;
        parse_samples(&raw)
    }
}

fn failure_summary(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidApiKey => "Could not generate sample: API key is not valid.",
        _ => "Sorry, we couldn't generate a sample message at this time.",
    }
}

fn fill_to_six(mut samples: Vec<SampleMessage>) -> Vec<SampleMessage> {
    let wanted = SampleVariant::ALL.len();
    if samples.len() != wanted {
        tracing::warn!("Model returned {} tuning samples, expected {}", samples.len(), wanted);
    }
    samples.truncate(wanted);
    let have = samples.len();
    samples.extend(SampleVariant::ALL[have..].iter().map(SampleVariant::fallback));
    samples
}
