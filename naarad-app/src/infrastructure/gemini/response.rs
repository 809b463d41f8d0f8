use crate::domain::SampleMessage;
use naarad_errors::AppError;
use regex_lite::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// One record as the model writes it. The model is asked for
/// `imageSuggestion`; `imageUrl` wins when it is present too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSampleMessage {
    summary_text: String,
    action_text: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    image_suggestion: Option<String>,
}

impl From<RawSampleMessage> for SampleMessage {
    fn from(raw: RawSampleMessage) -> Self {
        let image_url = raw
            .image_url
            .filter(|url| !url.is_empty())
            .or(raw.image_suggestion)
            .unwrap_or_default();
        Self {
            summary_text: raw.summary_text,
            image_url,
            action_text: raw.action_text,
        }
    }
}

/// Trims the payload and, when the whole thing is a fenced code block
/// (with or without a language tag), keeps only the inside.
pub fn unwrap_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    FENCE
        .captures(trimmed)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().trim())
        .filter(|inner| !inner.is_empty())
        .unwrap_or(trimmed)
}

pub fn parse_sample(raw: &str) -> Result<SampleMessage, AppError> {
    let json = unwrap_code_fence(raw);
    serde_json::from_str::<RawSampleMessage>(json)
        .map(SampleMessage::from)
        .map_err(|e| AppError::MalformedResponse(e.to_string()))
}

pub fn parse_samples(raw: &str) -> Result<Vec<SampleMessage>, AppError> {
    let json = unwrap_code_fence(raw);
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) if !items.is_empty() => items,
        _ => {
            return Err(AppError::MalformedResponse(
                "AI response was not a valid array.".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<RawSampleMessage>(item)
                .map(SampleMessage::from)
                .map_err(|e| AppError::MalformedResponse(e.to_string()))
        })
        .collect()
}
