use serde::{Deserialize, Serialize};

/// A preview of what a delivered WhatsApp update would look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMessage {
    pub summary_text: String,
    /// Emoji or short image description.
    pub image_url: String,
    pub action_text: String,
}

impl SampleMessage {
    pub fn new(summary_text: &str, image_url: &str, action_text: &str) -> Self {
        Self {
            summary_text: summary_text.to_string(),
            image_url: image_url.to_string(),
            action_text: action_text.to_string(),
        }
    }

    /// Placeholder shown when single-sample generation is off or failed.
    pub fn disabled() -> Self {
        Self::new(
            "Sample message generation is disabled or encountered an error. This is a mock update!",
            "⚙️",
            "Try Again Later",
        )
    }

    pub fn with_summary(mut self, summary_text: &str) -> Self {
        self.summary_text = summary_text.to_string();
        self
    }
}

/// The six tuning probes requested from the model, in the order they are
/// asked for and returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleVariant {
    DirectHit,
    DepthTest,
    BoundaryTest,
    FormatTest,
    ActionTest,
    Wildcard,
}

impl SampleVariant {
    pub const ALL: [SampleVariant; 6] = [
        SampleVariant::DirectHit,
        SampleVariant::DepthTest,
        SampleVariant::BoundaryTest,
        SampleVariant::FormatTest,
        SampleVariant::ActionTest,
        SampleVariant::Wildcard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DirectHit => "Direct Hit",
            Self::DepthTest => "Depth Test",
            Self::BoundaryTest => "Boundary Test",
            Self::FormatTest => "Format Test",
            Self::ActionTest => "Action Test",
            Self::Wildcard => "Wildcard",
        }
    }

    pub fn fallback(&self) -> SampleMessage {
        match self {
            Self::DirectHit => SampleMessage::new(
                "This is a mock 'Direct Hit' update based on your tags!",
                "🎯",
                "See More",
            ),
            Self::DepthTest => SampleMessage::new(
                "This is a mock 'Depth Test' update, perhaps more analytical.",
                "🤔",
                "Read Analysis",
            ),
            Self::BoundaryTest => SampleMessage::new(
                "This is a mock 'Boundary Test' on a related topic.",
                "🗺️",
                "Explore Topic",
            ),
            Self::FormatTest => SampleMessage::new(
                "This is a mock 'Format Test' update, trying a different layout for you.",
                "📰",
                "Read article",
            ),
            Self::ActionTest => SampleMessage::new(
                "This is a mock 'Action Test' update with a different call to action.",
                "✨",
                "Watch Video",
            ),
            Self::Wildcard => SampleMessage::new(
                "This is a mock 'Wildcard' update. How about this related idea?",
                "💡",
                "Discover",
            ),
        }
    }

    pub fn fallback_batch() -> Vec<SampleMessage> {
        Self::ALL.iter().map(SampleVariant::fallback).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_batch_is_six_distinct_labeled_records() {
        let batch = SampleVariant::fallback_batch();
        assert_eq!(batch.len(), 6);
        for (variant, sample) in SampleVariant::ALL.iter().zip(&batch) {
            assert!(sample.summary_text.contains(variant.label()));
        }
        for (i, a) in batch.iter().enumerate() {
            for b in &batch[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(SampleMessage::new("x", "📰", "Read")).unwrap();
        assert_eq!(json["summaryText"], "x");
        assert_eq!(json["imageUrl"], "📰");
        assert_eq!(json["actionText"], "Read");
    }
}
