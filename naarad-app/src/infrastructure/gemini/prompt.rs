use crate::domain::SampleVariant;

const SAMPLE_SHAPE: &str = r#"{
  "summaryText": "string",
  "imageSuggestion": "string (a brief suggestion for a relevant emoji or a short image description)",
  "actionText": "string"
}"#;

pub fn build_sample_prompt(preferences: &str) -> String {
    format!(
        r#"Based on the user's alert configuration, generate a single, realistic, and compelling sample WhatsApp update. The response MUST be a valid JSON object.

User Config:
{preferences}
The JSON object must have this structure:
{shape}

JSON Response:"#,
        preferences = preferences,
        shape = SAMPLE_SHAPE
    )
}

pub fn build_tuning_prompt(preferences: &str) -> String {
    let count = SampleVariant::ALL.len();
    let instructions = SampleVariant::ALL
        .iter()
        .enumerate()
        .map(|(i, variant)| format!("{}.  **{}:** {}", i + 1, variant.label(), variant_brief(*variant)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Based on the user's alert configuration, generate an array of exactly {count} distinct sample WhatsApp updates to help fine-tune their preferences. The response MUST be a valid JSON array of objects.

User Config:
{preferences}
Instructions for the {count} samples (provide variety):
{instructions}

Each object in the array must have this structure:
{shape}

JSON Response:"#,
        count = count,
        preferences = preferences,
        instructions = instructions,
        shape = SAMPLE_SHAPE
    )
}

fn variant_brief(variant: SampleVariant) -> &'static str {
    match variant {
        SampleVariant::DirectHit => {
            "A message that directly matches their core interests and instructions. This should be what they expect."
        }
        SampleVariant::DepthTest => {
            "A message on the same topic but with a different style or depth. (e.g., more analytical/opinionated if they prefer facts, or a human-interest story related to the topic)."
        }
        SampleVariant::BoundaryTest => {
            "A message on a closely related but not explicitly requested topic to gauge their broader interests (e.g., if they like 'IPL Cricket', a message about a major football team's new signing)."
        }
        SampleVariant::FormatTest => {
            "A message with a different format (e.g., using bullet points, a question, or a more casual tone)."
        }
        SampleVariant::ActionTest => {
            "A message with a different type of call-to-action (e.g., \"Watch Video\", \"Read Full Story\", \"See Stats\")."
        }
        SampleVariant::Wildcard => {
            "An interesting update that is tangentially related to their profile, testing for serendipity."
        }
    }
}
