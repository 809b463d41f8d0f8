mod alert;
mod preference_formatter;
mod sample_message;
mod tag_hierarchy;
mod user;

pub use alert::{Alert, CategorySpecificPreferences, FollowUpAnswer, UpdateFrequency};
pub use preference_formatter::PreferenceFormatter;
pub use sample_message::{SampleMessage, SampleVariant};
pub use tag_hierarchy::{CategoryKey, CategoryNode, FollowUpQuestion, SubCategory, Tag, TagHierarchy};
pub use user::{UserPreferences, WHATSAPP_PLATFORM};
