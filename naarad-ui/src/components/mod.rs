mod alert_card;
mod detail_tag;
mod error_display;
mod progress_indicator;
mod whatsapp_preview;

pub use alert_card::{interest_chips, AlertCard, InterestChip};
pub use detail_tag::{tag_text_color, DisplayDetailTag};
pub use error_display::ErrorDisplay;
pub use progress_indicator::ProgressIndicator;
pub use whatsapp_preview::WhatsAppPreview;
