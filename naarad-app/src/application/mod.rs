mod alert_editor;
mod generate_sample;
mod login_user;
mod text_generator;

pub use alert_editor::AlertEditor;
pub use generate_sample::SampleMessageGenerator;
pub use login_user::{LoginOutcome, LoginUser};
pub use text_generator::TextGenerator;
