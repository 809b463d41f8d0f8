mod client;
mod prompt;
mod response;
mod types;

pub use client::{GeminiClient, PLACEHOLDER_API_KEY};
pub use prompt::{build_sample_prompt, build_tuning_prompt};
pub use response::{parse_sample, parse_samples, unwrap_code_fence};
