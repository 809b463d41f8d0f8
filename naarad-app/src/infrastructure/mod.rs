pub mod auth;
pub mod gemini;
pub mod security;
pub mod session;
