mod login_client;

pub use login_client::{LoginClient, LoginResponse};
