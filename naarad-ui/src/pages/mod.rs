mod dashboard;
mod frequency;
mod landing;

pub use dashboard::{DashboardPage, GetDashboardFn};
pub use frequency::{FrequencySettingsPage, GenerateSampleFn, GetAlertFn};
pub use landing::LandingPage;

/// The visitor's session, pulled from the request the server function or
/// page render is handling.
#[cfg(feature = "ssr")]
pub(crate) async fn user_session(
) -> Result<naarad_app::infrastructure::session::UserSession, server_fn::ServerFnError> {
    use naarad_app::infrastructure::session::UserSession;
    use tower_sessions::Session;

    let session = leptos_axum::extract::<Session>()
        .await
        .map_err(|e| server_fn::ServerFnError::new(e.to_string()))?;
    Ok(UserSession::new(session))
}
