use axum::extract::Path;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use naarad_app::application::AlertEditor;
use naarad_app::domain::UpdateFrequency;
use naarad_app::infrastructure::session::UserSession;
use naarad_app::AppContext;
use naarad_errors::AppError;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    whatsapp_number: String,
}

#[derive(Deserialize)]
pub struct RenameForm {
    name: String,
}

#[derive(Deserialize)]
pub struct FrequencyForm {
    frequency: String,
    #[serde(default)]
    custom_time: Option<String>,
}

/// Form posts and the JSON samples endpoint. Expects an `AppContext`
/// extension and a session layer on the surrounding router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/alerts/new", post(new_alert))
        .route("/alerts/{id}/rename", post(rename_alert))
        .route("/alerts/{id}/toggle", post(toggle_alert))
        .route("/alerts/{id}/delete", post(delete_alert))
        .route("/alerts/{id}/frequency", post(set_frequency))
        .route("/api/alerts/{id}/samples", get(tuning_samples))
}

fn redirect_with_error(path: &str, error: &AppError) -> Response {
    if *error == AppError::NotLoggedIn {
        return Redirect::to("/").into_response();
    }
    let message = urlencoding::encode(&error.user_message()).into_owned();
    Redirect::to(&format!("{}?error={}", path, message)).into_response()
}

async fn login(
    Extension(ctx): Extension<AppContext>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let session = UserSession::new(session);

    let result = async {
        let existing = session.load().await?;
        let (user, outcome) = ctx
            .login_user
            .execute(existing, &form.email, &form.whatsapp_number)
            .await?;
        session.save(&user).await?;
        Ok::<_, AppError>(outcome)
    }
    .await;

    match result {
        Ok(outcome) => Redirect::to(&outcome.redirect_path()).into_response(),
        Err(e) => {
            tracing::warn!("Login rejected: {}", e);
            let message = urlencoding::encode(&e.user_message()).into_owned();
            Redirect::to(&format!("/?error={}#login", message)).into_response()
        }
    }
}

async fn logout(session: Session) -> Response {
    if let Err(e) = UserSession::new(session).clear().await {
        tracing::error!("Failed to clear session: {}", e);
    }
    Redirect::to("/").into_response()
}

async fn new_alert(session: Session) -> Response {
    match AlertEditor::new(UserSession::new(session)).start_new_alert().await {
        Ok(id) => Redirect::to(&format!("/alerts/{}/frequency", id)).into_response(),
        Err(e) => redirect_with_error("/dashboard", &e),
    }
}

async fn rename_alert(
    Path(id): Path<Uuid>,
    session: Session,
    Form(form): Form<RenameForm>,
) -> Response {
    match AlertEditor::new(UserSession::new(session)).rename(id, &form.name).await {
        Ok(()) => Redirect::to("/dashboard").into_response(),
        Err(e) => redirect_with_error("/dashboard", &e),
    }
}

async fn toggle_alert(Path(id): Path<Uuid>, session: Session) -> Response {
    match AlertEditor::new(UserSession::new(session)).toggle(id).await {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(e) => redirect_with_error("/dashboard", &e),
    }
}

async fn delete_alert(Path(id): Path<Uuid>, session: Session) -> Response {
    match AlertEditor::new(UserSession::new(session)).delete(id).await {
        Ok(()) => Redirect::to("/dashboard").into_response(),
        Err(e) => redirect_with_error("/dashboard", &e),
    }
}

async fn set_frequency(
    Path(id): Path<Uuid>,
    session: Session,
    Form(form): Form<FrequencyForm>,
) -> Response {
    let page = format!("/alerts/{}/frequency", id);
    let Some(frequency) = UpdateFrequency::parse(&form.frequency) else {
        let error = AppError::Internal(format!("Unknown frequency: {}", form.frequency));
        return redirect_with_error(&page, &error);
    };

    let editor = AlertEditor::new(UserSession::new(session));
    match editor
        .set_frequency(id, frequency, form.custom_time.as_deref())
        .await
    {
        Ok(()) => Redirect::to("/dashboard").into_response(),
        Err(e) => redirect_with_error(&page, &e),
    }
}

async fn tuning_samples(
    Extension(ctx): Extension<AppContext>,
    Path(id): Path<Uuid>,
    session: Session,
) -> Result<Json<Vec<naarad_app::domain::SampleMessage>>, AppError> {
    let user = UserSession::new(session).require().await?;
    let alert = user.alert(id)?;

    Ok(Json(ctx.tuning_samples(alert, &user).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use naarad_app::config::{AppConfig, AuthConfig, GeminiConfig};
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    fn app() -> Router {
        let config = AppConfig {
            gemini: GeminiConfig {
                api_key: None,
                model: "gemini-2.5-flash".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
            },
            auth: AuthConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                country_code: "+91".to_string(),
            },
        };
        routes()
            .layer(Extension(AppContext::new(config)))
            .layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    #[tokio::test]
    async fn test_invalid_login_redirects_with_message() {
        let request = Request::post("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=nope&whatsapp_number=%2B919876543210"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?error=Please%20enter%20a%20valid%20email%20address.#login"
        );
    }

    #[tokio::test]
    async fn test_samples_require_login() {
        let request = Request::get(format!("/api/alerts/{}/samples", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_edits_without_session_go_to_landing() {
        let request = Request::post(format!("/alerts/{}/toggle", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
