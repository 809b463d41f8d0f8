use crate::domain::UserPreferences;
use naarad_errors::AppError;
use tower_sessions::Session;

const USER_KEY: &str = "user";

/// The visitor's onboarding state, kept in their server-side session.
#[derive(Clone)]
pub struct UserSession {
    session: Session,
}

impl UserSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn load(&self) -> Result<Option<UserPreferences>, AppError> {
        self.session
            .get::<UserPreferences>(USER_KEY)
            .await
            .map_err(|e| AppError::Session(e.to_string()))
    }

    /// Like [`load`](Self::load) but treats a missing user as not logged in.
    pub async fn require(&self) -> Result<UserPreferences, AppError> {
        self.load().await?.ok_or(AppError::NotLoggedIn)
    }

    pub async fn save(&self, user: &UserPreferences) -> Result<(), AppError> {
        self.session
            .insert(USER_KEY, user)
            .await
            .map_err(|e| AppError::Session(e.to_string()))
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        self.session
            .flush()
            .await
            .map_err(|e| AppError::Session(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) fn test_session() -> UserSession {
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    UserSession::new(Session::new(None, Arc::new(MemoryStore::default()), None))
}
