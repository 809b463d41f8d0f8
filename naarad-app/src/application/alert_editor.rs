use crate::domain::{UpdateFrequency, UserPreferences};
use crate::infrastructure::security::InputSanitizer;
use crate::infrastructure::session::UserSession;
use naarad_errors::AppError;
use uuid::Uuid;

/// Dashboard and cadence-page edits, applied to the user held in the
/// request's session. Every operation loads, mutates, then saves.
pub struct AlertEditor {
    session: UserSession,
}

impl AlertEditor {
    pub fn new(session: UserSession) -> Self {
        Self { session }
    }

    async fn update<T>(
        &self,
        edit: impl FnOnce(&mut UserPreferences) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut user = self.session.require().await?;
        let out = edit(&mut user)?;
        self.session.save(&user).await?;
        Ok(out)
    }

    pub async fn start_new_alert(&self) -> Result<Uuid, AppError> {
        let id = self.update(|user| Ok(user.start_new_alert())).await?;
        tracing::info!("Started alert {}", id);
        Ok(id)
    }

    pub async fn rename(&self, id: Uuid, name: &str) -> Result<(), AppError> {
        let name = InputSanitizer::sanitize_free_text(name);
        self.update(|user| user.rename_alert(id, &name)).await
    }

    pub async fn toggle(&self, id: Uuid) -> Result<bool, AppError> {
        self.update(|user| user.toggle_alert(id)).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.update(|user| user.delete_alert(id)).await?;
        tracing::info!("Deleted alert {}", id);
        Ok(())
    }

    pub async fn set_frequency(
        &self,
        id: Uuid,
        frequency: UpdateFrequency,
        custom_time: Option<&str>,
    ) -> Result<(), AppError> {
        self.update(|user| user.set_frequency(id, frequency, custom_time))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session::test_session;

    async fn logged_in() -> (AlertEditor, UserSession) {
        let session = test_session();
        let user = UserPreferences::new("me@example.com".to_string(), "+919876543210".to_string());
        session.save(&user).await.unwrap();
        (AlertEditor::new(session.clone()), session)
    }

    #[tokio::test]
    async fn test_requires_login() {
        let editor = AlertEditor::new(test_session());
        assert_eq!(editor.start_new_alert().await, Err(AppError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_edits_are_persisted() {
        let (editor, session) = logged_in().await;
        let id = editor.start_new_alert().await.unwrap();

        editor.rename(id, "  Cricket\n Watch ").await.unwrap();
        assert!(!editor.toggle(id).await.unwrap());
        editor
            .set_frequency(id, UpdateFrequency::Custom, Some(" 08:30 "))
            .await
            .unwrap();

        let user = session.require().await.unwrap();
        let alert = user.alert(id).unwrap();
        assert_eq!(alert.name, "Cricket Watch");
        assert!(!alert.is_active);
        assert_eq!(alert.frequency_line(), "Custom at 08:30");
    }

    #[tokio::test]
    async fn test_failed_edit_leaves_session_untouched() {
        let (editor, session) = logged_in().await;
        let id = editor.start_new_alert().await.unwrap();
        let before = session.require().await.unwrap();

        assert_eq!(editor.rename(id, "   ").await, Err(AppError::InvalidAlertName));
        assert_eq!(
            editor.set_frequency(id, UpdateFrequency::Custom, Some("")).await,
            Err(AppError::MissingCustomTime)
        );
        assert_eq!(editor.toggle(Uuid::new_v4()).await, Err(AppError::AlertNotFound));

        assert_eq!(session.require().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let (editor, session) = logged_in().await;
        let id = editor.start_new_alert().await.unwrap();

        editor.delete(id).await.unwrap();
        assert!(session.require().await.unwrap().alerts.is_empty());
        assert_eq!(editor.delete(id).await, Err(AppError::AlertNotFound));
    }
}
