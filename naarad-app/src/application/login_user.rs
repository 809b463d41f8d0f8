use crate::domain::UserPreferences;
use crate::infrastructure::auth::LoginClient;
use crate::infrastructure::security::InputSanitizer;
use naarad_errors::AppError;

/// Where the visitor goes after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// First visit: a fresh alert was started and needs its cadence set.
    NewAlert(uuid::Uuid),
    Dashboard,
}

impl LoginOutcome {
    pub fn redirect_path(&self) -> String {
        match self {
            Self::NewAlert(id) => format!("/alerts/{}/frequency", id),
            Self::Dashboard => "/dashboard".to_string(),
        }
    }
}

pub struct LoginUser {
    client: LoginClient,
}

impl LoginUser {
    pub fn new(client: LoginClient) -> Self {
        Self { client }
    }

    /// Validates the form, registers the pair with the account service and
    /// folds the result into the visitor's existing preferences.
    pub async fn execute(
        &self,
        existing: Option<UserPreferences>,
        email: &str,
        whatsapp_number: &str,
    ) -> Result<(UserPreferences, LoginOutcome), AppError> {
        let email = InputSanitizer::validate_email(email)?;
        let whatsapp_number = InputSanitizer::validate_whatsapp_number(whatsapp_number)?;

        let response = self.client.login(&email, &whatsapp_number).await?;

        let mut user = existing.unwrap_or_default();
        user.email = email;
        user.whatsapp_number = whatsapp_number;
        user.is_whatsapp_confirmed = true;
        if response.user_id.is_some() {
            user.user_id = response.user_id;
        }

        let outcome = if user.is_first_time_setup() {
            LoginOutcome::NewAlert(user.start_new_alert())
        } else {
            LoginOutcome::Dashboard
        };

        Ok((user, outcome))
    }
}
