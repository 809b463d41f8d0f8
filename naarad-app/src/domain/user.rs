use super::{Alert, UpdateFrequency};
use naarad_errors::AppError;
use serde::{Deserialize, Serialize};

pub const WHATSAPP_PLATFORM: &str = "WhatsApp";

/// Everything the onboarding flow knows about the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub email: String,
    pub whatsapp_number: String,
    pub platform: String,
    pub is_whatsapp_confirmed: bool,
    /// Id handed out by the login service, if it returned one.
    pub user_id: Option<String>,
    pub alerts: Vec<Alert>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            email: String::new(),
            whatsapp_number: String::new(),
            platform: WHATSAPP_PLATFORM.to_string(),
            is_whatsapp_confirmed: false,
            user_id: None,
            alerts: Vec::new(),
        }
    }
}

impl UserPreferences {
    pub fn new(email: String, whatsapp_number: String) -> Self {
        Self {
            email,
            whatsapp_number,
            ..Self::default()
        }
    }

    pub fn is_first_time_setup(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn alert(&self, id: uuid::Uuid) -> Result<&Alert, AppError> {
        self.alerts
            .iter()
            .find(|a| a.id == id)
            .ok_or(AppError::AlertNotFound)
    }

    fn alert_mut(&mut self, id: uuid::Uuid) -> Result<&mut Alert, AppError> {
        self.alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::AlertNotFound)
    }

    pub fn start_new_alert(&mut self) -> uuid::Uuid {
        let alert = Alert::new(format!("My Alert {}", self.alerts.len() + 1));
        let id = alert.id;
        self.alerts.push(alert);
        id
    }

    pub fn rename_alert(&mut self, id: uuid::Uuid, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidAlertName);
        }
        self.alert_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Flips the alert between Active and Paused, returning the new state.
    pub fn toggle_alert(&mut self, id: uuid::Uuid) -> Result<bool, AppError> {
        let alert = self.alert_mut(id)?;
        alert.is_active = !alert.is_active;
        Ok(alert.is_active)
    }

    pub fn delete_alert(&mut self, id: uuid::Uuid) -> Result<(), AppError> {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        if self.alerts.len() == before {
            return Err(AppError::AlertNotFound);
        }
        Ok(())
    }

    pub fn set_frequency(
        &mut self,
        id: uuid::Uuid,
        frequency: UpdateFrequency,
        custom_time: Option<&str>,
    ) -> Result<(), AppError> {
        self.alert_mut(id)?.set_frequency(frequency, custom_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserPreferences {
        UserPreferences::new("me@example.com".to_string(), "+919876543210".to_string())
    }

    #[test]
    fn test_new_alerts_are_numbered() {
        let mut user = user();
        assert!(user.is_first_time_setup());

        let first = user.start_new_alert();
        let second = user.start_new_alert();

        assert_eq!(user.alert(first).unwrap().name, "My Alert 1");
        assert_eq!(user.alert(second).unwrap().name, "My Alert 2");
        assert!(user.alert(first).unwrap().is_active);
        assert!(!user.is_first_time_setup());
    }

    #[test]
    fn test_rename_rejects_blank_and_keeps_old_name() {
        let mut user = user();
        let id = user.start_new_alert();

        assert_eq!(user.rename_alert(id, "   "), Err(AppError::InvalidAlertName));
        assert_eq!(user.alert(id).unwrap().name, "My Alert 1");

        user.rename_alert(id, "  Cricket Watch ").unwrap();
        assert_eq!(user.alert(id).unwrap().name, "Cricket Watch");
    }

    #[test]
    fn test_toggle_and_delete() {
        let mut user = user();
        let id = user.start_new_alert();

        assert_eq!(user.toggle_alert(id), Ok(false));
        assert_eq!(user.toggle_alert(id), Ok(true));

        user.delete_alert(id).unwrap();
        assert_eq!(user.delete_alert(id), Err(AppError::AlertNotFound));
        assert_eq!(user.toggle_alert(id), Err(AppError::AlertNotFound));
    }

    #[test]
    fn test_set_frequency_on_unknown_alert() {
        let mut user = user();
        let err = user
            .set_frequency(uuid::Uuid::new_v4(), UpdateFrequency::Hourly, None)
            .unwrap_err();
        assert_eq!(err, AppError::AlertNotFound);
    }

    #[test]
    fn test_session_round_trip_keeps_alerts() {
        let mut user = user();
        let id = user.start_new_alert();
        user.set_frequency(id, UpdateFrequency::Custom, Some("09:00"))
            .unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["alerts"][0]["frequency"], "Custom");
        assert_eq!(json["alerts"][0]["customFrequencyTime"], "09:00");
        assert_eq!(json["platform"], "WhatsApp");

        let back: UserPreferences = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
