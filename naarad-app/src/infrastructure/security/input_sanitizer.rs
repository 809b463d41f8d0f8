use naarad_errors::AppError;
use regex_lite::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_FREE_TEXT_LENGTH: usize = 200;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));
// E.164: optional plus, no leading zero, at most 15 digits.
static WHATSAPP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern is valid"));

pub struct InputSanitizer;

impl InputSanitizer {
    pub fn validate_email(email: &str) -> Result<String, AppError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::InvalidEmail("Email is required.".to_string()));
        }

        if email.len() > MAX_EMAIL_LENGTH || !EMAIL.is_match(email) {
            return Err(AppError::InvalidEmail(
                "Please enter a valid email address.".to_string(),
            ));
        }

        Ok(email.to_string())
    }

    pub fn validate_whatsapp_number(number: &str) -> Result<String, AppError> {
        let number = number.trim();

        if number.is_empty() {
            return Err(AppError::InvalidWhatsappNumber(
                "WhatsApp number is required.".to_string(),
            ));
        }

        if !WHATSAPP_NUMBER.is_match(number) {
            return Err(AppError::InvalidWhatsappNumber(
                "Please enter a valid WhatsApp number (e.g., +1234567890).".to_string(),
            ));
        }

        Ok(number.to_string())
    }

    /// Drops a leading `country_code` so the login service gets the
    /// subscriber number alone.
    pub fn strip_country_code<'a>(number: &'a str, country_code: &str) -> &'a str {
        number.strip_prefix(country_code).unwrap_or(number)
    }

    /// Cleans a free-text field (alert names, custom answers) before it is
    /// stored and later quoted into a prompt.
    pub fn sanitize_free_text(input: &str) -> String {
        input
            .chars()
            .filter(|c| !c.is_control())
            .take(MAX_FREE_TEXT_LENGTH)
            .collect::<String>()
            .replace("```", "")
            .trim()
            .to_string()
    }
}
