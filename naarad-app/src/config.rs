const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_AUTH_API_URL: &str = "http://3.107.72.54:8000";
const DEFAULT_COUNTRY_CODE: &str = "+91";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: String,
    pub country_code: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads settings from the process environment (after `.env` has been
    /// loaded by the binary). Nothing here is mandatory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            },
            auth: AuthConfig {
                base_url: get("AUTH_API_URL").unwrap_or_else(|| DEFAULT_AUTH_API_URL.to_string()),
                country_code: get("LOGIN_COUNTRY_CODE")
                    .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let defaults = config(&[]);
        assert_eq!(defaults.gemini.api_key, None);
        assert_eq!(defaults.gemini.model, "gemini-2.5-flash");
        assert_eq!(defaults.auth.country_code, "+91");
    }

    #[test]
    fn test_api_key_fallback_and_blank_values() {
        let legacy = config(&[("API_KEY", "legacy"), ("GEMINI_MODEL", "  ")]);
        assert_eq!(legacy.gemini.api_key.as_deref(), Some("legacy"));
        assert_eq!(legacy.gemini.model, "gemini-2.5-flash");

        let both = config(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "primary")]);
        assert_eq!(both.gemini.api_key.as_deref(), Some("primary"));
    }
}
