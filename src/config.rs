//! Process configuration read once at startup.

const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];
const MODEL_VAR: &str = "LUMINA_AI_MODEL";
const BASE_URL_VAR: &str = "LUMINA_AI_BASE_URL";

pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the AI content service.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    /// Credential for the generative API. `None` makes gateway calls fail cleanly.
    pub api_key: Option<String>,
    pub ai_model: String,
    pub ai_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            ai_model: DEFAULT_AI_MODEL.to_string(),
            ai_base_url: DEFAULT_AI_BASE_URL.to_string(),
        }
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("ai_model", &self.ai_model)
            .field("ai_base_url", &self.ai_base_url)
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = API_KEY_VARS.iter().find_map(|name| read(*name));
        let ai_model = read(MODEL_VAR).unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());
        let ai_base_url = read(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string());

        Self {
            api_key,
            ai_model,
            ai_base_url,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert!(!config.has_credential());
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_blank_key_is_treated_as_missing() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_KEY", "   "),
            ("GEMINI_API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));

        let config = AppConfig::from_lookup(lookup_from(&[("API_KEY", "")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides_model_and_base_url() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LUMINA_AI_MODEL", "custom-model"),
            ("LUMINA_AI_BASE_URL", "http://localhost:9000/v1/"),
        ]));
        assert_eq!(config.ai_model, "custom-model");
        assert_eq!(config.ai_base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_debug_output_hides_key() {
        let config = AppConfig::from_lookup(lookup_from(&[("API_KEY", "secret-value")]));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("<set>"));
    }
}
