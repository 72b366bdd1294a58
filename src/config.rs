//! Runtime configuration loaded from the environment.
//!
//! Capability flags are explicit here instead of being probed at module load:
//! a missing Gemini credential means the pipeline runs in demo mode and every
//! response degrades to the fallback table.

use std::env;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_PORT: u16 = 3001;

/// Application configuration, read once at startup and shared via `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Gemini API key. `None` means no credential: the AI invoker
    /// short-circuits and every task serves canned fallback data.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Remote OCR service endpoint. `None` disables image intake.
    pub ocr_endpoint: Option<String>,
    pub ocr_api_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    /// Empty strings are treated the same as unset variables.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            gemini_api_key: non_empty(env::var("GEMINI_API_KEY").ok()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            ocr_endpoint: non_empty(env::var("OCR_ENDPOINT").ok()),
            ocr_api_key: non_empty(env::var("OCR_API_KEY").ok()),
        }
    }

    /// Configuration with no external services, used by tests and demo mode.
    pub fn offline() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            ocr_endpoint: None,
            ocr_api_key: None,
        }
    }

    /// Whether a generative-model credential is configured.
    pub fn ai_available(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_config_has_no_capabilities() {
        let config = AppConfig::offline();
        assert!(!config.ai_available());
        assert!(config.ocr_endpoint.is_none());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
    }

    #[test]
    fn blank_values_count_as_unset() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
    }
}
