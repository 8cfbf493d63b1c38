//! Groq client configuration and credential resolution.

use std::fmt;
use std::time::Duration;

use crate::session::SessionError;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq API client configuration.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub connect_timeout: Duration,
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Resolve the API key.
    ///
    /// Resolution order:
    /// 1. `explicit` argument
    /// 2. `GROQ_API_KEY` env var
    ///
    /// Blank values count as missing.
    pub fn resolve(explicit: Option<String>) -> Result<Self, SessionError> {
        Self::resolve_with(explicit, std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn resolve_with(
        explicit: Option<String>,
        from_env: Option<String>,
    ) -> Result<Self, SessionError> {
        explicit
            .into_iter()
            .chain(from_env)
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                SessionError::Configuration(format!(
                    "Groq API key not found. Set {API_KEY_ENV} or pass the key explicitly."
                ))
            })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_env() {
        let config =
            GroqConfig::resolve_with(Some("gsk_explicit".into()), Some("gsk_env".into())).unwrap();
        assert_eq!(config.api_key, "gsk_explicit");
    }

    #[test]
    fn falls_back_to_env() {
        let config = GroqConfig::resolve_with(None, Some("gsk_env".into())).unwrap();
        assert_eq!(config.api_key, "gsk_env");

        let config = GroqConfig::resolve_with(Some("   ".into()), Some("gsk_env".into())).unwrap();
        assert_eq!(config.api_key, "gsk_env");
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = GroqConfig::resolve_with(None, None).unwrap_err();
        assert!(matches!(err, SessionError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));

        let err = GroqConfig::resolve_with(Some(String::new()), Some(" ".into())).unwrap_err();
        assert!(matches!(err, SessionError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_key() {
        let config = GroqConfig::new("gsk_secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = GroqConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(
            GroqConfig::new("k").completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }
}
