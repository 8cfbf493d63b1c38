//! Configuration schema types for Muskito.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuskitoConfig {
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Completion model and sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// 0.0-2.0
    pub temperature: f64,
    /// 1-32768, applied to streaming and non-streaming replies alike.
    pub max_tokens: u32,
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "llama-3.1-8b-instant".into(),
            temperature: 0.9,
            max_tokens: 512,
            base_url: "https://api.groq.com/openai/v1".into(),
        }
    }
}

/// Conversation behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Personality identifier the session starts in.
    pub default_mode: String,
    /// Print replies as they arrive instead of all at once.
    pub stream: bool,
    /// Drop the user message when its reply fails.
    pub rollback_failed_turns: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_mode: "happy_delusional".into(),
            stream: true,
            rollback_failed_turns: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
