//! Configuration validation.
//!
//! Checks numeric ranges and known identifiers, collecting every problem
//! into a single `ConfigError`.

use muskito_common::ConfigError;

use crate::schema::MuskitoConfig;

/// Personality identifiers a config may name.
pub const MODE_IDS: [&str; 2] = ["happy_delusional", "brutal_roaster"];

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MuskitoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }
    validate_range_f64(&mut errors, "model.temperature", config.model.temperature, 0.0, 2.0);
    validate_range(&mut errors, "model.max_tokens", config.model.max_tokens, 1, 32768);
    let base_url = &config.model.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(format!("model.base_url = {base_url:?} must be an http(s) URL"));
    }

    validate_one_of(
        &mut errors,
        "session.default_mode",
        &config.session.default_mode,
        &MODE_IDS,
    );
    validate_one_of(&mut errors, "logging.level", &config.logging.level, &LOG_LEVELS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    // NaN fails both comparisons, so check containment instead
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_one_of(errors: &mut Vec<String>, name: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(format!(
            "{name} = {value:?} must be one of: {}",
            allowed.join(", ")
        ));
    }
}
