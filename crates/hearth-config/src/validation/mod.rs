//! Full configuration validation.
//!
//! Checks numeric ranges and URL shape, collecting every problem into a
//! single `ConfigError`.

mod helpers;


use crate::schema::HearthConfig;
use hearth_common::ConfigError;

use helpers::{validate_http_url, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HearthConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_service(&mut errors, config);
    validate_pacing(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_service(errors: &mut Vec<String>, config: &HearthConfig) {
    validate_http_url(errors, "service.base_url", &config.service.base_url);
    if config.service.chat_path.trim().is_empty() {
        errors.push("service.chat_path must not be empty".into());
    }
    validate_range(
        errors,
        "service.connect_timeout_secs",
        config.service.connect_timeout_secs,
        1,
        120,
    );
}

fn validate_pacing(errors: &mut Vec<String>, config: &HearthConfig) {
    validate_range(errors, "pacing.max_ms", config.pacing.max_ms, 1, 60_000);
    validate_range(errors, "pacing.base_ms", config.pacing.base_ms, 0, 60_000);
    validate_range(
        errors,
        "pacing.per_char_ms",
        config.pacing.per_char_ms,
        0,
        1_000,
    );
}
