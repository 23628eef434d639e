// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::PassXmlConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &PassXmlConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.gpg.program.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gpg.program must not be empty".to_string(),
        });
    }

    // The decrypt flags are always passed by passxml itself.
    for arg in &config.gpg.extra_args {
        if matches!(arg.as_str(), "--decrypt" | "-d" | "--output" | "-o") {
            errors.push(ConfigError::Validation {
                message: format!("gpg.extra_args must not contain `{arg}`"),
            });
        }
    }

    if config.store.hidden_prefix.is_empty() {
        errors.push(ConfigError::Validation {
            message: "store.hidden_prefix must not be empty".to_string(),
        });
    }

    if config.store.suffix.contains('/') {
        errors.push(ConfigError::Validation {
            message: format!(
                "store.suffix `{}` must not contain a path separator",
                config.store.suffix
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
