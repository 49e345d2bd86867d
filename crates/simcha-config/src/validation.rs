// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes.

use crate::diagnostic::ConfigError;
use crate::model::SimchaConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound on generated demo providers.
const MAX_DEMO_PROVIDERS: usize = 10_000;

/// Upper bound on generated demo services per provider.
const MAX_DEMO_SERVICES_PER_PROVIDER: usize = 100;

/// Upper bound on generated slot days (one year).
const MAX_SLOT_DAYS: u32 = 366;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SimchaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` must be one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.cache.enabled && config.cache.ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "cache.ttl_secs must be greater than 0 when the cache is enabled".to_string(),
        });
    }

    if config.integrity.stale_after_months == 0 {
        errors.push(ConfigError::Validation {
            message: "integrity.stale_after_months must be at least 1".to_string(),
        });
    }

    if config.integrity.warn_below_score > 100 {
        errors.push(ConfigError::Validation {
            message: format!(
                "integrity.warn_below_score must be between 0 and 100, got {}",
                config.integrity.warn_below_score
            ),
        });
    }

    if config.demo.providers > MAX_DEMO_PROVIDERS {
        errors.push(ConfigError::Validation {
            message: format!(
                "demo.providers must be at most {MAX_DEMO_PROVIDERS}, got {}",
                config.demo.providers
            ),
        });
    }

    if config.demo.services_per_provider > MAX_DEMO_SERVICES_PER_PROVIDER {
        errors.push(ConfigError::Validation {
            message: format!(
                "demo.services_per_provider must be at most {MAX_DEMO_SERVICES_PER_PROVIDER}, got {}",
                config.demo.services_per_provider
            ),
        });
    }

    if config.demo.slot_days > MAX_SLOT_DAYS {
        errors.push(ConfigError::Validation {
            message: format!(
                "demo.slot_days must be at most {MAX_SLOT_DAYS}, got {}",
                config.demo.slot_days
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
