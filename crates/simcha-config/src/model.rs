// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Simcha catalog.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Simcha configuration.
///
/// All sections are optional and default to the values the catalog has
/// always used (5 minute cache, 6 month staleness).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimchaConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Read cache settings for the catalog store.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Integrity checker settings.
    #[serde(default)]
    pub integrity: IntegrityConfig,

    /// Demo dataset generator settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Catalog read cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// When false every read recomputes from the collections.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Lifetime of a cache entry, counted from when it was populated.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_ttl_secs() -> u64 {
    300
}

/// Integrity checker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrityConfig {
    /// Providers not updated for this many months get an `outdated` warning.
    #[serde(default = "default_stale_after_months")]
    pub stale_after_months: u32,

    /// Scores below this value are logged at warn level.
    #[serde(default = "default_warn_below_score")]
    pub warn_below_score: u8,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            stale_after_months: default_stale_after_months(),
            warn_below_score: default_warn_below_score(),
        }
    }
}

fn default_stale_after_months() -> u32 {
    6
}

fn default_warn_below_score() -> u8 {
    70
}

/// Demo dataset generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// RNG seed; the same seed always yields the same dataset.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of providers to generate.
    #[serde(default = "default_providers")]
    pub providers: usize,

    /// Services generated per provider.
    #[serde(default = "default_services_per_provider")]
    pub services_per_provider: usize,

    /// Days of availability slots generated per service.
    #[serde(default = "default_slot_days")]
    pub slot_days: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            providers: default_providers(),
            services_per_provider: default_services_per_provider(),
            slot_days: default_slot_days(),
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_providers() -> usize {
    12
}

fn default_services_per_provider() -> usize {
    3
}

fn default_slot_days() -> u32 {
    14
}
