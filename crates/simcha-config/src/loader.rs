// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./simcha.toml` > `~/.config/simcha/simcha.toml` > `/etc/simcha/simcha.toml`
//! with environment variable overrides via `SIMCHA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SimchaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/simcha/simcha.toml`
/// 3. `~/.config/simcha/simcha.toml`
/// 4. `./simcha.toml`
/// 5. `SIMCHA_*` environment variables
pub fn load_config() -> Result<SimchaConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over compiled defaults (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SimchaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SimchaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SimchaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SimchaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the XDG lookup, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SimchaConfig::default()))
        .merge(Toml::file("/etc/simcha/simcha.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("simcha/simcha.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("simcha.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `SIMCHA_CACHE_TTL_SECS`
/// must become `cache.ttl_secs`, not `cache.ttl.secs`.
fn env_provider() -> Env {
    Env::prefixed("SIMCHA_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("cache_", "cache.", 1)
            .replacen("integrity_", "integrity.", 1)
            .replacen("demo_", "demo.", 1);
        mapped.into()
    })
}
