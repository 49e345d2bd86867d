// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading the catalog the CLI works on.
//!
//! With `--data FILE` the store is filled from a JSON snapshot of the form
//! `{"providers": [...], "services": [...]}`. Without it the demo generator
//! seeds the store from the `[demo]` config section.

use std::path::Path;

use serde::{Deserialize, Serialize};
use simcha_catalog::{CatalogConfig, CatalogStore, DemoCatalog};
use simcha_config::SimchaConfig;
use simcha_core::{Provider, Service, SimchaError};
use tracing::info;

/// A provider and service snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub providers: Vec<Provider>,
    pub services: Vec<Service>,
}

/// Read a JSON snapshot from disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, SimchaError> {
    let dataset_error = |source: Box<dyn std::error::Error + Send + Sync>| SimchaError::Dataset {
        path: path.display().to_string(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(|e| dataset_error(Box::new(e)))?;
    let dataset: Dataset =
        serde_json::from_str(&content).map_err(|e| dataset_error(Box::new(e)))?;
    info!(
        path = %path.display(),
        providers = dataset.providers.len(),
        services = dataset.services.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Build a store from `data`, or from demo data when `data` is `None`.
pub fn open_store(config: &SimchaConfig, data: Option<&Path>) -> Result<CatalogStore, SimchaError> {
    let dataset = match data {
        Some(path) => load_dataset(path)?,
        None => {
            let demo = DemoCatalog::from_config(&config.demo, chrono::Utc::now());
            Dataset {
                providers: demo.providers,
                services: demo.services,
            }
        }
    };

    let mut store = CatalogStore::new(CatalogConfig::from(config));
    store.import(dataset.providers, dataset.services);
    Ok(store)
}
