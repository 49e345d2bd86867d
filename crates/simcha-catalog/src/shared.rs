// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A catalog store shared between tasks.
//!
//! Every method takes the lock for the whole operation, so a mutation's
//! cache clear and integrity re-check are never observed half-done.

use std::sync::Arc;

use simcha_core::{Provider, ProviderPatch, Service, ServicePatch};
use simcha_integrity::IntegrityReport;
use tokio::sync::{Mutex, MutexGuard};

use crate::export::LegacyExport;
use crate::search::SearchFilters;
use crate::stats::CatalogStats;
use crate::store::{CatalogStore, UpdateOutcome};

/// Cloneable handle to one [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogStore>>,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Exclusive access for multi-step work.
    pub async fn lock(&self) -> MutexGuard<'_, CatalogStore> {
        self.inner.lock().await
    }

    pub async fn providers(&self) -> Vec<Provider> {
        self.inner.lock().await.providers()
    }

    pub async fn services(&self) -> Vec<Service> {
        self.inner.lock().await.services()
    }

    pub async fn add_provider(&self, provider: Provider) {
        self.inner.lock().await.add_provider(provider);
    }

    pub async fn add_service(&self, service: Service) {
        self.inner.lock().await.add_service(service);
    }

    pub async fn update_provider(&self, id: &str, patch: ProviderPatch) -> UpdateOutcome {
        self.inner.lock().await.update_provider(id, patch)
    }

    pub async fn update_service(&self, id: &str, patch: ServicePatch) -> UpdateOutcome {
        self.inner.lock().await.update_service(id, patch)
    }

    pub async fn search_services(&self, query: &str, filters: &SearchFilters) -> Vec<Service> {
        self.inner.lock().await.search_services(query, filters)
    }

    pub async fn run_integrity_check(&self) -> IntegrityReport {
        self.inner.lock().await.run_integrity_check()
    }

    /// A copy of the latest report.
    pub async fn integrity_status(&self) -> Option<IntegrityReport> {
        self.inner.lock().await.integrity_status().cloned()
    }

    pub async fn export_legacy(&self) -> LegacyExport {
        self.inner.lock().await.export_legacy()
    }

    pub async fn stats(&self) -> CatalogStats {
        self.inner.lock().await.stats()
    }
}
