// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The catalog store.
//!
//! Holds the provider and service collections, serves reads through a
//! [`ReadCache`], and keeps the latest [`IntegrityReport`]. Each successful
//! mutation runs the same sequence: apply the change, clear the whole cache,
//! re-run the integrity checker, keep the new report.
//!
//! Data-quality problems never make an operation fail. They show up in the
//! report instead.

use std::sync::Arc;

use simcha_config::model::{CacheConfig, IntegrityConfig, SimchaConfig};
use simcha_core::{Clock, Provider, ProviderPatch, Service, ServicePatch, SystemClock};
use simcha_integrity::{IntegrityChecker, IntegrityReport};
use tracing::{info, warn};

use crate::cache::{CacheKey, CacheStats, Cacheable, ReadCache};
use crate::export::LegacyExport;
use crate::search::{SearchFilters, search};
use crate::stats::CatalogStats;

/// Settings the store needs from the full configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub cache: CacheConfig,
    pub integrity: IntegrityConfig,
}

impl From<&SimchaConfig> for CatalogConfig {
    fn from(config: &SimchaConfig) -> Self {
        Self {
            cache: config.cache.clone(),
            integrity: config.integrity.clone(),
        }
    }
}

/// Result of an update addressed by id.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record existed and the patch was merged.
    Applied,
    /// No record has that id. Nothing changed.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(self) -> bool {
        self == UpdateOutcome::Applied
    }
}

/// In-memory provider and service catalog.
pub struct CatalogStore {
    providers: Vec<Provider>,
    services: Vec<Service>,
    cache: ReadCache,
    checker: IntegrityChecker,
    warn_below_score: u8,
    report: Option<IntegrityReport>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("providers", &self.providers.len())
            .field("services", &self.services.len())
            .field("cache", &self.cache.stats())
            .field("score", &self.report.as_ref().map(|r| r.score))
            .finish()
    }
}

impl CatalogStore {
    /// Create an empty store using the system clock.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an empty store reading time from `clock`.
    pub fn with_clock(config: CatalogConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            providers: Vec::new(),
            services: Vec::new(),
            cache: ReadCache::new(&config.cache),
            checker: IntegrityChecker::new(&config.integrity),
            warn_below_score: config.integrity.warn_below_score,
            report: None,
            clock,
        }
    }

    /// All providers in insertion order.
    pub fn providers(&mut self) -> Vec<Provider> {
        self.read_through(Some(CacheKey::new("providers")), |store| {
            store.providers.clone()
        })
    }

    /// All services in insertion order.
    pub fn services(&mut self) -> Vec<Service> {
        self.read_through(Some(CacheKey::new("services")), |store| {
            store.services.clone()
        })
    }

    /// Look up one provider. Bypasses the cache.
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Look up one service. Bypasses the cache.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Services whose `provider_id` is `provider_id`, in table order.
    pub fn provider_services(&mut self, provider_id: &str) -> Vec<Service> {
        let key = CacheKey::with_args("provider_services", provider_id);
        self.read_through(key, |store| {
            store
                .services
                .iter()
                .filter(|s| s.provider_id == provider_id)
                .cloned()
                .collect()
        })
    }

    /// Append a provider. Ids are not checked for uniqueness here; the
    /// integrity report flags problems.
    ///
    /// The incoming `service_ids` are replaced by the services already stored
    /// under this provider's id.
    pub fn add_provider(&mut self, mut provider: Provider) {
        provider.service_ids = self.owned_service_ids(&provider.id);
        info!(provider_id = %provider.id, "provider added");
        self.providers.push(provider);
        self.after_mutation();
    }

    /// Append a service and link it to its provider, if that provider exists.
    pub fn add_service(&mut self, service: Service) {
        self.link_service(&service.provider_id, &service.id);
        info!(
            service_id = %service.id,
            provider_id = %service.provider_id,
            "service added"
        );
        self.services.push(service);
        self.after_mutation();
    }

    /// Bulk-load records, running the checker once at the end.
    ///
    /// Imported providers get `service_ids` rebuilt from the whole service
    /// table, as in [`add_provider`](Self::add_provider).
    pub fn import(&mut self, providers: Vec<Provider>, services: Vec<Service>) {
        let (provider_count, service_count) = (providers.len(), services.len());
        for service in &services {
            self.link_service(&service.provider_id, &service.id);
        }
        self.services.extend(services);
        for mut provider in providers {
            provider.service_ids = self.owned_service_ids(&provider.id);
            self.providers.push(provider);
        }
        info!(
            providers = provider_count,
            services = service_count,
            "catalog records imported"
        );
        self.after_mutation();
    }

    /// Merge `patch` into the provider with `id` and bump its `updated_at`.
    pub fn update_provider(&mut self, id: &str, patch: ProviderPatch) -> UpdateOutcome {
        let now = self.clock.now();
        let Some(provider) = self.providers.iter_mut().find(|p| p.id == id) else {
            warn!(provider_id = id, "update for unknown provider ignored");
            return UpdateOutcome::NotFound;
        };

        patch.apply(provider);
        provider.updated_at = now;
        info!(provider_id = id, "provider updated");
        self.after_mutation();
        UpdateOutcome::Applied
    }

    /// Merge `patch` into the service with `id` and bump its `updated_at`.
    ///
    /// Changing `provider_id` moves the service id between the owners'
    /// `service_ids`.
    pub fn update_service(&mut self, id: &str, patch: ServicePatch) -> UpdateOutcome {
        let now = self.clock.now();
        let Some(service) = self.services.iter_mut().find(|s| s.id == id) else {
            warn!(service_id = id, "update for unknown service ignored");
            return UpdateOutcome::NotFound;
        };

        let previous_owner = service.provider_id.clone();
        patch.apply(service);
        service.updated_at = now;
        let new_owner = service.provider_id.clone();

        if new_owner != previous_owner {
            if let Some(owner) = self.providers.iter_mut().find(|p| p.id == previous_owner) {
                owner.service_ids.retain(|sid| sid != id);
            }
            self.link_service(&new_owner, id);
        }

        info!(service_id = id, "service updated");
        self.after_mutation();
        UpdateOutcome::Applied
    }

    /// Search services by free text and filters. Cached per distinct input.
    pub fn search_services(&mut self, query: &str, filters: &SearchFilters) -> Vec<Service> {
        let key = CacheKey::with_args("search_services", &(query, filters));
        self.read_through(key, |store| search(&store.services, query, filters))
    }

    /// Re-run the checker now, store and return the report.
    pub fn run_integrity_check(&mut self) -> IntegrityReport {
        let report = self
            .checker
            .check(&self.providers, &self.services, self.clock.now());

        info!(
            score = report.score,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "integrity check completed"
        );
        if report.score < self.warn_below_score {
            warn!(
                score = report.score,
                threshold = self.warn_below_score,
                "catalog integrity score below threshold"
            );
        }

        self.report = Some(report.clone());
        report
    }

    /// The latest report, or `None` before the first check.
    pub fn integrity_status(&self) -> Option<&IntegrityReport> {
        self.report.as_ref()
    }

    /// Both collections in the legacy export shape.
    pub fn export_legacy(&mut self) -> LegacyExport {
        self.read_through(Some(CacheKey::new("export_legacy")), |store| {
            LegacyExport::build(&store.providers, &store.services)
        })
    }

    /// Summary counts over both collections.
    pub fn stats(&mut self) -> CatalogStats {
        self.read_through(Some(CacheKey::new("stats")), |store| {
            CatalogStats::compute(&store.providers, &store.services)
        })
    }

    /// Empty the collections, the cache and the report.
    pub fn reset(&mut self) {
        self.providers.clear();
        self.services.clear();
        self.cache.reset();
        self.report = None;
        info!("catalog reset");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn link_service(&mut self, provider_id: &str, service_id: &str) {
        if let Some(owner) = self.providers.iter_mut().find(|p| p.id == provider_id) {
            if !owner.service_ids.iter().any(|sid| sid == service_id) {
                owner.service_ids.push(service_id.to_string());
            }
        }
    }

    fn owned_service_ids(&self, provider_id: &str) -> Vec<String> {
        self.services
            .iter()
            .filter(|s| s.provider_id == provider_id)
            .map(|s| s.id.clone())
            .collect()
    }

    fn after_mutation(&mut self) {
        self.cache.clear();
        self.run_integrity_check();
    }

    fn read_through<T: Cacheable>(
        &mut self,
        key: Option<CacheKey>,
        compute: impl FnOnce(&Self) -> T,
    ) -> T {
        let now = self.clock.now();
        if let Some(key) = &key {
            if let Some(value) = self.cache.get(key, now).and_then(T::from_cached) {
                return value;
            }
        }

        let value = compute(&*self);
        if let Some(key) = key {
            self.cache.insert(key, value.clone().into_cached(), now);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use simcha_core::PriceUnit;
    use simcha_test_utils::{ManualClock, fixture_now, provider_fixture, service_fixture};
    use tracing_test::traced_test;

    fn store_with_clock() -> (CatalogStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(fixture_now()));
        let store = CatalogStore::with_clock(CatalogConfig::default(), clock.clone());
        (store, clock)
    }

    #[test]
    fn new_store_is_empty_and_unchecked() {
        let (mut store, _) = store_with_clock();
        assert!(store.providers().is_empty());
        assert!(store.services().is_empty());
        assert!(store.integrity_status().is_none());
    }

    #[test]
    fn add_service_links_existing_provider() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        store.add_service(service_fixture("s1", "p1"));

        assert_eq!(store.provider("p1").unwrap().service_ids, ["s1"]);
        assert_eq!(store.provider_services("p1").len(), 1);
    }

    #[test]
    fn orphan_service_is_stored_and_reported() {
        let (mut store, _) = store_with_clock();
        store.add_service(service_fixture("s1", "ghost"));

        assert_eq!(store.services().len(), 1);
        let report = store.integrity_status().unwrap();
        assert!(report.has_errors);

        store.add_provider(provider_fixture("ghost"));
        assert_eq!(store.provider("ghost").unwrap().service_ids, ["s1"]);
        assert!(!store.integrity_status().unwrap().has_errors);
    }

    #[test]
    fn every_mutation_refreshes_the_report() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        // Provider without services is incomplete.
        assert_eq!(store.integrity_status().unwrap().score, 99);

        store.add_service(service_fixture("s1", "p1"));
        assert_eq!(store.integrity_status().unwrap().score, 100);
    }

    #[test]
    fn moving_a_service_relinks_owners() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        store.add_provider(provider_fixture("p2"));
        store.add_service(service_fixture("s1", "p1"));

        let outcome = store.update_service(
            "s1",
            ServicePatch {
                provider_id: Some("p2".into()),
                ..Default::default()
            },
        );
        assert!(outcome.is_applied());
        assert!(store.provider("p1").unwrap().service_ids.is_empty());
        assert_eq!(store.provider("p2").unwrap().service_ids, ["s1"]);
        assert!(store.provider_services("p1").is_empty());
    }

    #[test]
    fn update_service_bumps_timestamp() {
        let (mut store, clock) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        store.add_service(service_fixture("s1", "p1"));
        clock.advance(TimeDelta::hours(1));

        let _ = store.update_service(
            "s1",
            ServicePatch {
                price_unit: Some(PriceUnit::PerHour),
                ..Default::default()
            },
        );
        let service = store.service("s1").unwrap();
        assert_eq!(service.price_unit, PriceUnit::PerHour);
        assert_eq!(service.updated_at, fixture_now() + TimeDelta::hours(1));
        assert_eq!(service.created_at, fixture_now());
    }

    #[test]
    fn cached_read_survives_until_mutation() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));

        assert_eq!(store.providers().len(), 1);
        assert_eq!(store.providers().len(), 1);
        assert_eq!(store.cache_stats().hits, 1);

        store.add_provider(provider_fixture("p2"));
        assert_eq!(store.cache_stats().entries, 0);
        assert_eq!(store.providers().len(), 2);
    }

    #[test]
    fn cached_read_expires_after_ttl() {
        let (mut store, clock) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        let _ = store.stats();

        clock.advance(TimeDelta::seconds(299));
        let _ = store.stats();
        assert_eq!(store.cache_stats().hits, 1);

        clock.advance(TimeDelta::seconds(1));
        let _ = store.stats();
        assert_eq!(store.cache_stats().hits, 1);
        assert_eq!(store.cache_stats().misses, 2);
    }

    #[test]
    fn disabled_cache_always_recomputes() {
        let config = CatalogConfig {
            cache: CacheConfig {
                enabled: false,
                ttl_secs: 300,
            },
            ..Default::default()
        };
        let mut store = CatalogStore::with_clock(config, Arc::new(ManualClock::new(fixture_now())));
        store.add_provider(provider_fixture("p1"));
        let _ = store.providers();
        let _ = store.providers();
        assert_eq!(store.cache_stats().hits, 0);
        assert_eq!(store.cache_stats().entries, 0);
    }

    #[test]
    fn run_integrity_check_uses_clock_for_staleness() {
        let (mut store, clock) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        store.add_service(service_fixture("s1", "p1"));
        assert!(store.integrity_status().unwrap().warnings.is_empty());

        clock.advance(TimeDelta::days(200));
        let report = store.run_integrity_check();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.last_check, fixture_now() + TimeDelta::days(200));
        assert_eq!(store.integrity_status(), Some(&report));
    }

    #[test]
    fn reset_clears_everything() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        let _ = store.providers();
        store.reset();

        assert!(store.integrity_status().is_none());
        assert_eq!(store.cache_stats(), CacheStats::default());
        assert!(store.providers().is_empty());
    }

    #[test]
    fn import_links_and_checks_once() {
        let (mut store, _) = store_with_clock();
        store.import(
            vec![provider_fixture("p1"), provider_fixture("p2")],
            vec![service_fixture("s1", "p1"), service_fixture("s2", "p2")],
        );
        assert_eq!(store.provider("p2").unwrap().service_ids, ["s2"]);
        assert_eq!(store.integrity_status().unwrap().score, 100);
    }

    #[test]
    fn import_links_services_stored_earlier() {
        let (mut store, _) = store_with_clock();
        store.add_service(service_fixture("s1", "p9"));
        store.import(vec![provider_fixture("p9")], Vec::new());

        assert_eq!(store.provider("p9").unwrap().service_ids, ["s1"]);
        assert_eq!(store.provider_services("p9").len(), 1);
    }

    #[test]
    fn incoming_service_ids_are_rebuilt_from_the_table() {
        let (mut store, _) = store_with_clock();
        let mut stale = provider_fixture("p1");
        stale.service_ids = vec!["bogus".into()];
        store.add_provider(stale);
        assert!(store.provider("p1").unwrap().service_ids.is_empty());

        store.add_service(service_fixture("s2", "p2"));
        let mut imported = provider_fixture("p2");
        imported.service_ids = vec!["bogus".into(), "s2".into()];
        store.import(vec![imported], Vec::new());

        for id in ["p1", "p2"] {
            let listed = store.provider(id).unwrap().service_ids.clone();
            let joined: Vec<String> =
                store.provider_services(id).into_iter().map(|s| s.id).collect();
            assert_eq!(listed, joined);
        }
    }

    #[test]
    #[traced_test]
    fn unknown_service_update_is_logged_and_changes_nothing() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        store.add_service(service_fixture("s1", "p1"));
        let services = store.services();
        let providers = store.providers();
        let report = store.integrity_status().cloned();

        let outcome = store.update_service(
            "nope",
            ServicePatch {
                provider_id: Some("p1".into()),
                ..Default::default()
            },
        );
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.services(), services);
        assert_eq!(store.providers(), providers);
        assert_eq!(store.integrity_status().cloned(), report);
        assert!(logs_contain("update for unknown service ignored"));
    }

    #[test]
    #[traced_test]
    fn low_score_is_logged_as_warning() {
        let (mut store, _) = store_with_clock();
        store.add_service(service_fixture("s1", "ghost"));
        store.add_service(service_fixture("s2", "ghost"));

        assert!(store.integrity_status().unwrap().score < 70);
        assert!(logs_contain("catalog integrity score below threshold"));
    }

    #[test]
    #[traced_test]
    fn unknown_update_is_logged_and_changes_nothing() {
        let (mut store, _) = store_with_clock();
        store.add_provider(provider_fixture("p1"));
        let before = store.providers();

        let outcome = store.update_provider(
            "nope",
            ProviderPatch {
                rating: Some(1.0),
                ..Default::default()
            },
        );
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.providers(), before);
        assert!(logs_contain("update for unknown provider ignored"));
    }
}
