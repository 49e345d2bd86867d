// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end behaviour of the catalog store through its public API.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use simcha_catalog::{CatalogConfig, CatalogStore, DemoCatalog, SearchFilters, UpdateOutcome};
use simcha_core::{ProviderPatch, Service, ServicePatch};
use simcha_integrity::IssueKind;
use simcha_test_utils::{
    ManualClock, fixture_now, provider_fixture, service_fixture, slot_fixture,
};

fn store() -> (CatalogStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(fixture_now()));
    let store = CatalogStore::with_clock(CatalogConfig::default(), clock.clone());
    (store, clock)
}

fn ids(services: &[Service]) -> Vec<&str> {
    services.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn added_service_is_visible_in_services() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    // Prime the cache so the add has to invalidate it.
    assert!(store.services().is_empty());

    let service = service_fixture("s1", "p1");
    store.add_service(service.clone());
    assert!(store.services().contains(&service));
}

#[test]
fn search_composes_query_and_filters() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));

    let mut magic = service_fixture("magic", "p1");
    magic.name = "Magic Show".into();
    magic.concept_tags = vec!["bar-mitzvah".into()];
    let mut dj = service_fixture("dj", "p1");
    dj.name = "DJ Set".into();
    dj.concept_tags = vec!["wedding".into()];
    store.add_service(magic);
    store.add_service(dj);

    let none = SearchFilters::default();
    assert_eq!(ids(&store.search_services("magic", &none)), ["magic"]);

    let tagged = SearchFilters {
        concept_tags: vec!["bar-mitzvah".into(), "brit".into()],
        ..Default::default()
    };
    assert_eq!(ids(&store.search_services("", &tagged)), ["magic"]);

    assert!(store.search_services("zzz", &tagged).is_empty());
}

#[test]
fn search_by_slot_availability() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    let mut booked = service_fixture("booked", "p1");
    booked.availability = vec![slot_fixture("2026-07-01", 1, 1)];
    let mut free = service_fixture("free", "p1");
    free.availability = vec![slot_fixture("2026-07-01", 1, 0)];
    store.add_service(booked);
    store.add_service(free);

    let filters = SearchFilters {
        date: NaiveDate::from_ymd_opt(2026, 7, 1),
        time: NaiveTime::from_hms_opt(18, 30, 0),
        ..Default::default()
    };
    assert_eq!(ids(&store.search_services("", &filters)), ["free"]);
}

#[test]
fn repeated_search_is_served_from_cache() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    store.add_service(service_fixture("s1", "p1"));

    let filters = SearchFilters::default();
    let first = store.search_services("service", &filters);
    let second = store.search_services("service", &filters);
    assert_eq!(first, second);
    assert_eq!(store.cache_stats().hits, 1);

    // A different query is a different entry.
    let _ = store.search_services("other", &filters);
    assert_eq!(store.cache_stats().entries, 2);
}

#[test]
fn rating_patch_changes_only_rating_and_timestamp() {
    let (mut store, clock) = store();
    store.add_provider(provider_fixture("p1"));
    let before = store.provider("p1").unwrap().clone();

    clock.advance(TimeDelta::minutes(5));
    let outcome = store.update_provider(
        "p1",
        ProviderPatch {
            rating: Some(4.9),
            ..Default::default()
        },
    );
    assert_eq!(outcome, UpdateOutcome::Applied);

    let after = store.provider("p1").unwrap().clone();
    assert_eq!(after.rating, 4.9);
    assert_eq!(after.updated_at, fixture_now() + TimeDelta::minutes(5));

    let mut expected = before;
    expected.rating = 4.9;
    expected.updated_at = after.updated_at;
    assert_eq!(after, expected);
}

#[test]
fn unknown_provider_update_is_a_no_op() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    let providers = store.providers();
    let report = store.integrity_status().cloned();

    let outcome = store.update_provider(
        "missing",
        ProviderPatch {
            rating: Some(4.9),
            ..Default::default()
        },
    );
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store.providers(), providers);
    assert_eq!(store.integrity_status().cloned(), report);
}

#[test]
fn unknown_service_update_is_a_no_op() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    store.add_service(service_fixture("s1", "p1"));
    let services = store.services();
    let report = store.integrity_status().cloned();

    let outcome = store.update_service(
        "missing",
        ServicePatch {
            price: Some(1.0),
            ..Default::default()
        },
    );
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store.services(), services);
    assert_eq!(store.integrity_status().cloned(), report);
}

#[test]
fn updates_are_visible_to_cached_reads() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    store.add_service(service_fixture("s1", "p1"));

    // Prime every read that the updates below must invalidate.
    let filters = SearchFilters::default();
    assert_eq!(store.services()[0].name, "Service s1");
    assert!(store.search_services("fireworks", &filters).is_empty());
    let export = store.export_legacy();
    assert_eq!(export.services[0].name, "Service s1");
    assert_eq!(export.providers[0].rating, store.provider("p1").unwrap().rating);

    let outcome = store.update_service(
        "s1",
        ServicePatch {
            name: Some("Fireworks Finale".into()),
            ..Default::default()
        },
    );
    assert!(outcome.is_applied());
    assert_eq!(store.services()[0].name, "Fireworks Finale");
    assert_eq!(ids(&store.search_services("fireworks", &filters)), ["s1"]);
    assert_eq!(store.export_legacy().services[0].name, "Fireworks Finale");

    let outcome = store.update_provider(
        "p1",
        ProviderPatch {
            rating: Some(2.5),
            ..Default::default()
        },
    );
    assert!(outcome.is_applied());
    assert_eq!(store.export_legacy().providers[0].rating, 2.5);
    assert_eq!(store.providers()[0].rating, 2.5);
}

#[test]
fn export_flattens_categories() {
    let (mut store, _) = store();
    let mut provider = provider_fixture("p1");
    provider.secondary_category_ids = vec!["music".into(), "decor".into()];
    store.add_provider(provider);
    store.add_service(service_fixture("s1", "p1"));

    let export = store.export_legacy();
    assert_eq!(
        export.providers[0].categories,
        ["entertainment", "music", "decor"]
    );
    assert_eq!(export.services[0].provider_id, "p1");
    assert_eq!(export.services[0].category, "entertainment");
}

#[test]
fn duplicate_provider_ids_are_reported_not_rejected() {
    let (mut store, _) = store();
    store.add_provider(provider_fixture("p1"));
    store.add_provider(provider_fixture("p1"));

    assert_eq!(store.providers().len(), 2);
    let report = store.integrity_status().unwrap();
    assert!(report.errors_of(IssueKind::Duplicate).count() >= 1);
}

#[test]
fn demo_catalog_imports_cleanly() {
    let demo = DemoCatalog::generate_at(42, 6, 2, 7, fixture_now());
    let (mut store, _) = store();
    store.import(demo.providers, demo.services);

    let stats = store.stats();
    assert_eq!(stats.providers, 6);
    assert_eq!(stats.services, 12);
    assert_eq!(stats.mock_providers, 6);
    assert_eq!(stats.real_providers, 0);
    assert!(!store.integrity_status().unwrap().has_errors);
}
