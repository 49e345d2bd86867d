// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Simcha catalog store.
//!
//! [`CatalogStore`] owns the provider and service collections. Every
//! successful mutation clears the read cache and re-runs the integrity
//! checker, so [`CatalogStore::integrity_status`] always describes the
//! current data. Reads go through a time-bounded cache.
//!
//! Use [`SharedCatalog`] to share one store between tasks.

pub mod cache;
pub mod demo;
pub mod export;
pub mod generator;
pub mod search;
pub mod shared;
pub mod stats;
pub mod store;

pub use cache::CacheStats;
pub use demo::DemoCatalog;
pub use export::{LegacyExport, LegacyProvider, LegacyService};
pub use generator::{
    default_working_hours, generate_availability_slots, generate_default_calendar,
};
pub use search::SearchFilters;
pub use shared::SharedCatalog;
pub use stats::CatalogStats;
pub use store::{CatalogConfig, CatalogStore, UpdateOutcome};
