// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `simcha search` command implementation.

use chrono::{NaiveDate, NaiveTime};
use simcha_catalog::{CatalogStore, SearchFilters};
use simcha_core::Service;

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got `{value}`: {e}"))
}

/// Parse an `HH:MM` argument.
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| format!("expected HH:MM, got `{value}`: {e}"))
}

/// Search the store and print one line per hit.
pub fn run_search(store: &mut CatalogStore, query: &str, filters: &SearchFilters) {
    let results = store.search_services(query, filters);
    if results.is_empty() {
        println!("no services match");
        return;
    }
    for service in &results {
        println!("{}", format_service(service));
    }
    println!("{} result(s)", results.len());
}

fn format_service(service: &Service) -> String {
    let marker = if service.featured { "*" } else { " " };
    format!(
        "{marker} {:<24} {:<32} {:>9.0} {:<10} {:.1}",
        service.id, service.name, service.price, service.price_unit, service.rating
    )
}
