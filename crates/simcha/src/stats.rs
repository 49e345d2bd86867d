// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `simcha stats` command implementation.

use simcha_catalog::CatalogStats;

/// Format catalog counts as terminal lines.
pub fn render_stats(stats: &CatalogStats) -> Vec<String> {
    let mut lines = vec![
        format!("  {:<22} {}", "providers", stats.providers),
        format!("    {:<20} {}", "mock", stats.mock_providers),
        format!("    {:<20} {}", "simulated", stats.simulated_providers),
        format!("    {:<20} {}", "real", stats.real_providers),
        format!("    {:<20} {}", "featured", stats.featured_providers),
        format!("    {:<20} {}", "verified", stats.verified_providers),
        format!("  {:<22} {}", "services", stats.services),
        format!("    {:<20} {}", "featured", stats.featured_services),
        format!("    {:<20} {}", "available", stats.available_services),
    ];

    if !stats.services_by_category.is_empty() {
        lines.push("  by category".to_string());
        for (category, count) in &stats.services_by_category {
            let name = if category.is_empty() {
                "(none)"
            } else {
                category
            };
            lines.push(format!("    {name:<20} {count}"));
        }
    }
    lines
}
