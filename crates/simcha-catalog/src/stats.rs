// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog summary counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use simcha_core::{Provider, Service};

/// Aggregate counts over both collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub providers: usize,
    pub services: usize,
    pub mock_providers: usize,
    pub simulated_providers: usize,
    /// Providers that are neither mock nor simulated.
    pub real_providers: usize,
    pub featured_providers: usize,
    pub verified_providers: usize,
    pub featured_services: usize,
    pub available_services: usize,
    /// Service count per primary category. Services without one are under `""`.
    pub services_by_category: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn compute(providers: &[Provider], services: &[Service]) -> Self {
        let mut stats = Self {
            providers: providers.len(),
            services: services.len(),
            ..Default::default()
        };

        for provider in providers {
            stats.mock_providers += usize::from(provider.is_mock);
            stats.simulated_providers += usize::from(provider.is_simulated);
            stats.real_providers += usize::from(!provider.is_demo());
            stats.featured_providers += usize::from(provider.featured);
            stats.verified_providers += usize::from(provider.verified);
        }

        for service in services {
            stats.featured_services += usize::from(service.featured);
            stats.available_services += usize::from(service.available);
            *stats
                .services_by_category
                .entry(service.primary_category_id.clone())
                .or_default() += 1;
        }

        stats
    }
}
