// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattened projection consumed by older screens.
//!
//! Key names are fixed by the consumers: mostly camelCase, with the two
//! timestamps kept in snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use simcha_core::{PriceUnit, Provider, Service};

/// Provider in the legacy shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProvider {
    pub id: String,
    pub name: String,
    pub business_name: String,
    pub description: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Primary category followed by the secondary ones.
    pub categories: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub featured: bool,
    pub verified: bool,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Provider> for LegacyProvider {
    fn from(p: &Provider) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            business_name: p.business_name.clone(),
            description: p.description.clone(),
            contact_person: p.contact_person.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            city: p.city.clone(),
            categories: p.categories(),
            rating: p.rating,
            review_count: p.review_count,
            featured: p.featured,
            verified: p.verified,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Service in the legacy shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyService {
    pub id: String,
    pub provider_id: String,
    pub name: String,
    pub description: String,
    /// The primary category.
    pub category: String,
    pub subcategory: String,
    pub concept_tags: Vec<String>,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub rating: f64,
    pub review_count: u32,
    pub featured: bool,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl From<&Service> for LegacyService {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id.clone(),
            provider_id: s.provider_id.clone(),
            name: s.name.clone(),
            description: s.description.clone(),
            category: s.primary_category_id.clone(),
            subcategory: s.subcategory_id.clone(),
            concept_tags: s.concept_tags.clone(),
            price: s.price,
            price_unit: s.price_unit,
            rating: s.rating,
            review_count: s.review_count,
            featured: s.featured,
            image_url: s.image_url.clone(),
            tags: s.tags.clone(),
        }
    }
}

/// Both collections in the legacy shape, in store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyExport {
    pub providers: Vec<LegacyProvider>,
    pub services: Vec<LegacyService>,
}

impl LegacyExport {
    pub fn build(providers: &[Provider], services: &[Service]) -> Self {
        Self {
            providers: providers.iter().map(LegacyProvider::from).collect(),
            services: services.iter().map(LegacyService::from).collect(),
        }
    }
}
