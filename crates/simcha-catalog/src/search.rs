// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service search.
//!
//! Stages run in order and each narrows the previous result:
//! free-text query, concept tags, category, then date/time availability.
//! Results are ordered featured first, then by rating, highest first.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use simcha_core::Service;

/// Structured search filters. Empty or `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    /// Keep services sharing at least one of these concept tags.
    pub concept_tags: Vec<String>,
    /// Keep services whose primary category equals this id.
    pub category_id: Option<String>,
    /// Availability date. Only applied together with `time`.
    pub date: Option<NaiveDate>,
    /// Availability time of day. Only applied together with `date`.
    pub time: Option<NaiveTime>,
}

/// Run the search pipeline over `services`.
pub fn search(services: &[Service], query: &str, filters: &SearchFilters) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    let category = filters
        .category_id
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let mut results: Vec<Service> = services
        .iter()
        .filter(|s| needle.is_empty() || matches_text(s, &needle))
        .filter(|s| {
            filters.concept_tags.is_empty()
                || s.concept_tags.iter().any(|t| filters.concept_tags.contains(t))
        })
        .filter(|s| category.is_none_or(|c| s.primary_category_id == c))
        .filter(|s| match (filters.date, filters.time) {
            (Some(date), Some(time)) => s.availability.iter().any(|slot| slot.accepts(date, time)),
            _ => true,
        })
        .cloned()
        .collect();

    results.sort_by(rank);
    results
}

fn matches_text(service: &Service, needle: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(needle);
    hit(&service.name)
        || hit(&service.description)
        || service.tags.iter().any(|t| hit(t))
        || service.concept_tags.iter().any(|t| hit(t))
}

fn rank(a: &Service, b: &Service) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.rating.total_cmp(&a.rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcha_test_utils::{service_fixture, slot_fixture};

    fn service(id: &str, name: &str, rating: f64, featured: bool) -> Service {
        Service {
            name: name.to_string(),
            rating,
            featured,
            ..service_fixture(id, "p1")
        }
    }

    fn ids(services: &[Service]) -> Vec<&str> {
        services.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let services = vec![
            service("s1", "Magic Show", 4.0, false),
            service("s2", "DJ Set", 4.0, false),
        ];
        let results = search(&services, "  MAGIC ", &SearchFilters::default());
        assert_eq!(ids(&results), ["s1"]);
    }

    #[test]
    fn query_matches_tags_and_concept_tags() {
        let mut tagged = service("s1", "Balloon Art", 4.0, false);
        tagged.tags = vec!["Kids Party".into()];
        let mut concept = service("s2", "Photo Booth", 4.0, false);
        concept.concept_tags = vec!["bat-mitzvah".into()];
        let services = vec![tagged, concept];

        assert_eq!(ids(&search(&services, "kids", &SearchFilters::default())), ["s1"]);
        assert_eq!(ids(&search(&services, "MITZVAH", &SearchFilters::default())), ["s2"]);
    }

    #[test]
    fn blank_query_and_no_filters_return_everything() {
        let services = vec![
            service("s1", "A", 4.0, false),
            service("s2", "B", 4.0, false),
        ];
        assert_eq!(search(&services, "   ", &SearchFilters::default()).len(), 2);
    }

    #[test]
    fn results_rank_featured_then_rating() {
        let services = vec![
            service("low", "A", 3.0, false),
            service("featured-low", "B", 2.0, true),
            service("high", "C", 5.0, false),
            service("featured-high", "D", 4.5, true),
        ];
        let results = search(&services, "", &SearchFilters::default());
        assert_eq!(ids(&results), ["featured-high", "featured-low", "high", "low"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let services = vec![
            service("first", "A", 4.0, false),
            service("second", "B", 4.0, false),
        ];
        let results = search(&services, "", &SearchFilters::default());
        assert_eq!(ids(&results), ["first", "second"]);
    }

    #[test]
    fn category_filter_uses_primary_category() {
        let mut catering = service("s1", "Buffet", 4.0, false);
        catering.primary_category_id = "catering".into();
        catering.secondary_category_ids = vec!["entertainment".into()];
        let music = service("s2", "Band", 4.0, false);
        let services = vec![catering, music];

        let filters = SearchFilters {
            category_id: Some("entertainment".into()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&services, "", &filters)), ["s2"]);
    }

    #[test]
    fn blank_category_does_not_filter() {
        let services = vec![service("s1", "A", 4.0, false)];
        let filters = SearchFilters {
            category_id: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(search(&services, "", &filters).len(), 1);
    }

    #[test]
    fn date_and_time_filter_needs_open_capacity() {
        let mut open = service("open", "A", 4.0, false);
        open.availability = vec![slot_fixture("2026-07-01", 2, 1)];
        let mut full = service("full", "B", 4.0, false);
        full.availability = vec![slot_fixture("2026-07-01", 2, 2)];
        let services = vec![open, full];

        let filters = SearchFilters {
            date: NaiveDate::from_ymd_opt(2026, 7, 1),
            time: NaiveTime::from_hms_opt(22, 0, 0),
            ..Default::default()
        };
        assert_eq!(ids(&search(&services, "", &filters)), ["open"]);

        let late = SearchFilters {
            time: NaiveTime::from_hms_opt(22, 30, 0),
            ..filters.clone()
        };
        assert!(search(&services, "", &late).is_empty());
    }

    #[test]
    fn date_without_time_is_ignored() {
        let services = vec![service("s1", "A", 4.0, false)];
        let filters = SearchFilters {
            date: NaiveDate::from_ymd_opt(2026, 7, 1),
            ..Default::default()
        };
        assert_eq!(search(&services, "", &filters).len(), 1);
    }
}
