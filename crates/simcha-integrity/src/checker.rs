// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The integrity passes.
//!
//! Every pass runs unconditionally and in a fixed order. Order only affects
//! how the report reads; the score is order-independent.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Months, Utc};
use simcha_config::model::IntegrityConfig;
use simcha_core::{Provider, Service};
use tracing::debug;

use crate::report::{
    IntegrityError, IntegrityReport, IntegrityWarning, IssueKind, Severity, WarningKind,
};

/// Inputs to a check beyond the data itself.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Reference time for `last_check` and staleness.
    pub now: DateTime<Utc>,
    /// Providers last updated more than this many months before `now` are outdated.
    pub stale_after_months: u32,
}

impl CheckOptions {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            stale_after_months: IntegrityConfig::default().stale_after_months,
        }
    }
}

/// Configured integrity checker.
#[derive(Debug, Clone)]
pub struct IntegrityChecker {
    stale_after_months: u32,
}

impl IntegrityChecker {
    pub fn new(config: &IntegrityConfig) -> Self {
        Self {
            stale_after_months: config.stale_after_months,
        }
    }

    /// Check the collections as of `now`.
    pub fn check(
        &self,
        providers: &[Provider],
        services: &[Service],
        now: DateTime<Utc>,
    ) -> IntegrityReport {
        check(
            providers,
            services,
            &CheckOptions {
                now,
                stale_after_months: self.stale_after_months,
            },
        )
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new(&IntegrityConfig::default())
    }
}

/// Run every pass and build the report.
pub fn check(providers: &[Provider], services: &[Service], options: &CheckOptions) -> IntegrityReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let provider_ids: HashSet<&str> = providers.iter().map(|p| p.id.as_str()).collect();
    let mut service_counts: HashMap<&str, usize> = HashMap::new();
    for service in services {
        *service_counts.entry(service.provider_id.as_str()).or_default() += 1;
    }

    check_required_fields(providers, services, &mut errors);
    check_references(services, &provider_ids, &mut errors);
    check_duplicates(providers, services, &mut errors);
    check_conflicts(services, &provider_ids, &mut errors);
    check_completeness(providers, &service_counts, &mut warnings);
    check_freshness(providers, options, &mut warnings);

    let report = IntegrityReport::new(options.now, errors, warnings);
    debug!(
        providers = providers.len(),
        services = services.len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        score = report.score,
        "integrity passes complete"
    );
    report
}

fn push_error(
    errors: &mut Vec<IntegrityError>,
    kind: IssueKind,
    severity: Severity,
    field: String,
    message: String,
) {
    errors.push(IntegrityError {
        kind,
        field,
        message,
        severity,
    });
}

fn check_required_fields(
    providers: &[Provider],
    services: &[Service],
    errors: &mut Vec<IntegrityError>,
) {
    for provider in providers {
        let id = &provider.id;
        if provider.name.trim().is_empty() {
            push_error(
                errors,
                IssueKind::MissingField,
                Severity::Critical,
                format!("provider.{id}.name"),
                format!("Provider {id} has no name"),
            );
        }
        if !provider.email.contains('@') {
            push_error(
                errors,
                IssueKind::MissingField,
                Severity::High,
                format!("provider.{id}.email"),
                format!("Provider {id} has a missing or malformed email"),
            );
        }
        if provider.primary_category_id.trim().is_empty() {
            push_error(
                errors,
                IssueKind::MissingField,
                Severity::High,
                format!("provider.{id}.primary_category_id"),
                format!("Provider {id} has no primary category"),
            );
        }
    }

    for service in services {
        let id = &service.id;
        if service.name.trim().is_empty() {
            push_error(
                errors,
                IssueKind::MissingField,
                Severity::Critical,
                format!("service.{id}.name"),
                format!("Service {id} has no name"),
            );
        }
        if !(service.price.is_finite() && service.price > 0.0) {
            push_error(
                errors,
                IssueKind::MissingField,
                Severity::Medium,
                format!("service.{id}.price"),
                format!("Service {id} has no valid price"),
            );
        }
    }
}

fn check_references(
    services: &[Service],
    provider_ids: &HashSet<&str>,
    errors: &mut Vec<IntegrityError>,
) {
    for service in services {
        if !provider_ids.contains(service.provider_id.as_str()) {
            push_error(
                errors,
                IssueKind::InvalidReference,
                Severity::Critical,
                format!("service.{}.provider_id", service.id),
                format!(
                    "Service {} references unknown provider `{}`",
                    service.id, service.provider_id
                ),
            );
        }
    }
}

fn check_duplicates(
    providers: &[Provider],
    services: &[Service],
    errors: &mut Vec<IntegrityError>,
) {
    let mut by_email: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for provider in providers {
        let email = provider.email.trim();
        if !email.is_empty() {
            by_email.entry(email).or_default().push(&provider.id);
        }
    }
    for (email, ids) in by_email.into_iter().filter(|(_, ids)| ids.len() > 1) {
        push_error(
            errors,
            IssueKind::Duplicate,
            Severity::High,
            "provider.email".to_string(),
            format!("Email {email} is shared by providers: {}", ids.join(", ")),
        );
    }

    let mut by_owner_and_name: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();
    for service in services {
        let name = service.name.trim();
        if !name.is_empty() {
            by_owner_and_name
                .entry((service.provider_id.as_str(), name))
                .or_default()
                .push(&service.id);
        }
    }
    for ((provider_id, name), ids) in by_owner_and_name
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
    {
        push_error(
            errors,
            IssueKind::Duplicate,
            Severity::Medium,
            format!("provider.{provider_id}.services"),
            format!(
                "Provider {provider_id} has {} services named \"{name}\": {}",
                ids.len(),
                ids.join(", ")
            ),
        );
    }
}

/// Only services owned by an existing provider are checked; orphans are
/// already reported by the reference pass.
fn check_conflicts(
    services: &[Service],
    provider_ids: &HashSet<&str>,
    errors: &mut Vec<IntegrityError>,
) {
    for service in services
        .iter()
        .filter(|s| provider_ids.contains(s.provider_id.as_str()))
    {
        for slot in service.availability.iter().filter(|s| s.is_overbooked()) {
            push_error(
                errors,
                IssueKind::Conflict,
                Severity::High,
                format!("service.{}.availability.{}", service.id, slot.date),
                format!(
                    "Service {} is overbooked on {}: {} bookings for {} places",
                    service.id, slot.date, slot.current_bookings, slot.max_bookings
                ),
            );
        }
    }
}

fn check_completeness(
    providers: &[Provider],
    service_counts: &HashMap<&str, usize>,
    warnings: &mut Vec<IntegrityWarning>,
) {
    for provider in providers {
        let id = &provider.id;
        if provider.description.trim().is_empty() {
            warnings.push(IntegrityWarning {
                kind: WarningKind::IncompleteData,
                field: format!("provider.{id}.description"),
                message: format!("Provider {id} has no description"),
                suggestion: Some("Add a description of the business and its services".into()),
            });
        }
        if provider.gallery.is_empty() {
            warnings.push(IntegrityWarning {
                kind: WarningKind::IncompleteData,
                field: format!("provider.{id}.gallery"),
                message: format!("Provider {id} has no gallery photos"),
                suggestion: Some("Upload photos from past events".into()),
            });
        }
        if service_counts.get(id.as_str()).copied().unwrap_or(0) == 0 {
            warnings.push(IntegrityWarning {
                kind: WarningKind::IncompleteData,
                field: format!("provider.{id}.services"),
                message: format!("Provider {id} offers no services"),
                suggestion: Some("Add at least one service".into()),
            });
        }
    }
}

fn check_freshness(
    providers: &[Provider],
    options: &CheckOptions,
    warnings: &mut Vec<IntegrityWarning>,
) {
    let Some(cutoff) = options
        .now
        .checked_sub_months(Months::new(options.stale_after_months))
    else {
        return;
    };

    for provider in providers.iter().filter(|p| p.updated_at < cutoff) {
        warnings.push(IntegrityWarning {
            kind: WarningKind::Outdated,
            field: format!("provider.{}.updated_at", provider.id),
            message: format!(
                "Provider {} was last updated on {}",
                provider.id,
                provider.updated_at.format("%Y-%m-%d")
            ),
            suggestion: Some("Review and refresh the profile".into()),
        });
    }
}
