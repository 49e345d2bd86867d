// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integrity report types and the health score.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Category of a structural finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required attribute is absent or malformed.
    MissingField,
    /// A foreign key points at a record that does not exist.
    InvalidReference,
    /// Two or more records collide on a distinguishing field.
    Duplicate,
    /// Recorded state violates a business rule (bookings over capacity).
    Conflict,
}

/// How much a finding costs the health score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points subtracted from the score per finding.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 25,
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        }
    }
}

/// Category of a non-blocking data-quality nudge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    IncompleteData,
    Outdated,
}

/// A structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityError {
    pub kind: IssueKind,
    /// Dotted path of the offending field, e.g. `service.s1.provider_id`.
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

/// A non-blocking finding. Costs one point of score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityWarning {
    pub kind: WarningKind,
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

/// Snapshot produced by one integrity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub last_check: DateTime<Utc>,
    /// True iff `errors` is non-empty.
    pub has_errors: bool,
    pub errors: Vec<IntegrityError>,
    pub warnings: Vec<IntegrityWarning>,
    /// Health score in 0..=100.
    pub score: u8,
}

impl IntegrityReport {
    /// Assemble a report, deriving `has_errors` and `score`.
    pub fn new(
        last_check: DateTime<Utc>,
        errors: Vec<IntegrityError>,
        warnings: Vec<IntegrityWarning>,
    ) -> Self {
        Self {
            last_check,
            has_errors: !errors.is_empty(),
            score: score(&errors, &warnings),
            errors,
            warnings,
        }
    }

    /// Errors of one kind, in report order.
    pub fn errors_of(&self, kind: IssueKind) -> impl Iterator<Item = &IntegrityError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Warnings of one kind, in report order.
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &IntegrityWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }

    /// Error counts keyed by severity. Severities with no errors are absent.
    pub fn errors_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.errors {
            *counts.entry(error.severity).or_insert(0) += 1;
        }
        counts
    }

    /// Per-severity error counts.
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            warnings: self.warnings.len(),
            ..Default::default()
        };
        for error in &self.errors {
            match error.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }
}

/// Error counts by severity plus the warning count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub warnings: usize,
}

/// Health score: 100 minus each error's severity weight, minus 1 per warning,
/// floored at 0.
pub fn score(errors: &[IntegrityError], warnings: &[IntegrityWarning]) -> u8 {
    let penalty: u64 = errors
        .iter()
        .map(|e| u64::from(e.severity.weight()))
        .sum::<u64>()
        + warnings.len() as u64;
    100u64.saturating_sub(penalty) as u8
}
