// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data-integrity checking for the Simcha catalog.
//!
//! The checker is a pure function of the provider and service collections.
//! It runs a fixed sequence of passes and rolls the findings into an
//! [`IntegrityReport`] with a 0-100 health score:
//!
//! 1. Required fields (name, email, primary category, price)
//! 2. Service-to-provider references
//! 3. Duplicate provider emails and duplicate service names per provider
//! 4. Availability slots booked beyond capacity
//! 5. Incomplete provider profiles (warnings)
//! 6. Stale provider profiles (warnings)

pub mod checker;
pub mod report;

pub use checker::{CheckOptions, IntegrityChecker, check};
pub use report::{
    IntegrityError, IntegrityReport, IntegrityWarning, IssueKind, ReportSummary, Severity,
    WarningKind, score,
};
