// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Simcha event-services catalog.
//!
//! This crate provides the domain model shared by every other crate in the
//! workspace (providers, services, availability slots and their partial
//! updates), the workspace-wide error type, and the [`Clock`] seam used to
//! make cache expiry and record staleness deterministic under test.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SimchaError;
pub use traits::{Clock, SystemClock};
pub use types::{
    AvailabilitySlot, DayHours, PriceUnit, Provider, ProviderCalendar, ProviderPatch, Service,
    ServicePatch, Testimonial, WorkingHours,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simcha_error_has_all_variants() {
        let _config = SimchaError::Config("test".into());
        let _dataset = SimchaError::Dataset {
            path: "catalog.json".into(),
            source: Box::new(std::io::Error::other("test")),
        };
        let _serialization = SimchaError::Serialization {
            source: Box::new(std::io::Error::other("test")),
        };
        let _not_found = SimchaError::NotFound {
            kind: "provider".into(),
            id: "p-1".into(),
        };
    }

    #[test]
    fn price_unit_display_and_parse() {
        use std::str::FromStr;

        let units = [
            PriceUnit::PerEvent,
            PriceUnit::PerHour,
            PriceUnit::PerPerson,
            PriceUnit::PerDay,
        ];
        for unit in &units {
            let s = unit.to_string();
            let parsed = PriceUnit::from_str(&s).expect("should parse back");
            assert_eq!(*unit, parsed);
        }
        assert_eq!(PriceUnit::PerPerson.to_string(), "per_person");
    }
}
