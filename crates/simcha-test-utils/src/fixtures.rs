// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record builders for tests.
//!
//! A provider from [`provider_fixture`] plus one service from
//! [`service_fixture`] owned by it is a dataset with a perfect integrity
//! score at [`fixture_now`].

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use simcha_core::{AvailabilitySlot, PriceUnit, Provider, Service};

/// Fixed "now" used by fixtures: 2026-06-01 12:00 UTC.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// A complete provider with a unique email derived from its id.
///
/// `service_ids` is left empty; attach services through the store or set it
/// directly when calling the checker.
pub fn provider_fixture(id: &str) -> Provider {
    Provider {
        id: id.to_string(),
        name: format!("Provider {id}"),
        business_name: format!("Provider {id} Ltd."),
        description: "Full-service event production".to_string(),
        contact_person: "Dana Levi".to_string(),
        email: format!("{id}@simcha.test"),
        phone: "+972-50-000-0000".to_string(),
        address: "1 Herzl St.".to_string(),
        city: "Tel Aviv".to_string(),
        primary_category_id: "entertainment".to_string(),
        rating: 4.5,
        review_count: 12,
        verified: true,
        gallery: vec![format!("https://cdn.simcha.test/{id}/1.jpg")],
        created_at: fixture_now(),
        updated_at: fixture_now(),
        ..Default::default()
    }
}

/// A priced, available service owned by `provider_id`.
pub fn service_fixture(id: &str, provider_id: &str) -> Service {
    Service {
        id: id.to_string(),
        provider_id: provider_id.to_string(),
        name: format!("Service {id}"),
        description: "Two hours of live entertainment".to_string(),
        primary_category_id: "entertainment".to_string(),
        subcategory_id: "live-music".to_string(),
        price: 2500.0,
        price_unit: PriceUnit::PerEvent,
        duration_minutes: 120,
        available: true,
        max_concurrent_bookings: 1,
        rating: 4.0,
        created_at: fixture_now(),
        updated_at: fixture_now(),
        ..Default::default()
    }
}

/// A slot on `date` (YYYY-MM-DD) from 10:00 to 22:00.
pub fn slot_fixture(date: &str, max_bookings: u32, current_bookings: u32) -> AvailabilitySlot {
    AvailabilitySlot {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).expect("fixture time"),
        end_time: NaiveTime::from_hms_opt(22, 0, 0).expect("fixture time"),
        is_available: true,
        max_bookings,
        current_bookings,
    }
}
