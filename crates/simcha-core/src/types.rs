// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for the event-services catalog.
//!
//! A [`Provider`] is a vendor (caterer, DJ, photographer, venue) and a
//! [`Service`] is one bookable offering owned by exactly one provider. The
//! flat service table is the single source of truth: a provider only keeps
//! the ids of its services and the full records are joined on read.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A business entity offering services on the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub business_name: String,
    pub description: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,

    pub primary_category_id: String,
    pub secondary_category_ids: Vec<String>,
    pub subcategory_ids: Vec<String>,

    /// Tax / business registration number.
    pub business_id: String,
    /// Average review rating, 0.0-5.0.
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
    pub featured: bool,

    /// Seeded demo record.
    pub is_mock: bool,
    /// Record produced by a simulation run.
    pub is_simulated: bool,
    pub simulation_type: Option<String>,

    pub calendar_active: bool,
    pub default_calendar: ProviderCalendar,
    pub working_hours: WorkingHours,

    /// Ids of the services this provider owns, in insertion order.
    pub service_ids: Vec<String>,

    pub gallery: Vec<String>,
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    pub testimonials: Vec<Testimonial>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Provider {
    /// Primary category followed by the secondary categories.
    pub fn categories(&self) -> Vec<String> {
        std::iter::once(self.primary_category_id.clone())
            .chain(self.secondary_category_ids.iter().cloned())
            .collect()
    }

    /// True for seeded or simulated records.
    pub fn is_demo(&self) -> bool {
        self.is_mock || self.is_simulated
    }
}

/// A customer review shown on a provider profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub text: String,
    pub author: String,
    pub rating: f64,
    pub date: NaiveDate,
    pub verified: bool,
}

/// Booking calendar seeded for every new provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderCalendar {
    pub provider_id: String,
    /// IANA timezone name.
    pub timezone: String,
    /// Dates on which no slots are offered.
    pub blocked_dates: Vec<NaiveDate>,
    /// Minimum days between booking and event.
    pub booking_lead_days: u32,
    /// How far ahead slots are published.
    pub max_advance_days: u32,
}

impl ProviderCalendar {
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked_dates.contains(&date)
    }
}

/// Weekly opening hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    pub days: Vec<DayHours>,
}

impl WorkingHours {
    /// Opening hours for `weekday`, or `None` if closed or unlisted.
    pub fn open_on(&self, weekday: Weekday) -> Option<&DayHours> {
        self.days
            .iter()
            .find(|d| d.weekday == weekday && !d.closed)
    }
}

/// Opening hours for a single weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub weekday: Weekday,
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub closed: bool,
}

/// How a service price is charged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    #[default]
    PerEvent,
    PerHour,
    PerPerson,
    PerDay,
}

/// A bookable offering owned by exactly one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: String,
    /// Owning provider. May dangle; the integrity checker reports it.
    pub provider_id: String,
    pub name: String,
    pub description: String,
    pub primary_category_id: String,
    pub secondary_category_ids: Vec<String>,
    pub subcategory_id: String,

    /// Free-form labels such as event types ("bar-mitzvah", "wedding").
    pub concept_tags: Vec<String>,
    pub event_types: Vec<String>,
    pub audience_types: Vec<String>,
    pub tags: Vec<String>,

    pub price: f64,
    pub price_unit: PriceUnit,
    pub duration_minutes: u32,
    pub setup_time_minutes: u32,

    pub available: bool,
    pub max_concurrent_bookings: u32,
    /// Length of a temporary reservation pending confirmation. Field only.
    pub soft_hold_duration_minutes: u32,
    pub availability: Vec<AvailabilitySlot>,

    pub rating: f64,
    pub review_count: u32,
    pub featured: bool,

    pub image_url: String,
    pub additional_images: Vec<String>,
    pub videos: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A dated time window with a booking capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub max_bookings: u32,
    pub current_bookings: u32,
}

impl AvailabilitySlot {
    /// Whether a new booking at `date`/`time` fits in this slot.
    ///
    /// Both window ends are inclusive.
    pub fn accepts(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date == date
            && self.start_time <= time
            && time <= self.end_time
            && self.is_available
            && self.current_bookings < self.max_bookings
    }

    pub fn is_overbooked(&self) -> bool {
        self.current_bookings > self.max_bookings
    }
}

/// Apply every `Some` field of a patch onto the target record.
macro_rules! merge_fields {
    ($patch:expr, $target:expr, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

/// Partial update for a [`Provider`]. `None` leaves the field untouched.
///
/// Identity, timestamps and the owned service ids are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderPatch {
    pub name: Option<String>,
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub primary_category_id: Option<String>,
    pub secondary_category_ids: Option<Vec<String>>,
    pub subcategory_ids: Option<Vec<String>>,
    pub business_id: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub verified: Option<bool>,
    pub featured: Option<bool>,
    pub is_mock: Option<bool>,
    pub is_simulated: Option<bool>,
    pub simulation_type: Option<Option<String>>,
    pub calendar_active: Option<bool>,
    pub default_calendar: Option<ProviderCalendar>,
    pub working_hours: Option<WorkingHours>,
    pub gallery: Option<Vec<String>>,
    pub logo: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub testimonials: Option<Vec<Testimonial>>,
}

impl ProviderPatch {
    /// Shallow-merge this patch into `provider`.
    pub fn apply(self, provider: &mut Provider) {
        merge_fields!(
            self,
            provider,
            [
                name,
                business_name,
                description,
                contact_person,
                email,
                phone,
                address,
                city,
                primary_category_id,
                secondary_category_ids,
                subcategory_ids,
                business_id,
                rating,
                review_count,
                verified,
                featured,
                is_mock,
                is_simulated,
                simulation_type,
                calendar_active,
                default_calendar,
                working_hours,
                gallery,
                logo,
                cover_image,
                testimonials,
            ]
        );
    }
}

/// Partial update for a [`Service`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePatch {
    pub provider_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_category_id: Option<String>,
    pub secondary_category_ids: Option<Vec<String>>,
    pub subcategory_id: Option<String>,
    pub concept_tags: Option<Vec<String>>,
    pub event_types: Option<Vec<String>>,
    pub audience_types: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub price: Option<f64>,
    pub price_unit: Option<PriceUnit>,
    pub duration_minutes: Option<u32>,
    pub setup_time_minutes: Option<u32>,
    pub available: Option<bool>,
    pub max_concurrent_bookings: Option<u32>,
    pub soft_hold_duration_minutes: Option<u32>,
    pub availability: Option<Vec<AvailabilitySlot>>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub featured: Option<bool>,
    pub image_url: Option<String>,
    pub additional_images: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
}

impl ServicePatch {
    /// Shallow-merge this patch into `service`.
    pub fn apply(self, service: &mut Service) {
        merge_fields!(
            self,
            service,
            [
                provider_id,
                name,
                description,
                primary_category_id,
                secondary_category_ids,
                subcategory_id,
                concept_tags,
                event_types,
                audience_types,
                tags,
                price,
                price_unit,
                duration_minutes,
                setup_time_minutes,
                available,
                max_concurrent_bookings,
                soft_hold_duration_minutes,
                availability,
                rating,
                review_count,
                featured,
                image_url,
                additional_images,
                videos,
            ]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: (u32, u32), end: (u32, u32), max: u32, current: u32) -> AvailabilitySlot {
        AvailabilitySlot {
            date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            is_available: true,
            max_bookings: max,
            current_bookings: current,
        }
    }

    #[test]
    fn slot_accepts_inclusive_window() {
        let s = slot((10, 0), (14, 0), 2, 1);
        let date = s.date;
        assert!(s.accepts(date, NaiveTime::from_hms_opt(10, 0, 0).unwrap()));
        assert!(s.accepts(date, NaiveTime::from_hms_opt(14, 0, 0).unwrap()));
        assert!(!s.accepts(date, NaiveTime::from_hms_opt(14, 1, 0).unwrap()));
        assert!(!s.accepts(date.succ_opt().unwrap(), NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn full_or_closed_slot_rejects() {
        let full = slot((10, 0), (14, 0), 2, 2);
        assert!(!full.accepts(full.date, NaiveTime::from_hms_opt(11, 0, 0).unwrap()));

        let mut closed = slot((10, 0), (14, 0), 2, 0);
        closed.is_available = false;
        assert!(!closed.accepts(closed.date, NaiveTime::from_hms_opt(11, 0, 0).unwrap()));
    }

    #[test]
    fn overbooked_only_when_strictly_over_capacity() {
        assert!(slot((9, 0), (17, 0), 2, 3).is_overbooked());
        assert!(!slot((9, 0), (17, 0), 2, 2).is_overbooked());
    }

    #[test]
    fn provider_patch_touches_only_set_fields() {
        let mut provider = Provider {
            id: "p1".into(),
            name: "Kosher Delights".into(),
            email: "info@kosher.co.il".into(),
            rating: 4.2,
            ..Default::default()
        };
        let before = provider.clone();

        ProviderPatch {
            rating: Some(4.9),
            ..Default::default()
        }
        .apply(&mut provider);

        assert_eq!(provider.rating, 4.9);
        assert_eq!(provider.name, before.name);
        assert_eq!(provider.email, before.email);
        assert_eq!(provider.updated_at, before.updated_at);
    }

    #[test]
    fn provider_patch_can_clear_optional_fields() {
        let mut provider = Provider {
            logo: Some("https://cdn.example/logo.png".into()),
            ..Default::default()
        };
        ProviderPatch {
            logo: Some(None),
            ..Default::default()
        }
        .apply(&mut provider);
        assert!(provider.logo.is_none());
    }

    #[test]
    fn service_patch_moves_owner() {
        let mut service = Service {
            id: "s1".into(),
            provider_id: "p1".into(),
            price: 1200.0,
            ..Default::default()
        };
        ServicePatch {
            provider_id: Some("p2".into()),
            ..Default::default()
        }
        .apply(&mut service);
        assert_eq!(service.provider_id, "p2");
        assert_eq!(service.price, 1200.0);
    }

    #[test]
    fn categories_lists_primary_first() {
        let provider = Provider {
            primary_category_id: "catering".into(),
            secondary_category_ids: vec!["desserts".into(), "bar".into()],
            ..Default::default()
        };
        assert_eq!(provider.categories(), vec!["catering", "desserts", "bar"]);
    }

    #[test]
    fn working_hours_skip_closed_days() {
        let hours = WorkingHours {
            days: vec![
                DayHours {
                    weekday: Weekday::Fri,
                    open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    close: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                    closed: false,
                },
                DayHours {
                    weekday: Weekday::Sat,
                    open: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                    close: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                    closed: true,
                },
            ],
        };
        assert!(hours.open_on(Weekday::Fri).is_some());
        assert!(hours.open_on(Weekday::Sat).is_none());
        assert!(hours.open_on(Weekday::Mon).is_none());
    }

    #[test]
    fn service_deserializes_with_missing_fields() {
        let json = r#"{"id": "s1", "provider_id": "p1", "name": "Magic Show", "price": 900.0}"#;
        let service: Service = serde_json::from_str(json).expect("lenient deserialize");
        assert_eq!(service.name, "Magic Show");
        assert_eq!(service.price_unit, PriceUnit::PerEvent);
        assert!(service.availability.is_empty());
    }
}
