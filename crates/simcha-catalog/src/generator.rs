// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendars, working hours and availability slots for new records.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use simcha_core::{AvailabilitySlot, DayHours, ProviderCalendar, WorkingHours};

/// Timezone assigned to generated calendars.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jerusalem";

/// Minimum days between booking and event on a generated calendar.
pub const DEFAULT_BOOKING_LEAD_DAYS: u32 = 2;

/// How far ahead a generated calendar publishes slots.
pub const DEFAULT_MAX_ADVANCE_DAYS: u32 = 365;

/// Bookings accepted per generated slot.
pub const DEFAULT_SLOT_CAPACITY: u32 = 2;

/// An active calendar with no blocked dates.
pub fn generate_default_calendar(provider_id: &str) -> ProviderCalendar {
    ProviderCalendar {
        provider_id: provider_id.to_string(),
        timezone: DEFAULT_TIMEZONE.to_string(),
        blocked_dates: Vec::new(),
        booking_lead_days: DEFAULT_BOOKING_LEAD_DAYS,
        max_advance_days: DEFAULT_MAX_ADVANCE_DAYS,
    }
}

/// Sunday to Thursday 09:00-18:00, Friday 09:00-14:00, Saturday closed.
pub fn default_working_hours() -> WorkingHours {
    let open_day = |weekday| DayHours {
        weekday,
        open: time(9, 0),
        close: time(18, 0),
        closed: false,
    };

    WorkingHours {
        days: vec![
            open_day(Weekday::Sun),
            open_day(Weekday::Mon),
            open_day(Weekday::Tue),
            open_day(Weekday::Wed),
            open_day(Weekday::Thu),
            DayHours {
                weekday: Weekday::Fri,
                open: time(9, 0),
                close: time(14, 0),
                closed: false,
            },
            DayHours {
                weekday: Weekday::Sat,
                open: NaiveTime::MIN,
                close: NaiveTime::MIN,
                closed: true,
            },
        ],
    }
}

/// One slot per open day over `days` days starting at `from`.
///
/// Days closed in `working_hours` or blocked on the calendar are skipped, and
/// nothing is generated past the calendar's advance window.
pub fn generate_availability_slots(
    calendar: &ProviderCalendar,
    working_hours: &WorkingHours,
    from: NaiveDate,
    days: u32,
) -> Vec<AvailabilitySlot> {
    from.iter_days()
        .take(days.min(calendar.max_advance_days) as usize)
        .filter(|date| !calendar.is_blocked(*date))
        .filter_map(|date| {
            working_hours
                .open_on(date.weekday())
                .map(|hours| AvailabilitySlot {
                    date,
                    start_time: hours.open,
                    end_time: hours.close,
                    is_available: true,
                    max_bookings: DEFAULT_SLOT_CAPACITY,
                    current_bookings: 0,
                })
        })
        .collect()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
