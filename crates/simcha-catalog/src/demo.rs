// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic demo dataset.
//!
//! Fills an empty catalog with plausible mock providers and services so the
//! store, search and the CLI have something to work on. The same seed and
//! reference time always produce the same dataset. Every generated provider
//! is flagged `is_mock`; every third one is also `is_simulated`.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use simcha_config::model::DemoConfig;
use simcha_core::{PriceUnit, Provider, Service, Testimonial};

use crate::generator::{
    default_working_hours, generate_availability_slots, generate_default_calendar,
};

/// Label attached to simulated demo providers.
pub const SIMULATION_TYPE: &str = "demo";

struct CategorySeed {
    id: &'static str,
    subcategories: &'static [&'static str],
    businesses: &'static [&'static str],
    services: &'static [&'static str],
    price_unit: PriceUnit,
    price_range: (u32, u32),
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        id: "catering",
        subcategories: &["meat", "dairy", "desserts"],
        businesses: &["Kosher Delights", "Sababa Catering", "Golden Table"],
        services: &["Buffet Dinner", "Plated Dinner", "Dessert Bar", "Kiddush Spread"],
        price_unit: PriceUnit::PerPerson,
        price_range: (90, 350),
    },
    CategorySeed {
        id: "music",
        subcategories: &["dj", "live-band", "cantor"],
        businesses: &["Hora Beats", "Tel Aviv Sound", "Klezmer Collective"],
        services: &["DJ Set", "Live Band", "Ceremony Music", "Hora Medley"],
        price_unit: PriceUnit::PerEvent,
        price_range: (2500, 12000),
    },
    CategorySeed {
        id: "photography",
        subcategories: &["stills", "video", "drone"],
        businesses: &["Moments Studio", "Lens & Light", "Jaffa Frames"],
        services: &["Event Photography", "Video Highlights", "Photo Booth", "Drone Footage"],
        price_unit: PriceUnit::PerEvent,
        price_range: (3000, 15000),
    },
    CategorySeed {
        id: "entertainment",
        subcategories: &["magic", "kids", "dance"],
        businesses: &["Abracadabra Shows", "Happy Balloons", "Dance Fever"],
        services: &["Magic Show", "Balloon Art", "Dance Workshop", "Face Painting"],
        price_unit: PriceUnit::PerHour,
        price_range: (600, 2500),
    },
    CategorySeed {
        id: "venues",
        subcategories: &["hall", "garden", "rooftop"],
        businesses: &["Garden of Eden Hall", "Rooftop Herzliya", "Olive Grove Estate"],
        services: &["Evening Hall Rental", "Garden Ceremony", "Rooftop Reception", "Daytime Rental"],
        price_unit: PriceUnit::PerDay,
        price_range: (8000, 40000),
    },
    CategorySeed {
        id: "decor",
        subcategories: &["flowers", "lighting", "design"],
        businesses: &["Bloom & Co", "Bright Nights", "Canopy Designs"],
        services: &["Floral Centerpieces", "Chuppah Design", "Ambient Lighting", "Balloon Arch"],
        price_unit: PriceUnit::PerEvent,
        price_range: (1500, 9000),
    },
];

const CITIES: &[&str] = &[
    "Tel Aviv",
    "Jerusalem",
    "Haifa",
    "Ra'anana",
    "Modi'in",
    "Be'er Sheva",
];

const CONTACTS: &[&str] = &[
    "Dana Levi",
    "Yossi Cohen",
    "Noa Mizrahi",
    "Avi Peretz",
    "Michal Friedman",
    "Eitan Shapiro",
];

const CONCEPT_TAGS: &[&str] = &[
    "bar-mitzvah",
    "bat-mitzvah",
    "wedding",
    "brit",
    "engagement",
    "corporate",
];

const REVIEWS: &[(&str, &str)] = &[
    ("Made our son's bar mitzvah unforgettable.", "The Katz family"),
    ("Professional, punctual and warm.", "Rina B."),
    ("Guests are still talking about it.", "Oren and Tal"),
    ("Exactly what we asked for, and more.", "Shira G."),
];

/// A generated provider and service collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoCatalog {
    pub providers: Vec<Provider>,
    pub services: Vec<Service>,
}

impl DemoCatalog {
    /// Generate relative to the current time with the default slot horizon.
    pub fn generate(seed: u64, providers: usize, services_per_provider: usize) -> Self {
        Self::generate_at(
            seed,
            providers,
            services_per_provider,
            DemoConfig::default().slot_days,
            Utc::now(),
        )
    }

    /// Generate from the `[demo]` config section.
    pub fn from_config(config: &DemoConfig, now: DateTime<Utc>) -> Self {
        Self::generate_at(
            config.seed,
            config.providers,
            config.services_per_provider,
            config.slot_days,
            now,
        )
    }

    /// Generate relative to `now`. Slots start on `now`'s date.
    pub fn generate_at(
        seed: u64,
        providers: usize,
        services_per_provider: usize,
        slot_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut catalog = Self::default();

        for index in 0..providers {
            let category = &CATEGORIES[index % CATEGORIES.len()];
            let mut provider = demo_provider(&mut rng, index, category, now);

            for position in 0..services_per_provider {
                let service =
                    demo_service(&mut rng, &provider, category, position, slot_days, now);
                provider.service_ids.push(service.id.clone());
                catalog.services.push(service);
            }
            catalog.providers.push(provider);
        }

        catalog
    }
}

fn demo_provider(
    rng: &mut StdRng,
    index: usize,
    category: &CategorySeed,
    now: DateTime<Utc>,
) -> Provider {
    let number = index + 1;
    let id = format!("demo-provider-{number:03}");
    let business = pick(rng, category.businesses);
    let name = format!("{business} #{number}");
    let updated_at = now - TimeDelta::days(rng.gen_range(0..60));
    let created_at = updated_at - TimeDelta::days(rng.gen_range(30..365));
    let simulated = index % 3 == 2;

    let secondary: Vec<String> = CATEGORIES
        .iter()
        .filter(|c| c.id != category.id)
        .filter(|_| rng.gen_bool(0.15))
        .map(|c| c.id.to_string())
        .collect();

    let testimonials = (0..rng.gen_range(0..=2))
        .map(|n| {
            let (text, author) = REVIEWS[rng.gen_range(0..REVIEWS.len())];
            Testimonial {
                id: format!("{id}-review-{}", n + 1),
                text: text.to_string(),
                author: author.to_string(),
                rating: round_tenth(rng.gen_range(4.0..=5.0)),
                date: days_before(now, rng.gen_range(7..180)),
                verified: rng.gen_bool(0.6),
            }
        })
        .collect();

    Provider {
        name,
        business_name: format!("{business} Ltd."),
        description: format!(
            "{business} has been serving celebrations across Israel for {} years.",
            rng.gen_range(3..25)
        ),
        contact_person: pick(rng, CONTACTS).to_string(),
        email: format!("{id}@simcha.demo"),
        phone: format!("+972-5{}-{:07}", rng.gen_range(0..10), rng.gen_range(0..10_000_000)),
        address: format!("{} Herzl St.", rng.gen_range(1..200)),
        city: pick(rng, CITIES).to_string(),
        primary_category_id: category.id.to_string(),
        secondary_category_ids: secondary,
        subcategory_ids: vec![pick(rng, category.subcategories).to_string()],
        business_id: format!("51{:07}", rng.gen_range(0..10_000_000)),
        rating: round_tenth(rng.gen_range(3.5..=5.0)),
        review_count: rng.gen_range(0..=250),
        verified: rng.gen_bool(0.7),
        featured: rng.gen_bool(0.25),
        is_mock: true,
        is_simulated: simulated,
        simulation_type: simulated.then(|| SIMULATION_TYPE.to_string()),
        calendar_active: true,
        default_calendar: generate_default_calendar(&id),
        working_hours: default_working_hours(),
        service_ids: Vec::new(),
        gallery: (1..=rng.gen_range(1..=3))
            .map(|n| format!("https://images.simcha.demo/{id}/{n}.jpg"))
            .collect(),
        logo: Some(format!("https://images.simcha.demo/{id}/logo.png")),
        cover_image: None,
        testimonials,
        created_at,
        updated_at,
        id,
    }
}

fn demo_service(
    rng: &mut StdRng,
    provider: &Provider,
    category: &CategorySeed,
    position: usize,
    slot_days: u32,
    now: DateTime<Utc>,
) -> Service {
    let id = format!("{}-{}", provider.id.replace("provider", "service"), position + 1);
    let base = category.services[position % category.services.len()];
    let name = if position < category.services.len() {
        base.to_string()
    } else {
        format!("{base} {}", position + 1)
    };

    let (low, high) = category.price_range;
    let price = f64::from(rng.gen_range(low..=high) / 10 * 10);

    let mut availability = generate_availability_slots(
        &provider.default_calendar,
        &provider.working_hours,
        now.date_naive(),
        slot_days,
    );
    for slot in &mut availability {
        slot.current_bookings = rng.gen_range(0..=slot.max_bookings);
    }

    let concept_tags: Vec<String> = CONCEPT_TAGS
        .iter()
        .filter(|_| rng.gen_bool(0.35))
        .map(|t| t.to_string())
        .collect();

    Service {
        provider_id: provider.id.clone(),
        name: name.clone(),
        description: format!("{name} by {}.", provider.business_name),
        primary_category_id: category.id.to_string(),
        secondary_category_ids: Vec::new(),
        subcategory_id: pick(rng, category.subcategories).to_string(),
        event_types: concept_tags.clone(),
        concept_tags,
        audience_types: vec![pick(rng, &["families", "adults", "kids"]).to_string()],
        tags: vec![category.id.to_string(), provider.city.to_lowercase()],
        price,
        price_unit: category.price_unit,
        duration_minutes: rng.gen_range(2..=8) * 30,
        setup_time_minutes: rng.gen_range(0..=4) * 15,
        available: true,
        max_concurrent_bookings: 1,
        soft_hold_duration_minutes: 30,
        availability,
        rating: round_tenth(rng.gen_range(3.5..=5.0)),
        review_count: rng.gen_range(0..=120),
        featured: rng.gen_bool(0.2),
        image_url: format!("https://images.simcha.demo/{id}/main.jpg"),
        additional_images: Vec::new(),
        videos: Vec::new(),
        created_at: provider.created_at,
        updated_at: provider.updated_at,
        id,
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn days_before(now: DateTime<Utc>, days: i64) -> NaiveDate {
    (now - TimeDelta::days(days)).date_naive()
}
