// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Simcha unit and integration tests.
//!
//! # Components
//!
//! - [`ManualClock`] - a [`simcha_core::Clock`] that only moves when told to
//! - [`fixtures`] - builders for providers, services and slots that pass every
//!   integrity rule unless a test breaks one on purpose

pub mod clock;
pub mod fixtures;

pub use clock::ManualClock;
pub use fixtures::{fixture_now, provider_fixture, service_fixture, slot_fixture};
