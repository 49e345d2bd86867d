// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams shared across the workspace.

pub mod clock;

pub use clock::{Clock, SystemClock};
