// SPDX-License-Identifier: MPL-2.0
//! Domain layer - toast value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and rules shared by the gesture
//! state machine, the provider and the configuration layer. It depends on
//! nothing but `std` so it can be tested in isolation.
//!
//! # Modules
//!
//! - [`toast`]: Swipe value objects ([`Direction`](toast::Direction),
//!   [`DirectionSet`](toast::DirectionSet), [`SwipeThreshold`](toast::SwipeThreshold))

pub mod toast;
