// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Dismiss threshold and exit animation
//! - **Settle**: Snap-back animation after a short drag
//! - **Spring**: Entrance spring parameters
//! - **Window**: Demo window size

pub use crate::domain::toast::newtypes::swipe_bounds::{
    DEFAULT_ANIMATE_OUT_MS, DEFAULT_THRESHOLD as DEFAULT_SWIPE_THRESHOLD, MAX_ANIMATE_OUT_MS,
};

// ==========================================================================
// Settle Defaults
// ==========================================================================

/// Default duration of the snap back to the origin (in milliseconds).
pub const DEFAULT_SETTLE_MS: u64 = 300;

/// Maximum snap-back duration (in milliseconds).
pub const MAX_SETTLE_MS: u64 = 5_000;

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Damping of the entrance spring.
pub const DEFAULT_SPRING_DAMPING: f32 = 15.0;

/// Stiffness of the entrance spring.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 100.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
