// SPDX-License-Identifier: MPL-2.0
//! Animation capability used by toast items.
//!
//! A toast never computes curves itself. It asks an [`Animator`] to jump an
//! axis to a value or to settle it towards a target with a [`Motion`], and
//! gets a [`Ticket`] back. The animator reports finished tickets from
//! [`Animator::advance`], which the caller drives from its frame clock.
//!
//! # Implementations
//!
//! - [`Timeline`] - frame-driven spring and timing curves for real rendering
//! - [`ManualAnimator`] - completes only when told to, for deterministic tests

mod manual;
mod spring;
mod timeline;

pub use manual::{ManualAnimator, Request};
pub use spring::Spring;
pub use timeline::Timeline;

pub use crate::domain::toast::Axis;

use std::time::{Duration, Instant};

/// Default duration of a timed settle (e.g. snapping back after a short drag).
pub const DEFAULT_TIMING: Duration = Duration::from_millis(300);

/// How an axis travels to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Physically simulated spring; finishes when the spring comes to rest.
    Spring(Spring),
    /// Eased interpolation over a fixed duration.
    Timing(Duration),
}

/// Completion signal for a single `animate_to` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Drives the two-dimensional offset of a toast.
///
/// Starting a new animation or calling [`set`](Animator::set) on an axis
/// cancels whatever was running on it; a cancelled ticket is never reported.
pub trait Animator {
    /// Current value of `axis`.
    fn value(&self, axis: Axis) -> f32;

    /// Jumps `axis` to `value` immediately.
    fn set(&mut self, axis: Axis, value: f32);

    /// Starts moving `axis` towards `target`.
    fn animate_to(&mut self, axis: Axis, target: f32, motion: Motion) -> Ticket;

    /// Advances all running animations to `now` and returns the tickets that
    /// finished, in request order.
    fn advance(&mut self, now: Instant) -> Vec<Ticket>;

    /// Returns whether any animation is still in flight.
    fn is_running(&self) -> bool;
}
