// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! Type-safe wrappers for the numeric knobs of a toast, guaranteeing
//! they are always usable by the gesture state machine.

use std::time::Duration;

// =============================================================================
// Swipe Bounds
// =============================================================================

/// Swipe threshold and animation duration bounds.
pub mod swipe_bounds {
    /// Default distance (in logical pixels) a release must exceed to dismiss.
    pub const DEFAULT_THRESHOLD: f32 = 100.0;
    /// Default duration of the exit animation in milliseconds.
    pub const DEFAULT_ANIMATE_OUT_MS: u64 = 500;
    /// Upper bound for the exit animation in milliseconds.
    pub const MAX_ANIMATE_OUT_MS: u64 = 10_000;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Release distance beyond which a swipe dismisses the toast.
///
/// Always strictly positive and finite. Invalid input falls back to
/// [`swipe_bounds::DEFAULT_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, falling back to the default for non-positive
    /// or non-finite values.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::default()
        }
    }

    /// Returns the raw distance.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Minimum pointer travel before a press is recognized as a drag.
    #[must_use]
    pub fn min_drag_distance(self) -> f32 {
        self.0 / 2.0
    }

    /// Returns whether a signed translation goes past the threshold in the
    /// direction given by `sign`.
    #[must_use]
    pub fn is_exceeded_by(self, translation: f32, sign: f32) -> bool {
        translation * sign > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_THRESHOLD)
    }
}

// =============================================================================
// AnimateOutDuration
// =============================================================================

/// Duration of the exit animation, capped at
/// [`swipe_bounds::MAX_ANIMATE_OUT_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimateOutDuration(Duration);

impl AnimateOutDuration {
    /// Creates a duration, clamping it to the supported range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.min(Duration::from_millis(swipe_bounds::MAX_ANIMATE_OUT_MS)))
    }

    /// Creates a duration from milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the wrapped duration.
    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

impl Default for AnimateOutDuration {
    fn default() -> Self {
        Self(Duration::from_millis(swipe_bounds::DEFAULT_ANIMATE_OUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rejects_non_positive_values() {
        assert_eq!(SwipeThreshold::new(0.0), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(-20.0), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(42.0).value(), 42.0);
    }

    #[test]
    fn min_drag_distance_is_half_the_threshold() {
        assert_eq!(SwipeThreshold::new(80.0).min_drag_distance(), 40.0);
    }

    #[test]
    fn threshold_is_exceeded_strictly_and_with_sign() {
        let threshold = SwipeThreshold::new(100.0);
        assert!(threshold.is_exceeded_by(-101.0, -1.0));
        assert!(!threshold.is_exceeded_by(-100.0, -1.0));
        assert!(!threshold.is_exceeded_by(150.0, -1.0));
        assert!(threshold.is_exceeded_by(150.0, 1.0));
    }

    #[test]
    fn animate_out_duration_is_clamped() {
        let long = AnimateOutDuration::from_millis(60_000);
        assert_eq!(
            long.value(),
            Duration::from_millis(swipe_bounds::MAX_ANIMATE_OUT_MS)
        );
        assert_eq!(AnimateOutDuration::from_millis(0).value(), Duration::ZERO);
    }
}
