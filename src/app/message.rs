// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::toast::Direction;
use crate::ui::toast;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast::Message),
    /// Show a new toast with the current controls.
    Show,
    /// Choose the side new toasts slide in from.
    SetDirection(Direction),
    /// Enable or disable swiping towards a direction for new toasts.
    ToggleSwipe(Direction),
    /// A toast was swiped away.
    Swiped { number: u32, direction: Direction },
    /// A swiped toast finished and was removed.
    SwipeComplete(u32),
    /// Remove all toasts without animation.
    Clear,
    /// Persist the current direction as the default.
    SaveDefaults,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Side toasts slide in from, overriding the config file.
    pub direction: Option<Direction>,
    /// Dismiss threshold in logical pixels, overriding the config file.
    pub threshold: Option<f32>,
}
