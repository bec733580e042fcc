// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Swipe directions and the bounded values that drive a toast's gesture
//! handling, independent of any presentation framework.

pub mod direction;
pub mod newtypes;

pub use direction::{Axis, Direction, DirectionSet, ParseDirectionError};
pub use newtypes::{AnimateOutDuration, SwipeThreshold};
