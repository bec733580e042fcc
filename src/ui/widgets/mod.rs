// SPDX-License-Identifier: MPL-2.0
pub mod swipeable;

pub use swipeable::{swipeable, PointerEvent, Swipeable};
