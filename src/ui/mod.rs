// SPDX-License-Identifier: MPL-2.0
//! User interface components.

pub mod toast;
pub mod widgets;
