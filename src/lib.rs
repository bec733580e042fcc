// SPDX-License-Identifier: MPL-2.0
//! `swipe_toast` provides swipe-to-dismiss toast notifications for the Iced
//! GUI framework.
//!
//! A [`Provider`](ui::toast::Provider) keeps the active toasts and stacks
//! them over the host's content. Each toast follows the pointer while
//! dragged and, when released past its threshold, leaves the screen and
//! reports the direction it was swiped in.

pub mod animation;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;
