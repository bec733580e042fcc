// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss toast system.
//!
//! Toasts slide in from one side of the host area, follow the pointer while
//! dragged, and either snap back or leave the screen when released. Several
//! toasts can be active at once; they are stacked in the order they were
//! shown.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` builder, `ToastId` and callbacks
//! - [`item`] - `ToastItem` gesture/animation state machine
//! - [`provider`] - `Provider` registry that owns and renders active toasts
//! - [`handle`] - `Handle` for raising toasts from other components
//!
//! # Usage
//!
//! ```ignore
//! use swipe_toast::ui::toast::{self, Provider, Settings, ToastRequest};
//!
//! // Create a provider that wraps its messages in the host's message type
//! let mut toasts = Provider::new(Message::Toast, Settings::default(), window_size);
//!
//! // Show a toast that reports when it is swiped to the left
//! let id = toasts.show(ToastRequest::text("Saved").on_left_swipe(Message::Undo));
//!
//! // In update, forward provider messages
//! Message::Toast(message) => toasts.update(message),
//!
//! // In view, stack toasts over the rest of the UI
//! toasts.view(content)
//! ```
//!
//! # Exit rules
//!
//! On release, directions are tried in the fixed order left, right, up,
//! down. The first enabled direction whose threshold is exceeded wins, so a
//! diagonal swipe always leaves horizontally.

mod gesture;
pub mod handle;
pub mod item;
pub mod provider;
pub mod request;

pub use gesture::PanGesture;
pub use handle::Handle;
pub use item::{off_screen, select_exit, Phase, Release, Settings, ToastItem};
pub use provider::{Message, Provider, FRAME_INTERVAL};
pub use request::{Callbacks, ToastId, ToastRequest, ToastStyle};
