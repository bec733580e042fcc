// SPDX-License-Identifier: MPL-2.0
//! Injectable access to a toast provider.
//!
//! Components that want to raise toasts receive a [`Handle`] from whoever
//! owns the [`Provider`](super::Provider) instead of looking one up
//! implicitly. Every call checks that a provider is still on the other end
//! and fails with [`Error::MissingProvider`] otherwise.

use super::request::{ToastId, ToastRequest};
use crate::error::{Error, Result, TOAST_PROVIDER};
use std::fmt;
use tokio::sync::mpsc::UnboundedSender;

/// Work queued for the provider by a handle.
pub(super) enum Command<M> {
    Show { id: ToastId, request: ToastRequest<M> },
    Hide(ToastId),
}

/// Handle for showing and hiding toasts from outside the provider.
///
/// This handle is cheap to clone. Commands are queued and applied the next
/// time the provider handles a message of any kind (or on
/// [`Provider::sync`](super::Provider::sync)).
///
/// Call it from the host's `update` or `boot`: the runtime re-reads
/// [`Provider::subscription`](super::Provider::subscription) after those,
/// which turns on frame ticks until the queue is drained. A send from a
/// background task only shows up once some message reaches the provider.
pub struct Handle<M> {
    sender: Option<UnboundedSender<Command<M>>>,
}

impl<M> Handle<M> {
    pub(super) fn bound(sender: UnboundedSender<Command<M>>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Creates a handle that is not connected to any provider.
    ///
    /// Every operation on it fails with [`Error::MissingProvider`].
    #[must_use]
    pub fn unbound() -> Self {
        Self { sender: None }
    }

    /// Returns whether a provider is still listening.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.sender.as_ref().is_some_and(|s| !s.is_closed())
    }

    /// Queues a toast and returns its identifier immediately.
    pub fn show(&self, request: ToastRequest<M>) -> Result<ToastId> {
        let id = ToastId::new();
        self.send(Command::Show { id, request })?;
        Ok(id)
    }

    /// Queues removal of a toast. Unknown identifiers are ignored by the
    /// provider.
    pub fn hide(&self, id: ToastId) -> Result<()> {
        self.send(Command::Hide(id))
    }

    fn send(&self, command: Command<M>) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or(Error::MissingProvider(TOAST_PROVIDER))?;
        sender
            .send(command)
            .map_err(|_| Error::MissingProvider(TOAST_PROVIDER))
    }
}

impl<M> Clone for Handle<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M> Default for Handle<M> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<M> fmt::Debug for Handle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_handle_reports_missing_provider() {
        let handle = Handle::<()>::unbound();

        assert!(!handle.is_bound());
        assert_eq!(
            handle.show(ToastRequest::text("hello")),
            Err(Error::MissingProvider(TOAST_PROVIDER))
        );
        assert_eq!(
            handle.hide(ToastId::new()),
            Err(Error::MissingProvider(TOAST_PROVIDER))
        );
    }

    #[test]
    fn closed_channel_reports_missing_provider() {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        let handle = Handle::<()>::bound(sender);
        assert!(handle.is_bound());

        drop(receiver);
        assert!(!handle.is_bound());
        assert!(matches!(
            handle.hide(ToastId::new()),
            Err(Error::MissingProvider(_))
        ));
    }
}
