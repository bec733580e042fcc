// SPDX-License-Identifier: MPL-2.0
//! Toast registry and rendering.
//!
//! The `Provider` owns the active toasts in insertion order, which is also
//! their stacking order on screen. It drives each toast's animation from
//! frame ticks and, when a toast has been swiped away, emits the host's
//! callbacks before removing it.

use super::handle::{Command, Handle};
use super::item::{Settings, ToastItem};
use super::request::{ToastId, ToastRequest};
use crate::animation::Timeline;
use crate::domain::toast::Direction;
use crate::ui::widgets::{swipeable, PointerEvent};
use iced::widget::{container, Stack};
use iced::{event, time, window, Element, Length, Size, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Interval between animation frames while a toast is moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer input on a specific toast.
    Pointer { id: ToastId, event: PointerEvent },
    /// Animation frame.
    Frame(Instant),
    /// The host window changed size.
    ViewportResized(Size),
    /// Remove a toast without animation.
    Dismiss(ToastId),
}

struct Entry<M> {
    id: ToastId,
    request: ToastRequest<M>,
    item: ToastItem<Timeline>,
}

/// Registry of active toasts.
pub struct Provider<M> {
    entries: Vec<Entry<M>>,
    defaults: Settings,
    viewport: Size,
    wrap: fn(Message) -> M,
    sender: UnboundedSender<Command<M>>,
    receiver: UnboundedReceiver<Command<M>>,
}

impl<M: Clone + Send + 'static> Provider<M> {
    /// Creates an empty provider.
    ///
    /// `wrap` lifts provider messages into the host's message type, and
    /// `viewport` is the initial size of the area toasts are stacked over.
    pub fn new(wrap: fn(Message) -> M, defaults: Settings, viewport: Size) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            entries: Vec::new(),
            defaults,
            viewport,
            wrap,
            sender,
            receiver,
        }
    }

    /// Returns a handle that forwards `show`/`hide` to this provider.
    #[must_use]
    pub fn handle(&self) -> Handle<M> {
        Handle::bound(self.sender.clone())
    }

    /// Shows a toast and returns its identifier.
    pub fn show(&mut self, request: ToastRequest<M>) -> ToastId {
        let id = ToastId::new();
        self.insert(id, request);
        id
    }

    fn insert(&mut self, id: ToastId, request: ToastRequest<M>) {
        let settings = request.resolve(&self.defaults);
        let item = ToastItem::mount(settings, self.viewport, Timeline::new());
        self.entries.push(Entry { id, request, item });
        tracing::debug!(%id, direction = %settings.initial_direction, active = self.entries.len(), "toast shown");
    }

    /// Removes a toast. Returns `false` if no toast had that identifier.
    pub fn hide(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() < before;
        if removed {
            tracing::debug!(%id, active = self.entries.len(), "toast hidden");
        }
        removed
    }

    /// Applies commands queued by handles.
    pub fn sync(&mut self) {
        while let Ok(command) = self.receiver.try_recv() {
            match command {
                Command::Show { id, request } => self.insert(id, request),
                Command::Hide(id) => {
                    self.hide(id);
                }
            }
        }
    }

    /// Handles a provider message and returns the host messages it triggers,
    /// in firing order.
    pub fn handle_message(&mut self, message: Message) -> Vec<M> {
        self.sync();

        match message {
            Message::Pointer { id, event } => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    let item = &mut entry.item;
                    match event {
                        PointerEvent::Pressed(position) => item.press(position),
                        PointerEvent::Moved(position) => item.pointer_moved(position),
                        PointerEvent::Released(position) => {
                            item.pointer_released(position);
                        }
                        PointerEvent::Lost => {
                            item.pointer_lost();
                        }
                    }
                }
                Vec::new()
            }
            Message::Frame(now) => self.advance(now),
            Message::ViewportResized(size) => {
                self.viewport = size;
                for entry in &mut self.entries {
                    entry.item.set_viewport(size);
                }
                Vec::new()
            }
            Message::Dismiss(id) => {
                self.hide(id);
                Vec::new()
            }
        }
    }

    /// Handles a provider message, turning triggered callbacks into tasks.
    pub fn update(&mut self, message: Message) -> Task<M> {
        Task::batch(self.handle_message(message).into_iter().map(Task::done))
    }

    fn advance(&mut self, now: Instant) -> Vec<M> {
        let exits: Vec<(ToastId, Direction)> = self
            .entries
            .iter_mut()
            .filter_map(|entry| entry.item.tick(now).map(|direction| (entry.id, direction)))
            .collect();

        let mut messages = Vec::new();
        for (id, direction) in exits {
            if let Some(entry) = self.entries.iter().find(|e| e.id == id) {
                messages.extend(entry.request.callbacks().on_exit(direction));
            }
            tracing::debug!(%id, %direction, "toast swipe complete");
            self.hide(id);
        }
        messages
    }

    /// Frame ticks while anything is moving, plus the window size when it
    /// opens or is resized.
    pub fn subscription(&self) -> Subscription<Message> {
        let resize = event::listen_with(|event, _status, _window| viewport_event(&event));

        if self.is_animating() || self.has_pending() {
            Subscription::batch([resize, time::every(FRAME_INTERVAL).map(Message::Frame)])
        } else {
            resize
        }
    }

    /// Stacks the active toasts over `base`, oldest at the bottom.
    pub fn view<'a>(&'a self, base: impl Into<Element<'a, M>>) -> Element<'a, M> {
        self.entries
            .iter()
            .fold(
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(base),
                |stack, entry| stack.push(self.view_entry(entry)),
            )
            .into()
    }

    fn view_entry<'a>(&'a self, entry: &'a Entry<M>) -> Element<'a, M> {
        let style = entry.request.toast_style().clone();
        let padding = style.padding;
        let align_y = style.align_y;

        let card = container(entry.request.content())
            .width(Length::Fill)
            .clip(true)
            .padding(padding)
            .style(move |theme: &Theme| style.container_style(theme));

        let id = entry.id;
        let wrap = self.wrap;
        let layer = swipeable(card, entry.item.offset(), move |event| {
            wrap(Message::Pointer { id, event })
        })
        .tracking(entry.item.is_tracking());

        container(layer)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(align_y)
            .into()
    }

    /// Number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers of the active toasts in stacking order.
    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Returns the state machine of an active toast.
    #[must_use]
    pub fn item(&self, id: ToastId) -> Option<&ToastItem<Timeline>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    /// Returns whether any toast needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entries.iter().any(|entry| entry.item.is_animating())
    }

    /// Returns whether handles have queued commands not yet applied.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

/// Maps window events carrying the window size to provider messages.
///
/// Many platforms report the initial size only through `Opened`.
fn viewport_event(event: &iced::Event) -> Option<Message> {
    match event {
        iced::Event::Window(window::Event::Opened { size, .. })
        | iced::Event::Window(window::Event::Resized(size)) => {
            Some(Message::ViewportResized(*size))
        }
        _ => None,
    }
}
