// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a toast [`Provider`].
//!
//! The window shows a few controls for the side new toasts enter from and
//! the directions they may be swiped towards. Swipe results are listed in
//! an event log so the callback order is visible.

mod message;
mod style;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::toast::{Direction, DirectionSet, SwipeThreshold};
use crate::ui::toast::{Handle, Provider, Settings, ToastRequest};
use iced::{alignment, window, Element, Size, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;

/// Number of entries kept in the event log.
pub const MAX_EVENTS: usize = 8;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root state of the demo.
pub struct App {
    toasts: Provider<Message>,
    handle: Handle<Message>,
    config: Config,
    direction: Direction,
    disabled: DirectionSet,
    shown: u32,
    events: VecDeque<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_toasts", &self.toasts.len())
            .field("direction", &self.direction)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: config.window.size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    let window = window_settings(&config);
    let boot = move || App::new(flags.clone(), config.clone(), config_warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the demo state and queues the startup toasts.
    fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let mut defaults: Settings = config.toast.settings();
        if let Some(direction) = flags.direction {
            defaults.initial_direction = direction;
        }
        if let Some(threshold) = flags.threshold {
            defaults.swipe_threshold = SwipeThreshold::new(threshold);
        }

        let toasts = Provider::new(Message::Toast, defaults, config.window.size());
        let handle = toasts.handle();
        let mut app = App {
            toasts,
            handle,
            direction: defaults.initial_direction,
            config,
            disabled: DirectionSet::empty(),
            shown: 0,
            events: VecDeque::with_capacity(MAX_EVENTS),
        };

        if let Some(key) = config_warning {
            tracing::warn!(%key, "settings file could not be read, using defaults");
            app.notify(ToastRequest::text("Settings could not be read, using defaults"));
        }
        app.notify(ToastRequest::text("Swipe toasts away in any direction"));

        (app, Task::none())
    }

    /// Raises a toast through the handle, as a component without direct
    /// provider access would.
    fn notify(&mut self, request: ToastRequest<Message>) {
        let request = request
            .padding(style::CARD_PADDING)
            .style(style::toast_card);
        if let Err(err) = self.handle.show(request) {
            tracing::error!(%err, "failed to show toast");
        }
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Swipe Toast".to_string(),
            n => format!("Swipe Toast ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(message) => return self.toasts.update(message),
            Message::Show => self.show_toast(),
            Message::SetDirection(direction) => self.direction = direction,
            Message::ToggleSwipe(direction) => self.disabled.toggle(direction),
            Message::Swiped { number, direction } => {
                self.log(format!("Toast #{number} swiped {direction}"));
            }
            Message::SwipeComplete(number) => {
                self.log(format!("Toast #{number} removed"));
            }
            Message::Clear => {
                let ids: Vec<_> = self.toasts.ids().collect();
                for id in ids {
                    self.toasts.hide(id);
                }
            }
            Message::SaveDefaults => self.save_defaults(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.toasts.view(view::controls(self))
    }

    fn show_toast(&mut self) {
        self.shown += 1;
        let number = self.shown;
        let direction = self.direction;

        let request = Direction::ALL.into_iter().fold(
            ToastRequest::text(format!("Toast #{number} from the {direction} side")),
            |request, d| request.on_swipe(d, Message::Swiped { number, direction: d }),
        );
        let request = request
            .initial_direction(direction)
            .disabled_swipe_directions(self.disabled)
            .on_swipe_complete(Message::SwipeComplete(number))
            .align_y(align_for(direction))
            .padding(style::CARD_PADDING)
            .style(style::toast_card);

        let id = self.toasts.show(request);
        tracing::info!(%id, number, "demo toast shown");
    }

    fn save_defaults(&mut self) {
        self.config.toast.initial_direction = self.direction;
        match config::save(&self.config) {
            Ok(()) => self.log(format!("Saved {} as default direction", self.direction)),
            Err(err) => {
                tracing::warn!(%err, "failed to save settings");
                self.log(format!("Could not save settings: {err}"));
            }
        }
    }

    fn log(&mut self, event: String) {
        if self.events.len() == MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Vertical placement that keeps a toast near the edge it entered from.
fn align_for(direction: Direction) -> alignment::Vertical {
    match direction {
        Direction::Up => alignment::Vertical::Top,
        Direction::Down => alignment::Vertical::Bottom,
        Direction::Left | Direction::Right => alignment::Vertical::Center,
    }
}
