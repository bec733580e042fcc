// SPDX-License-Identifier: MPL-2.0
//! Toast requests and identifiers.
//!
//! A [`ToastRequest`] is what host code hands to the provider: content,
//! styling, per-direction callbacks, and optional overrides for the swipe
//! behavior. Unset overrides fall back to the provider's defaults when the
//! toast is shown.

use super::item::Settings;
use crate::domain::toast::{AnimateOutDuration, Direction, DirectionSet, SwipeThreshold};
use iced::widget::{container, text};
use iced::{alignment, Element, Padding, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Builds the toast body each time the provider renders.
pub type Content<M> = Arc<dyn Fn() -> Element<'static, M> + Send + Sync>;

/// Container style applied on top of the default toast positioning.
pub type StyleFn = Arc<dyn Fn(&Theme) -> container::Style + Send + Sync>;

/// Visual overrides for a toast.
///
/// The provider always lays a toast out full width with clipped overflow;
/// these settings are applied after that.
#[derive(Clone)]
pub struct ToastStyle {
    pub padding: Padding,
    /// Where the toast sits vertically inside the host area.
    pub align_y: alignment::Vertical,
    pub container: Option<StyleFn>,
}

impl ToastStyle {
    /// Resolves the container style for `theme`.
    #[must_use]
    pub fn container_style(&self, theme: &Theme) -> container::Style {
        self.container
            .as_ref()
            .map_or_else(container::Style::default, |style| style(theme))
    }
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            padding: Padding::ZERO,
            align_y: alignment::Vertical::Top,
            container: None,
        }
    }
}

impl fmt::Debug for ToastStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStyle")
            .field("padding", &self.padding)
            .field("align_y", &self.align_y)
            .field("custom_container", &self.container.is_some())
            .finish()
    }
}

/// Messages emitted when a toast is swiped away.
#[derive(Debug, Clone)]
pub struct Callbacks<M> {
    pub on_left_swipe: Option<M>,
    pub on_right_swipe: Option<M>,
    pub on_up_swipe: Option<M>,
    pub on_down_swipe: Option<M>,
    /// Emitted after the directional callback, whatever the direction.
    pub on_swipe_complete: Option<M>,
}

impl<M> Default for Callbacks<M> {
    fn default() -> Self {
        Self {
            on_left_swipe: None,
            on_right_swipe: None,
            on_up_swipe: None,
            on_down_swipe: None,
            on_swipe_complete: None,
        }
    }
}

impl<M: Clone> Callbacks<M> {
    /// Returns the callback for `direction`.
    #[must_use]
    pub fn for_direction(&self, direction: Direction) -> Option<&M> {
        match direction {
            Direction::Left => self.on_left_swipe.as_ref(),
            Direction::Right => self.on_right_swipe.as_ref(),
            Direction::Up => self.on_up_swipe.as_ref(),
            Direction::Down => self.on_down_swipe.as_ref(),
        }
    }

    /// Messages to emit for an exit towards `direction`, in firing order.
    #[must_use]
    pub fn on_exit(&self, direction: Direction) -> Vec<M> {
        self.for_direction(direction)
            .into_iter()
            .chain(self.on_swipe_complete.as_ref())
            .cloned()
            .collect()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<M> {
        match direction {
            Direction::Left => &mut self.on_left_swipe,
            Direction::Right => &mut self.on_right_swipe,
            Direction::Up => &mut self.on_up_swipe,
            Direction::Down => &mut self.on_down_swipe,
        }
    }
}

/// A toast to be shown by the provider.
pub struct ToastRequest<M> {
    content: Content<M>,
    style: ToastStyle,
    initial_direction: Option<Direction>,
    swipe_threshold: Option<SwipeThreshold>,
    animate_out_duration: Option<AnimateOutDuration>,
    disabled: DirectionSet,
    callbacks: Callbacks<M>,
}

impl<M> ToastRequest<M> {
    /// Creates a request rendering `content`.
    pub fn new(content: impl Fn() -> Element<'static, M> + Send + Sync + 'static) -> Self {
        Self {
            content: Arc::new(content),
            style: ToastStyle::default(),
            initial_direction: None,
            swipe_threshold: None,
            animate_out_duration: None,
            disabled: DirectionSet::empty(),
            callbacks: Callbacks::default(),
        }
    }

    /// Creates a request showing a line of text.
    pub fn text(message: impl Into<String>) -> Self
    where
        M: 'static,
    {
        let message: String = message.into();
        Self::new(move || text(message.clone()).into())
    }

    /// Sets the side the toast slides in from.
    #[must_use]
    pub fn initial_direction(mut self, direction: Direction) -> Self {
        self.initial_direction = Some(direction);
        self
    }

    /// Sets the release distance that dismisses the toast.
    #[must_use]
    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = Some(SwipeThreshold::new(threshold));
        self
    }

    /// Sets how long the exit animation runs.
    #[must_use]
    pub fn animate_out_duration(mut self, duration: Duration) -> Self {
        self.animate_out_duration = Some(AnimateOutDuration::new(duration));
        self
    }

    /// Prevents dragging or dismissing towards `direction`.
    #[must_use]
    pub fn disable_swipe(mut self, direction: Direction) -> Self {
        self.disabled.insert(direction);
        self
    }

    /// Replaces the set of disabled directions.
    #[must_use]
    pub fn disabled_swipe_directions(mut self, directions: impl Into<DirectionSet>) -> Self {
        self.disabled = directions.into();
        self
    }

    /// Emits `message` when the toast is swiped away towards `direction`.
    #[must_use]
    pub fn on_swipe(mut self, direction: Direction, message: M) -> Self
    where
        M: Clone,
    {
        *self.callbacks.slot_mut(direction) = Some(message);
        self
    }

    #[must_use]
    pub fn on_left_swipe(self, message: M) -> Self
    where
        M: Clone,
    {
        self.on_swipe(Direction::Left, message)
    }

    #[must_use]
    pub fn on_right_swipe(self, message: M) -> Self
    where
        M: Clone,
    {
        self.on_swipe(Direction::Right, message)
    }

    #[must_use]
    pub fn on_up_swipe(self, message: M) -> Self
    where
        M: Clone,
    {
        self.on_swipe(Direction::Up, message)
    }

    #[must_use]
    pub fn on_down_swipe(self, message: M) -> Self
    where
        M: Clone,
    {
        self.on_swipe(Direction::Down, message)
    }

    /// Emits `message` after any directional callback once the toast is gone.
    #[must_use]
    pub fn on_swipe_complete(mut self, message: M) -> Self {
        self.callbacks.on_swipe_complete = Some(message);
        self
    }

    /// Sets the container style applied over the default positioning.
    #[must_use]
    pub fn style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + Send + Sync + 'static,
    ) -> Self {
        self.style.container = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.style.padding = padding.into();
        self
    }

    #[must_use]
    pub fn align_y(mut self, align: alignment::Vertical) -> Self {
        self.style.align_y = align;
        self
    }

    /// Fills unset options from `defaults`.
    #[must_use]
    pub fn resolve(&self, defaults: &Settings) -> Settings {
        Settings {
            initial_direction: self
                .initial_direction
                .unwrap_or(defaults.initial_direction),
            swipe_threshold: self.swipe_threshold.unwrap_or(defaults.swipe_threshold),
            animate_out: self.animate_out_duration.unwrap_or(defaults.animate_out),
            disabled: self.disabled,
            ..*defaults
        }
    }

    /// Renders the toast body.
    #[must_use]
    pub fn content(&self) -> Element<'static, M> {
        (self.content)()
    }

    #[must_use]
    pub fn toast_style(&self) -> &ToastStyle {
        &self.style
    }

    #[must_use]
    pub fn callbacks(&self) -> &Callbacks<M> {
        &self.callbacks
    }
}

impl<M> fmt::Debug for ToastRequest<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("style", &self.style)
            .field("initial_direction", &self.initial_direction)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("animate_out_duration", &self.animate_out_duration)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Left,
        Down,
        Done,
    }

    #[test]
    fn ids_are_unique_and_display_as_strings() {
        let a = ToastId::new();
        let b = ToastId::new();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("toast-"));
    }

    #[test]
    fn resolve_keeps_defaults_for_unset_options() {
        let defaults = Settings::default();
        let request = ToastRequest::<Msg>::text("hi");

        assert_eq!(request.resolve(&defaults), defaults);
    }

    #[test]
    fn resolve_applies_overrides() {
        let request = ToastRequest::<Msg>::text("hi")
            .initial_direction(Direction::Up)
            .swipe_threshold(40.0)
            .animate_out_duration(Duration::from_millis(120))
            .disable_swipe(Direction::Left);
        let settings = request.resolve(&Settings::default());

        assert_eq!(settings.initial_direction, Direction::Up);
        assert_eq!(settings.swipe_threshold.value(), 40.0);
        assert_eq!(settings.animate_out.value(), Duration::from_millis(120));
        assert!(settings.disabled.contains(Direction::Left));
    }

    #[test]
    fn exit_messages_fire_directional_then_complete() {
        let request = ToastRequest::text("hi")
            .on_left_swipe(Msg::Left)
            .on_down_swipe(Msg::Down)
            .on_swipe_complete(Msg::Done);

        assert_eq!(
            request.callbacks().on_exit(Direction::Left),
            vec![Msg::Left, Msg::Done]
        );
        assert_eq!(request.callbacks().on_exit(Direction::Right), vec![Msg::Done]);
    }

    #[test]
    fn default_style_uses_plain_container() {
        let style = ToastStyle::default();
        let resolved = style.container_style(&Theme::Dark);
        assert!(resolved.background.is_none());
        assert!(resolved.text_color.is_none());
        assert_eq!(style.align_y, alignment::Vertical::Top);
    }
}
