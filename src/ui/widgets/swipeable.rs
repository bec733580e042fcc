// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws its content at an offset and reports pointer
//! presses, moves and releases so the owner can drive a drag gesture.
//!
//! The widget holds no gesture state. The owner tells it whether a press is
//! being tracked; only then are moves and releases anywhere in the window
//! published.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer input relevant to a drag gesture, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// Tracking ended without a usable position.
    Lost,
}

/// Content translated by an externally driven offset.
pub struct Swipeable<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
    tracking: bool,
    on_pointer: Box<dyn Fn(PointerEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> Swipeable<'a, Message, Theme, Renderer> {
    /// Creates a `Swipeable` drawing `content` at `offset`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        offset: Vector,
        on_pointer: impl Fn(PointerEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            offset,
            tracking: false,
            on_pointer: Box::new(on_pointer),
        }
    }

    /// Sets whether a press on this widget is being tracked.
    #[must_use]
    pub fn tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Swipeable<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let offset = self.offset;
        renderer.with_translation(offset, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                content_cursor(cursor, offset),
                &content_viewport(*viewport, offset),
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let offset = self.offset;
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            content_cursor(cursor, offset),
            renderer,
            clipboard,
            shell,
            &content_viewport(*viewport, offset),
        );

        // Interactive content (buttons, inputs) keeps priority over the drag.
        if shell.is_event_captured() {
            return;
        }

        let bounds = translate(layout.bounds(), offset);
        if let Some(pointer) = pointer_event(event, cursor, bounds, self.tracking) {
            shell.publish((self.on_pointer)(pointer));
            if matches!(pointer, PointerEvent::Pressed(_)) {
                shell.capture_event();
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let offset = self.offset;
        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            content_cursor(cursor, offset),
            &content_viewport(*viewport, offset),
            renderer,
        );

        if interaction != mouse::Interaction::None {
            interaction
        } else if self.tracking {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(translate(layout.bounds(), offset)) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::None
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let offset = self.offset;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + offset,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Swipeable<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(swipeable: Swipeable<'a, Message, Theme, Renderer>) -> Self {
        Self::new(swipeable)
    }
}

/// Helper function to create a swipeable wrapper.
pub fn swipeable<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: Vector,
    on_pointer: impl Fn(PointerEvent) -> Message + 'a,
) -> Swipeable<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Swipeable::new(content, offset, on_pointer)
}

fn translate(rectangle: Rectangle, offset: Vector) -> Rectangle {
    Rectangle {
        x: rectangle.x + offset.x,
        y: rectangle.y + offset.y,
        ..rectangle
    }
}

/// Viewport as seen from the untranslated content.
fn content_viewport(viewport: Rectangle, offset: Vector) -> Rectangle {
    translate(viewport, Vector::new(-offset.x, -offset.y))
}

/// Cursor as seen from the untranslated content.
fn content_cursor(cursor: mouse::Cursor, offset: Vector) -> mouse::Cursor {
    match cursor.position() {
        Some(position) => {
            mouse::Cursor::Available(Point::new(position.x - offset.x, position.y - offset.y))
        }
        None => mouse::Cursor::Unavailable,
    }
}

/// Maps a raw event to pointer input for the drag gesture.
///
/// Presses count only inside the translated `bounds`; moves and releases
/// count anywhere, but only while `tracking`.
fn pointer_event(
    event: &Event,
    cursor: mouse::Cursor,
    bounds: Rectangle,
    tracking: bool,
) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_over(bounds).map(PointerEvent::Pressed)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) if bounds.contains(*position) => {
            Some(PointerEvent::Pressed(*position))
        }
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. })
            if tracking =>
        {
            Some(PointerEvent::Moved(*position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if tracking => Some(
            cursor
                .position()
                .map_or(PointerEvent::Lost, PointerEvent::Released),
        ),
        Event::Touch(touch::Event::FingerLifted { position, .. }) if tracking => {
            Some(PointerEvent::Released(*position))
        }
        Event::Mouse(mouse::Event::CursorLeft) | Event::Touch(touch::Event::FingerLost { .. })
            if tracking =>
        {
            Some(PointerEvent::Lost)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(200.0, 50.0))
    }

    #[test]
    fn press_inside_translated_bounds_is_reported() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let moved = translate(bounds(), Vector::new(100.0, 0.0));
        let cursor = mouse::Cursor::Available(Point::new(250.0, 10.0));

        assert_eq!(
            pointer_event(&event, cursor, moved, false),
            Some(PointerEvent::Pressed(Point::new(250.0, 10.0)))
        );
        assert_eq!(pointer_event(&event, cursor, bounds(), false), None);
    }

    #[test]
    fn moves_are_reported_only_while_tracking() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(900.0, 900.0),
        });
        let cursor = mouse::Cursor::Available(Point::new(900.0, 900.0));

        assert_eq!(pointer_event(&event, cursor, bounds(), false), None);
        assert_eq!(
            pointer_event(&event, cursor, bounds(), true),
            Some(PointerEvent::Moved(Point::new(900.0, 900.0)))
        );
    }

    #[test]
    fn release_without_cursor_is_lost() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            pointer_event(&event, mouse::Cursor::Unavailable, bounds(), true),
            Some(PointerEvent::Lost)
        );
    }

    #[test]
    fn cursor_left_while_tracking_is_lost() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(
            pointer_event(&event, mouse::Cursor::Unavailable, bounds(), true),
            Some(PointerEvent::Lost)
        );
    }

    #[test]
    fn content_cursor_undoes_offset() {
        let cursor = mouse::Cursor::Available(Point::new(120.0, 40.0));
        assert_eq!(
            content_cursor(cursor, Vector::new(20.0, -10.0)).position(),
            Some(Point::new(100.0, 50.0))
        );
    }

    #[test]
    fn window_events_are_ignored() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert_eq!(
            pointer_event(&event, mouse::Cursor::Unavailable, bounds(), true),
            None
        );
    }
}
