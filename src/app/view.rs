// SPDX-License-Identifier: MPL-2.0
//! Demo controls rendered beneath the toasts.

use super::{App, Message};
use crate::domain::toast::Direction;
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length, Theme};

const SPACING: f32 = 12.0;
const PADDING: f32 = 24.0;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

fn selectable<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let style: ButtonStyle = if selected {
        button::primary
    } else {
        button::secondary
    };
    button(text(label)).on_press(message).style(style).into()
}

/// Builds the control panel.
pub(super) fn controls(app: &App) -> Element<'_, Message> {
    let entry_row = Row::with_children(Direction::ALL.map(|direction| {
        selectable(
            direction.to_string(),
            direction == app.direction,
            Message::SetDirection(direction),
        )
    }))
    .spacing(SPACING);

    let swipe_row = Row::with_children(Direction::ALL.map(|direction| {
        let enabled = !app.disabled.contains(direction);
        let label = if enabled {
            format!("{direction}: on")
        } else {
            format!("{direction}: off")
        };
        selectable(label, enabled, Message::ToggleSwipe(direction))
    }))
    .spacing(SPACING);

    let actions = row![
        button(text("Show toast")).on_press(Message::Show),
        button(text("Clear")).on_press(Message::Clear).style(button::danger),
        button(text("Save as default")).on_press(Message::SaveDefaults),
    ]
    .spacing(SPACING);

    let events = Column::with_children(
        app.events
            .iter()
            .rev()
            .map(|event| text(event.as_str()).size(14).into()),
    )
    .spacing(4);

    let content = column![
        text("Enter from").size(18),
        entry_row,
        text("Swipe directions").size(18),
        swipe_row,
        actions,
        text("Events").size(18),
        events,
    ]
    .spacing(SPACING);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PADDING)
        .into()
}
