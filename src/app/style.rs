// SPDX-License-Identifier: MPL-2.0
//! Styles for the demo toasts.

use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const CARD_PADDING: f32 = 16.0;
pub const CARD_RADIUS: f32 = 10.0;
pub const BORDER_WIDTH: f32 = 2.0;

/// Card style for a demo toast, accented with the theme's primary color.
pub fn toast_card(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.primary.base.color,
            width: BORDER_WIDTH,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_card_uses_primary_accent() {
        let theme = Theme::Dark;
        let style = toast_card(&theme);
        assert_eq!(style.border.color, theme.extended_palette().primary.base.color);
        assert!(style.background.is_some());
    }
}
