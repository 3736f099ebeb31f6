//! Theme for the timer card
//! Fixed dark palette: blue-grey card, light-blue accent, red reset

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector, color};

// ============================================================================
// Color Palette
// ============================================================================

pub const PAGE_BG: Color = color!(0x263238);
pub const CARD_BG: Color = color!(0x455a64);
pub const SCREEN_BG: Color = color!(0x37474f);
pub const BORDER: Color = color!(0x546e7a);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xb0bec5);
pub const TEXT_DISABLED: Color = color!(0x78909c);

pub const ACCENT: Color = color!(0x29b6f6);
pub const ACCENT_HOVER: Color = color!(0x4fc3f7);
pub const DANGER: Color = color!(0xe53935);
pub const DANGER_HOVER: Color = color!(0xef5350);
pub const NEUTRAL: Color = color!(0x546e7a);
pub const NEUTRAL_HOVER: Color = color!(0x607d8b);

// ============================================================================
// Containers
// ============================================================================

/// Page background behind the card
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAGE_BG)),
        ..Default::default()
    }
}

/// Raised card holding the whole widget
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Inset screen area for the readout and the editor
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SCREEN_BG)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        ..Default::default()
    }
}

// ============================================================================
// Buttons
// ============================================================================

fn action_button(fill: Color, hover: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(fill)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(fill)),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(NEUTRAL)),
            text_color: TEXT_DISABLED,
            shadow: Shadow::default(),
            ..base
        },
        _ => base,
    }
}

/// Start button (countdown idle)
pub fn start_button(_theme: &Theme, status: button::Status) -> button::Style {
    action_button(ACCENT, ACCENT_HOVER, status)
}

/// Stop button (countdown running)
pub fn stop_button(_theme: &Theme, status: button::Status) -> button::Style {
    action_button(NEUTRAL, NEUTRAL_HOVER, status)
}

/// Reset button
pub fn reset_button(_theme: &Theme, status: button::Status) -> button::Style {
    action_button(DANGER, DANGER_HOVER, status)
}

/// Borderless icon button on the screen area
pub fn icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: TEXT_SECONDARY,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(NEUTRAL)),
            text_color: TEXT_PRIMARY,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(BORDER)),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Minutes text input on the edit screen
pub fn minutes_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(SCREEN_BG),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_DISABLED,
        value: TEXT_PRIMARY,
        selection: ACCENT,
    }
}
