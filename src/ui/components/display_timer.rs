//! Countdown readout screen

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;
use crate::utils::format_remaining;

/// Formatted remaining time plus the edit-mode affordance
///
/// While the countdown runs the edit button is swapped for an equally
/// sized placeholder, so the readout does not shift.
pub fn view<'a>(remaining_secs: u32, is_running: bool) -> Element<'a, Message> {
    let button_size = 28;
    let icon_size = 18;

    let readout = text(format_remaining(remaining_secs))
        .size(48)
        .color(theme::TEXT_PRIMARY);

    let edit_affordance: Element<'a, Message> = if is_running {
        Space::new().width(button_size).height(button_size).into()
    } else {
        button(
            svg(svg::Handle::from_memory(ALARM_ICON.as_bytes()))
                .width(icon_size)
                .height(icon_size)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::TEXT_SECONDARY),
                }),
        )
        .width(button_size)
        .height(button_size)
        .style(theme::icon_button)
        .on_press(Message::SetEditable(true))
        .into()
    };

    row![
        Space::new().width(button_size),
        container(readout).width(Fill).align_x(Alignment::Center),
        edit_affordance,
    ]
    .align_y(Alignment::Center)
    .into()
}

const ALARM_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <circle cx="12" cy="13" r="8"/>
    <path d="M12 9v4l2 2"/>
    <path d="M5 3 2 6"/>
    <path d="m22 6-3-3"/>
</svg>"#;
