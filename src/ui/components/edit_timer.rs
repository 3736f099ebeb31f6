//! Duration editor screen

use iced::widget::{Space, button, column, row, svg, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Minutes input with a confirm affordance leaving edit mode
///
/// The field reports every edit upward; range enforcement happens in the
/// update handler, so the raw text stays visible while typing.
pub fn view(minutes_input: &str) -> Element<'_, Message> {
    let button_size = 28;
    let icon_size = 18;

    let input = text_input("Time in minutes", minutes_input)
        .on_input(Message::MinutesInput)
        .padding(10)
        .size(18)
        .style(theme::minutes_input);

    let done_btn = button(
        svg(svg::Handle::from_memory(CHECK_ICON.as_bytes()))
            .width(icon_size)
            .height(icon_size)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            }),
    )
    .width(button_size)
    .height(button_size)
    .style(theme::icon_button)
    .on_press(Message::SetEditable(false));

    let label = text("Time in minutes (1-60)")
        .size(12)
        .color(theme::TEXT_SECONDARY);

    column![
        row![input, Space::new().width(8), done_btn].align_y(Alignment::Center),
        Space::new().height(6),
        label,
    ]
    .width(Fill)
    .into()
}

const CHECK_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
    <polyline points="20 6 9 17 4 12"/>
</svg>"#;
