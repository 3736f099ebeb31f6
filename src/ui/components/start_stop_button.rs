//! Start/stop toggle button

use iced::widget::{button, text};
use iced::{Element, Padding, Theme};

use crate::app::Message;
use crate::ui::theme;

/// Toggle button whose label and style follow the running state
///
/// Interaction is disabled while the duration is being edited.
pub fn view<'a>(is_running: bool, is_editable: bool) -> Element<'a, Message> {
    let label = if is_running { "Stop" } else { "Start" };
    let style: fn(&Theme, button::Status) -> button::Style = if is_running {
        theme::stop_button
    } else {
        theme::start_button
    };

    button(text(label).size(14).color(theme::TEXT_PRIMARY))
        .padding(Padding::new(10.0).left(24.0).right(24.0))
        .style(style)
        .on_press_maybe((!is_editable).then_some(Message::StartStop))
        .into()
}
