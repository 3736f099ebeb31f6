//! Reset button

use iced::widget::{button, text};
use iced::{Element, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Red action button restoring the configured duration
pub fn view<'a>() -> Element<'a, Message> {
    button(text("Reset").size(14).color(theme::TEXT_PRIMARY))
        .padding(Padding::new(10.0).left(24.0).right(24.0))
        .style(theme::reset_button)
        .on_press(Message::Reset)
        .into()
}
