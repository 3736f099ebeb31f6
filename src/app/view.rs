// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

impl App {
    /// Build the single timer card
    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Slicing Tomatoes")
            .size(22)
            .color(theme::TEXT_PRIMARY);

        // Screen area: the countdown readout or the minutes editor
        let screen: Element<'_, Message> = if self.timer.is_editable {
            components::edit_timer::view(&self.ui.minutes_input)
        } else {
            components::display_timer::view(self.timer.remaining_secs, self.timer.is_running)
        };

        let screen = container(screen)
            .width(Fill)
            .padding(16)
            .style(theme::screen);

        // Action row, always present regardless of edit mode
        let actions = row![
            components::reset_button::view(),
            Space::new().width(Fill),
            components::start_stop_button::view(self.timer.is_running, self.timer.is_editable),
        ]
        .align_y(Alignment::Center);

        let card = container(
            column![
                container(title).width(Fill).align_x(Alignment::Center),
                Space::new().height(20),
                screen,
                Space::new().height(24),
                actions,
            ]
            .width(Fill),
        )
        .padding(24)
        .style(theme::card);

        container(card)
            .width(Fill)
            .height(Fill)
            .padding(24)
            .align_y(Alignment::Center)
            .style(theme::page)
            .into()
    }
}
