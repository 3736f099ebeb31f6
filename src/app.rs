//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, TimerState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            core: CoreState::new(),
            timer: TimerState::new(),
            ui: UiState::new(),
        };

        // Fetch the alert clip up front so the first completion can ring
        // without waiting on the network
        let init_task = Task::perform(crate::audio::fetch_alert_clip(), |result| {
            Message::AlertFetched(result.map_err(|e| e.to_string()))
        });

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Dynamic window title showing the remaining time while counting down
    pub fn title(&self) -> String {
        if self.timer.is_running {
            format!(
                "{} - Tomato",
                crate::utils::format_remaining(self.timer.remaining_secs)
            )
        } else {
            "Tomato".to_string()
        }
    }

    /// Subscriptions for the one-second countdown tick
    ///
    /// The tick source exists exactly while the countdown is running;
    /// stopping the timer cancels it by dropping the subscription.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        if subscription_logic::needs_tick_subscription(self.timer.is_running) {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_tick_subscription(is_running: bool) -> bool {
        is_running
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn tick_subscription_active_while_running() {
        assert!(
            needs_tick_subscription(true),
            "Tick subscription must be active while the countdown runs"
        );
    }

    #[test]
    fn no_tick_subscription_while_idle() {
        assert!(
            !needs_tick_subscription(false),
            "Idle timer must not keep a tick source alive"
        );
    }
}
