// src/app/update/timer.rs
//! Countdown and edit-mode message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, Tick};

impl App {
    /// Handle countdown and edit-mode messages
    pub fn handle_timer(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::StartStop => {
                // The button is disabled while editing; refuse the
                // transition as well in case a stray message slips through
                if self.timer.is_editable {
                    return Some(Task::none());
                }

                self.timer.is_running = !self.timer.is_running;
                self.core.cancel_alert();

                if self.timer.is_running {
                    tracing::debug!(
                        "Countdown started at {} minutes",
                        self.timer.initial_minutes
                    );
                } else {
                    tracing::debug!(
                        "Countdown stopped with {}s remaining",
                        self.timer.remaining_secs
                    );
                }
                Some(Task::none())
            }

            Message::Reset => {
                self.core.cancel_alert();
                self.timer.reset();
                Some(Task::none())
            }

            Message::Tick => match self.timer.tick() {
                Tick::Completed => {
                    tracing::info!("Countdown completed");
                    Some(self.start_alert())
                }
                Tick::Counting | Tick::Ignored => Some(Task::none()),
            },

            Message::SetEditable(editable) => {
                // The affordance is hidden while running; enforce the
                // invariant at the transition level too
                if *editable && self.timer.is_running {
                    return Some(Task::none());
                }

                self.timer.is_editable = *editable;
                if *editable {
                    self.ui.minutes_input = self.timer.initial_minutes.to_string();
                }
                Some(Task::none())
            }

            Message::MinutesInput(raw) => {
                self.ui.minutes_input = raw.clone();
                if let Ok(minutes) = raw.trim().parse::<u32>() {
                    self.timer.set_minutes(minutes);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::{App, CoreState, TimerState, UiState};
    use crate::app::Message;

    /// App without an audio device, as on a headless test machine
    fn test_app() -> App {
        App {
            core: CoreState {
                alert: None,
                alert_clip: None,
                alert_requested: false,
            },
            timer: TimerState::new(),
            ui: UiState::new(),
        }
    }

    #[test]
    fn start_stop_round_trip_preserves_remaining_time() {
        let mut app = test_app();

        let _ = app.update(Message::StartStop);
        assert!(app.timer.is_running);

        let _ = app.update(Message::Tick);
        let _ = app.update(Message::Tick);
        let at_stop = app.timer.remaining_secs;

        let _ = app.update(Message::StartStop);
        assert!(!app.timer.is_running);

        // A tick queued before the subscription went away must be dropped
        let _ = app.update(Message::Tick);
        assert_eq!(app.timer.remaining_secs, at_stop);
    }

    #[test]
    fn reset_after_stop_is_idempotent() {
        let mut app = test_app();

        let _ = app.update(Message::StartStop);
        let _ = app.update(Message::Tick);
        let _ = app.update(Message::StartStop);
        let _ = app.update(Message::Reset);
        let _ = app.update(Message::Reset);

        assert!(!app.timer.is_running);
        assert!(!app.core.alert_requested);
        assert_eq!(app.timer.remaining_secs, 25 * 60);
    }

    #[test]
    fn one_minute_countdown_completes_after_sixty_ticks() {
        let mut app = test_app();

        let _ = app.update(Message::MinutesInput("1".into()));
        assert_eq!(app.timer.initial_minutes, 1);
        assert_eq!(app.timer.remaining_secs, 60);

        let _ = app.update(Message::StartStop);
        for _ in 0..59 {
            let _ = app.update(Message::Tick);
        }
        assert!(app.timer.is_running);
        assert_eq!(app.timer.remaining_secs, 1);
        assert!(!app.core.alert_requested, "alert must not ring early");

        let _ = app.update(Message::Tick);

        assert_eq!(app.timer.initial_minutes, 1);
        assert_eq!(app.timer.remaining_secs, 60);
        assert!(!app.timer.is_running);
        assert!(app.core.alert_requested, "completion requests the alert");

        // No further ticks arrive once stopped, and a stray one is inert
        let _ = app.update(Message::Tick);
        assert_eq!(app.timer.remaining_secs, 60);
    }

    #[test]
    fn edit_mode_is_refused_while_running() {
        let mut app = test_app();

        let _ = app.update(Message::StartStop);
        let _ = app.update(Message::SetEditable(true));

        assert!(!app.timer.is_editable);
    }

    #[test]
    fn entering_edit_mode_seeds_the_input_buffer() {
        let mut app = test_app();

        let _ = app.update(Message::SetEditable(true));
        assert!(app.timer.is_editable);
        assert_eq!(app.ui.minutes_input, "25");

        let _ = app.update(Message::SetEditable(false));
        assert!(!app.timer.is_editable);
    }

    #[test]
    fn start_stop_is_inert_while_editing() {
        let mut app = test_app();

        let _ = app.update(Message::SetEditable(true));
        let _ = app.update(Message::StartStop);

        assert!(!app.timer.is_running);
    }

    #[test]
    fn minutes_input_clamps_and_ignores_garbage() {
        let mut app = test_app();

        let _ = app.update(Message::MinutesInput("70".into()));
        assert_eq!(app.timer.initial_minutes, 60);
        assert_eq!(app.ui.minutes_input, "70", "raw text stays visible");

        let _ = app.update(Message::MinutesInput("0".into()));
        assert_eq!(app.timer.initial_minutes, 1);

        let before = app.timer.clone();
        let _ = app.update(Message::MinutesInput("abc".into()));
        assert_eq!(app.timer, before, "non-numeric input is a no-op");
        assert_eq!(app.ui.minutes_input, "abc");
    }

    #[test]
    fn reset_uses_the_edited_duration() {
        let mut app = test_app();

        let _ = app.update(Message::MinutesInput("5".into()));
        let _ = app.update(Message::StartStop);
        let _ = app.update(Message::Tick);
        let _ = app.update(Message::Reset);

        assert_eq!(app.timer.initial_minutes, 5);
        assert_eq!(app.timer.remaining_secs, 5 * 60);
        assert!(!app.timer.is_running);
    }
}
