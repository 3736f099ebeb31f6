// src/app/update/alert.rs
//! Alert playback orchestration and handlers

use std::sync::Arc;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::audio::{self, ALERT_WINDOW};

impl App {
    /// Ring the completion alert
    ///
    /// Replaces anything already ringing. Plays from the cached clip when
    /// available; otherwise requests a download and defers playback until
    /// `AlertFetched` arrives.
    pub(in crate::app) fn start_alert(&mut self) -> Task<Message> {
        self.core.cancel_alert();

        match self.core.alert_clip.clone() {
            Some(clip) => self.play_alert(clip),
            None => {
                self.core.alert_requested = true;
                Task::perform(audio::fetch_alert_clip(), |result| {
                    Message::AlertFetched(result.map_err(|e| e.to_string()))
                })
            }
        }
    }

    /// Start looping playback and schedule the fixed stop window
    fn play_alert(&mut self, clip: Arc<[u8]>) -> Task<Message> {
        let Some(alert) = &mut self.core.alert else {
            return Task::none();
        };

        if let Err(e) = alert.play(clip) {
            tracing::warn!("Failed to play alert clip: {:#}", e);
            return Task::none();
        }

        // The delayed stop may race a manual stop or reset; both funnel
        // into the same idempotent cancel, so the order does not matter
        Task::perform(tokio::time::sleep(ALERT_WINDOW), |_| Message::AlertElapsed)
    }

    /// Handle alert-related messages
    pub fn handle_alert(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AlertFetched(Ok(clip)) => {
                self.core.alert_clip = Some(clip.clone());
                if self.core.alert_requested {
                    self.core.alert_requested = false;
                    let clip = clip.clone();
                    return Some(self.play_alert(clip));
                }
                Some(Task::none())
            }

            Message::AlertFetched(Err(e)) => {
                tracing::warn!("Failed to fetch alert clip: {}", e);
                self.core.alert_requested = false;
                Some(Task::none())
            }

            Message::AlertElapsed => {
                self.core.cancel_alert();
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app::state::{App, CoreState, TimerState, UiState};
    use crate::app::Message;

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

    fn clip() -> Arc<[u8]> {
        Arc::from(&b"not really audio"[..])
    }

    #[test]
    fn fetched_clip_is_cached() {
        let mut app = test_app();

        let _ = app.update(Message::AlertFetched(Ok(clip())));

        assert!(app.core.alert_clip.is_some());
        assert!(!app.core.alert_requested);
    }

    #[test]
    fn pending_request_is_consumed_by_the_fetch_result() {
        let mut app = test_app();
        app.core.alert_requested = true;

        let _ = app.update(Message::AlertFetched(Ok(clip())));

        assert!(
            !app.core.alert_requested,
            "a late clip must ring at most once"
        );
    }

    #[test]
    fn fetch_failure_drops_the_request() {
        let mut app = test_app();
        app.core.alert_requested = true;

        let _ = app.update(Message::AlertFetched(Err("HTTP 404".into())));

        assert!(!app.core.alert_requested);
        assert!(app.core.alert_clip.is_none());
    }

    #[test]
    fn elapsed_stop_is_idempotent() {
        let mut app = test_app();

        // No alert is ringing; the delayed stop still fires harmlessly,
        // twice in a row for good measure
        let _ = app.update(Message::AlertElapsed);
        let _ = app.update(Message::AlertElapsed);

        assert!(!app.core.alert_requested);
    }

    #[test]
    fn reset_cancels_a_pending_alert_request() {
        let mut app = test_app();
        app.core.alert_requested = true;

        let _ = app.update(Message::Reset);
        let _ = app.update(Message::AlertFetched(Ok(clip())));

        assert!(
            !app.core.alert_requested,
            "reset must withdraw interest in the clip"
        );
    }
}
