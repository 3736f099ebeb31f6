// src/app/state.rs
//! Application state definitions

use std::sync::Arc;

use crate::audio::AlertPlayer;

/// Default configured duration in minutes
pub const DEFAULT_MINUTES: u32 = 25;

/// Allowed range for the configured duration
pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 60;

/// Main application state
pub struct App {
    /// Core infrastructure (alert playback)
    pub core: CoreState,
    /// Countdown state machine
    pub timer: TimerState,
    /// UI state (edit buffer)
    pub ui: UiState,
}

/// Core Infrastructure & Services
///
/// Owns the ephemeral alert resources alongside the declared timer state:
/// the output sink lives inside `alert`, the downloaded clip is cached in
/// `alert_clip`, and `alert_requested` marks a completion that is waiting
/// for the clip to arrive. At most one alert can ring at a time.
pub struct CoreState {
    pub alert: Option<AlertPlayer>,
    pub alert_clip: Option<Arc<[u8]>>,
    pub alert_requested: bool,
}

impl CoreState {
    /// Initialize core services
    pub fn new() -> Self {
        let alert = match AlertPlayer::new() {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::error!("Failed to open audio output: {:#}", e);
                None
            }
        };

        Self {
            alert,
            alert_clip: None,
            alert_requested: false,
        }
    }

    /// Cancel all alert side effects
    ///
    /// Clears a pending playback request and silences any ringing alert.
    /// Safe to call with nothing active, so every state-resetting
    /// transition can invoke it unconditionally.
    pub fn cancel_alert(&mut self) {
        self.alert_requested = false;
        if let Some(alert) = &mut self.alert {
            alert.stop();
        }
    }
}

/// Outcome of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Decremented by one second, still counting
    Counting,
    /// Reached zero: state was reset and the alert should ring
    Completed,
    /// Tick arrived while not running and was dropped
    Ignored,
}

/// Countdown state machine
///
/// Mutated only by the root update handlers; the view components receive
/// plain values derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Configured duration in minutes, always within [1, 60]
    pub initial_minutes: u32,
    /// True exactly while the tick subscription is active
    pub is_running: bool,
    /// True while the duration is being edited
    pub is_editable: bool,
    /// Remaining time in seconds
    pub remaining_secs: u32,
}

impl TimerState {
    /// Fresh state for the default 25-minute duration
    pub fn new() -> Self {
        Self::with_minutes(DEFAULT_MINUTES)
    }

    fn with_minutes(minutes: u32) -> Self {
        Self {
            initial_minutes: minutes,
            is_running: false,
            is_editable: false,
            remaining_secs: minutes * 60,
        }
    }

    /// Replace the state wholesale with fresh values derived from the
    /// currently configured duration; both flags become false.
    pub fn reset(&mut self) {
        *self = Self::with_minutes(self.initial_minutes);
    }

    /// Change the configured duration, clamped to [1, 60]
    ///
    /// Patches both the configured minutes and the remaining time; the
    /// running and editable flags are left untouched.
    pub fn set_minutes(&mut self, minutes: u32) {
        let minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        self.initial_minutes = minutes;
        self.remaining_secs = minutes * 60;
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> Tick {
        if !self.is_running {
            return Tick::Ignored;
        }

        let remaining = self.remaining_secs.saturating_sub(1);
        if remaining == 0 {
            self.reset();
            Tick::Completed
        } else {
            self.remaining_secs = remaining;
            Tick::Counting
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI state
pub struct UiState {
    /// Raw text of the minutes field while editing, seeded from the
    /// configured duration when edit mode is entered
    pub minutes_input: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            minutes_input: String::new(),
        }
    }
}
