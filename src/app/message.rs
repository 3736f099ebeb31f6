//! Application messages

use std::sync::Arc;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Timer ============
    /// Start or stop the countdown
    StartStop,
    /// Reset to the configured duration
    Reset,
    /// One-second countdown tick
    Tick,

    // ============ Editing ============
    /// Enter or leave edit mode
    SetEditable(bool),
    /// Raw text typed into the minutes field
    MinutesInput(String),

    // ============ Alert ============
    /// Alert clip download finished
    AlertFetched(Result<Arc<[u8]>, String>),
    /// The fixed alert playback window elapsed
    AlertElapsed,
}
