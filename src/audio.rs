//! Alert playback for countdown completion
//!
//! Plays a short looping chime when the countdown reaches zero. The clip
//! is downloaded once from a fixed URL, cached in memory, and decoded
//! fresh for each playback.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

/// Fixed remote location of the alert clip
pub const ALERT_CLIP_URL: &str = "https://flukeout.github.io/simple-sounds/sounds/ping.mp3";

/// How long the looping alert rings before it is silenced
pub const ALERT_WINDOW: Duration = Duration::from_secs(4);

/// Looping alert playback on the default output device
///
/// At most one alert rings at a time; starting a new one replaces the
/// previous sink. `stop` is safe to call with no alert active.
pub struct AlertPlayer {
    _stream: OutputStream,
    sink: Option<Sink>,
}

impl AlertPlayer {
    /// Open the default audio output
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .context("failed to open default audio output")?;

        Ok(Self {
            _stream: stream,
            sink: None,
        })
    }

    /// Start looping playback of an in-memory clip
    pub fn play(&mut self, clip: Arc<[u8]>) -> Result<()> {
        self.stop();

        let source =
            Decoder::new(Cursor::new(clip)).context("failed to decode alert clip")?;
        let sink = Sink::connect_new(self._stream.mixer());
        sink.append(source.repeat_infinite());
        self.sink = Some(sink);

        Ok(())
    }

    /// Silence and drop the current sink, if any
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Download the alert clip into memory
pub async fn fetch_alert_clip() -> Result<Arc<[u8]>> {
    let response = reqwest::get(ALERT_CLIP_URL)
        .await
        .context("alert clip request failed")?
        .error_for_status()
        .context("alert clip request rejected")?;

    let bytes = response
        .bytes()
        .await
        .context("failed to read alert clip body")?;

    tracing::debug!(bytes = bytes.len(), "alert clip fetched");
    Ok(Arc::from(bytes.as_ref()))
}
