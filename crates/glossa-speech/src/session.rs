use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::audio::{AudioClip, AudioFrame};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("capture session exceeded its configured duration")]
    Expired,

    #[error("capture session already stopped")]
    Stopped,

    #[error("frame sample rate {got} does not match session rate {expected}")]
    SampleRateMismatch { expected: u32, got: u32 },
}

/// Owned state of one voice-to-text interaction.
///
/// The session never polices itself from inside a frame callback; the driver
/// holds it and checks `is_expired` from its own timer, stopping the session
/// explicitly. Frames arriving after expiry or `stop` are rejected.
pub struct CaptureSession {
    id: Uuid,
    started_at: Instant,
    duration: Duration,
    clip: AudioClip,
    transcript: Option<String>,
    stopped: bool,
}

impl CaptureSession {
    pub fn new(duration: Duration, sample_rate: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Instant::now(),
            duration,
            clip: AudioClip::new(sample_rate),
            transcript: None,
            stopped: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.duration
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Downmix a frame and append it to the session clip.
    /// Returns the buffered mono sample count.
    pub fn push_frame(&mut self, frame: &AudioFrame) -> Result<usize, CaptureError> {
        if self.stopped {
            return Err(CaptureError::Stopped);
        }
        if self.is_expired() {
            return Err(CaptureError::Expired);
        }
        if frame.sample_rate != self.clip.sample_rate() {
            return Err(CaptureError::SampleRateMismatch {
                expected: self.clip.sample_rate(),
                got: frame.sample_rate,
            });
        }

        self.clip.push_mono(&frame.downmix_to_mono());
        Ok(self.clip.len())
    }

    pub fn clip(&self) -> &AudioClip {
        &self.clip
    }

    /// Latest recognition result; each new one overwrites the last
    pub fn set_transcript(&mut self, text: String) {
        self.transcript = Some(text);
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    pub fn take_transcript(&mut self) -> Option<String> {
        self.transcript.take()
    }
}
