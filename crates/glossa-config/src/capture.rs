use std::env;

use serde::{Deserialize, Serialize};

fn default_duration_secs() -> u64 {
    10
}

fn default_sample_rate() -> u32 {
    16_000
}

fn default_frame_ms() -> u64 {
    100
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct CaptureConfig {
    /// How long a capture session may run before it is stopped
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    /// Sample rate the PCM source is assumed to use
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Size of the frames the watcher slices the source into
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl CaptureConfig {
    pub fn new() -> Self {
        let duration_secs = env::var("CAPTURE_DURATION_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_duration_secs);

        let sample_rate = env::var("CAPTURE_SAMPLE_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sample_rate);

        Self {
            duration_secs,
            sample_rate,
            frame_ms: default_frame_ms(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            sample_rate: default_sample_rate(),
            frame_ms: default_frame_ms(),
        }
    }
}
