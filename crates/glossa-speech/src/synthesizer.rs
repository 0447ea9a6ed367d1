use tokio::process::Command;

/// Text-to-speech provider interface
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Speak text through the local engine, waiting for playback to finish
    async fn speak(&self, text: &str) -> Result<(), SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("failed to run synthesizer: {0}")]
    Io(#[from] std::io::Error),

    #[error("synthesizer exited with status {0}")]
    EngineFailed(std::process::ExitStatus),
}

/// Local synthesis through the espeak-ng binary.
/// No voice or rate knobs are exposed.
#[derive(Clone)]
pub struct EspeakSynthesizer {
    command: String,
}

impl EspeakSynthesizer {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

#[async_trait::async_trait]
impl Synthesizer for EspeakSynthesizer {
    async fn speak(&self, text: &str) -> Result<(), SynthesisError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        tracing::debug!("speaking {} chars via {}", text.len(), self.command);

        let status = Command::new(&self.command).arg(text).status().await?;

        if !status.success() {
            return Err(SynthesisError::EngineFailed(status));
        }

        Ok(())
    }
}
