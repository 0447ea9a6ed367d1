use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use glossa_speech::{AudioFrame, CaptureSession, HttpRecognizer, RecognizeError, Recognizer};
use glossa_types::{AppEvent, TextSource};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Drive a capture session from a raw s16le PCM source.
///
/// The timer owns the session lifecycle: it ticks once per frame interval,
/// checks expiry first, feeds the due frame, and re-runs recognition over
/// everything buffered so far, overwriting the session transcript. The
/// per-frame code never polices the timeout itself.
pub async fn capture_io(
    state: Arc<AppState>,
    input: PathBuf,
    cancel: CancellationToken,
    word_tx: AsyncSender<AppEvent>,
    status_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (duration_secs, sample_rate, frame_ms, stt_url, language_hint) = {
        let config = state.config.read().await;
        (
            config.capture.duration_secs,
            config.capture.sample_rate,
            config.capture.frame_ms,
            config.speech.stt_url.clone(),
            config.speech.language_hint.clone(),
        )
    };

    let pcm = tokio::fs::read(&input).await?;
    let samples: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();

    let mut session = CaptureSession::new(Duration::from_secs(duration_secs), sample_rate);
    let recognizer =
        HttpRecognizer::new(stt_url, Some(language_hint)).with_session(session.id());

    tracing::info!(
        "capture session {} started ({} samples, {}s budget)",
        session.id(),
        samples.len(),
        duration_secs
    );
    status_tx
        .send(AppEvent::CaptureStatus {
            status: "Listening...".to_string(),
            listening: true,
        })
        .await?;

    let transcript = drive_session(
        &mut session,
        &samples,
        sample_rate,
        frame_ms,
        &recognizer,
        &cancel,
        &status_tx,
    )
    .await?;

    match transcript {
        Some(word) => {
            word_tx
                .send(AppEvent::WordInput {
                    text: word,
                    source: TextSource::Voice,
                })
                .await?;
        }
        None => {
            status_tx
                .send(AppEvent::CaptureStatus {
                    status: "No transcript captured".to_string(),
                    listening: false,
                })
                .await?;
            status_tx.send(AppEvent::Completed).await?;
        }
    }

    Ok(())
}

/// Feed the source into the session at frame cadence until the source runs
/// dry, the session expires, or the run is cancelled.
///
/// The timer ticks once per `frame_ms`, so frame `k` is fed at `k * frame_ms`
/// and a source no longer than the session budget is always buffered in full
/// before the expiry check can fire (missed ticks burst-catch-up).
pub async fn drive_session<R: Recognizer>(
    session: &mut CaptureSession,
    samples: &[i16],
    sample_rate: u32,
    frame_ms: u64,
    recognizer: &R,
    cancel: &CancellationToken,
    status_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<String>> {
    let frame_len = ((sample_rate as u64 * frame_ms / 1000) as usize).max(1);
    let mut frames = samples.chunks(frame_len);

    let mut interval = tokio::time::interval(Duration::from_millis(frame_ms));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("capture cancelled");
                session.stop();
                break;
            }
            _ = interval.tick() => {
                // the timer, not the frame path, decides when the session ends
                if session.is_expired() {
                    tracing::info!("capture session expired after {:?}", session.elapsed());
                    session.stop();
                    break;
                }

                let mut drained = false;
                match frames.next() {
                    Some(chunk) => {
                        let frame = AudioFrame::mono(chunk.to_vec(), sample_rate);
                        match session.push_frame(&frame) {
                            Ok(buffered) => {
                                tracing::trace!("buffered {} mono samples", buffered);
                            }
                            Err(e) => {
                                tracing::warn!("frame rejected: {e}");
                                drained = true;
                            }
                        }
                    }
                    None => {
                        tracing::debug!("capture source exhausted");
                        drained = true;
                    }
                }

                if !session.clip().is_empty() {
                    let result = recognizer.transcribe(session.clip()).await;
                    match result {
                        Ok(text) => {
                            tracing::debug!("transcript so far: {text}");
                            session.set_transcript(text);
                        }
                        Err(RecognizeError::NoSpeech) => {
                            status_tx
                                .send(AppEvent::CaptureStatus {
                                    status: "Speech recognition could not understand audio"
                                        .to_string(),
                                    listening: true,
                                })
                                .await?;
                        }
                        Err(e) => {
                            status_tx
                                .send(AppEvent::CaptureStatus {
                                    status: format!(
                                        "Could not request results from speech recognition service; {e}"
                                    ),
                                    listening: true,
                                })
                                .await?;
                        }
                    }
                }

                if drained {
                    session.stop();
                    break;
                }
            }
        }
    }

    Ok(session.take_transcript())
}
