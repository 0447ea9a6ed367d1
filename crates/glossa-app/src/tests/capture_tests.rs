use std::sync::{Arc, Mutex};
use std::time::Duration;

use glossa_speech::{AudioClip, CaptureSession, RecognizeError, Recognizer};
use glossa_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::io::drive_session;

/// Records the clip size of every transcription attempt
struct CountingRecognizer {
    seen: Arc<Mutex<Vec<usize>>>,
}

#[async_trait::async_trait]
impl Recognizer for CountingRecognizer {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, RecognizeError> {
        self.seen.lock().unwrap().push(clip.len());
        Ok(format!("heard {} samples", clip.len()))
    }
}

struct UnavailableRecognizer;

#[async_trait::async_trait]
impl Recognizer for UnavailableRecognizer {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<String, RecognizeError> {
        Err(RecognizeError::ApiError("HTTP 503".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn source_no_longer_than_budget_is_fed_in_full() {
    // 1 second of 16 kHz audio against a 1 second budget: the watcher ticks
    // at frame cadence, so no frame may be dropped and the final transcript
    // must cover the whole utterance, not just its head
    let samples = vec![0i16; 16_000];
    let mut session = CaptureSession::new(Duration::from_secs(1), 16_000);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recognizer = CountingRecognizer { seen: seen.clone() };
    let (status_tx, _status_rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();

    let transcript = drive_session(
        &mut session,
        &samples,
        16_000,
        100,
        &recognizer,
        &cancel,
        &status_tx,
    )
    .await
    .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen.last().unwrap(),
        16_000,
        "tail of the utterance was dropped"
    );
    assert_eq!(session.clip().len(), 16_000);
    assert_eq!(transcript.as_deref(), Some("heard 16000 samples"));
    assert!(session.is_stopped());
}

#[tokio::test(start_paused = true)]
async fn expired_session_produces_no_transcript() {
    // zero budget: expired before the first frame can be fed
    let samples = vec![0i16; 1_600];
    let mut session = CaptureSession::new(Duration::ZERO, 16_000);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recognizer = CountingRecognizer { seen: seen.clone() };
    let (status_tx, _status_rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();

    let transcript = drive_session(
        &mut session,
        &samples,
        16_000,
        100,
        &recognizer,
        &cancel,
        &status_tx,
    )
    .await
    .unwrap();

    assert_eq!(transcript, None);
    assert!(seen.lock().unwrap().is_empty());
    assert!(session.clip().is_empty());
    assert!(session.is_stopped());
}

#[tokio::test(start_paused = true)]
async fn recognizer_failures_surface_as_status_lines() {
    // single frame source; the service is down for the whole run
    let samples = vec![0i16; 1_600];
    let mut session = CaptureSession::new(Duration::from_secs(60), 16_000);
    let (status_tx, status_rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();

    let transcript = drive_session(
        &mut session,
        &samples,
        16_000,
        100,
        &UnavailableRecognizer,
        &cancel,
        &status_tx,
    )
    .await
    .unwrap();

    assert_eq!(transcript, None);

    let event = status_rx.recv().await.expect("recv failed");
    match event {
        AppEvent::CaptureStatus { status, listening } => {
            assert!(
                status.starts_with("Could not request results from speech recognition service"),
                "unexpected status: {status}"
            );
            assert!(listening);
        }
        other => panic!("Wrong event type: {other:?}"),
    }
}
