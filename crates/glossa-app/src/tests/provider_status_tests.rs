use std::time::Duration;

use glossa_speech::{SynthesisError, Synthesizer};
use glossa_translator::{
    GtxTranslator, ProviderMetadata, TranslateError, Translation, Translator,
};
use glossa_types::{AppEvent, TargetLang};
use tokio::time::timeout;

use crate::events::word_input::{handle_speech, handle_translation};

struct FailingTranslator;

#[async_trait::async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _to: TargetLang) -> Result<Translation, TranslateError> {
        Err(TranslateError::ApiError("HTTP 500".to_string()))
    }

    fn supported_targets(&self) -> Vec<TargetLang> {
        TargetLang::ALL.to_vec()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "failing".to_string(),
            requires_api_key: false,
        }
    }
}

struct BrokenSynthesizer;

#[async_trait::async_trait]
impl Synthesizer for BrokenSynthesizer {
    async fn speak(&self, _text: &str) -> Result<(), SynthesisError> {
        Err(SynthesisError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no engine",
        )))
    }
}

#[tokio::test]
async fn translation_failure_reaches_the_renderer() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let translated = handle_translation(&FailingTranslator, "a greeting", TargetLang::Spanish, &tx)
        .await
        .unwrap();
    assert!(translated.is_none());

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("recv failed");
    match event {
        AppEvent::CaptureStatus { status, listening } => {
            assert!(
                status.starts_with("Translation failed"),
                "unexpected status: {status}"
            );
            assert!(!listening);
        }
        other => panic!("Wrong event type: {other:?}"),
    }
}

#[tokio::test]
async fn successful_translation_emits_show_translation() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // empty text short-circuits inside the provider, no network involved
    let translator = GtxTranslator::new("http://invalid.localhost/translate".to_string());
    let translated = handle_translation(&translator, "", TargetLang::French, &tx)
        .await
        .unwrap();
    assert_eq!(translated.as_deref(), Some(""));

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("recv failed");
    assert!(matches!(
        event,
        AppEvent::ShowTranslation {
            to_lang: TargetLang::French,
            ..
        }
    ));
}

#[tokio::test]
async fn synthesis_failure_reaches_the_renderer() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    handle_speech(&BrokenSynthesizer, "a greeting", Some("un saludo"), &tx)
        .await
        .unwrap();

    // one status line per failed utterance: meaning, then translation
    for _ in 0..2 {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timeout")
            .expect("recv failed");
        match event {
            AppEvent::CaptureStatus { status, listening } => {
                assert!(
                    status.starts_with("Speech synthesis failed"),
                    "unexpected status: {status}"
                );
                assert!(!listening);
            }
            other => panic!("Wrong event type: {other:?}"),
        }
    }
}
