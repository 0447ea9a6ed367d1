use std::sync::Arc;

use glossa_dictionary::DictionaryClient;
use glossa_speech::{EspeakSynthesizer, Synthesizer};
use glossa_translator::{GtxTranslator, Translator};
use glossa_types::{AppEvent, TargetLang, WordReport};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_word_input(
    state: Arc<AppState>,
    text: String,
    dictionary: &DictionaryClient,
    translator: Option<&GtxTranslator>,
    synthesizer: Option<&EspeakSynthesizer>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entry = match dictionary.lookup(&text).await {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            app_to_ui_tx.send(AppEvent::NoEntry { word: text }).await?;
            app_to_ui_tx.send(AppEvent::Completed).await?;
            return Ok(());
        }
        Err(e) => {
            // rendered the same as absence, per the lookup contract
            tracing::error!("lookup failed: {e}");
            app_to_ui_tx.send(AppEvent::NoEntry { word: text }).await?;
            app_to_ui_tx.send(AppEvent::Completed).await?;
            return Ok(());
        }
    };

    let meaning = entry.meaning().unwrap_or("No definition found.").to_string();
    let report = WordReport {
        word: entry.word.clone(),
        part_of_speech: entry.part_of_speech().unwrap_or("Unknown").to_string(),
        meaning: meaning.clone(),
        examples: entry.examples().iter().map(|s| s.to_string()).collect(),
        synonyms: entry.synonyms(),
        antonyms: entry.antonyms(),
    };

    app_to_ui_tx.send(AppEvent::ShowReport(report)).await?;

    // Translation of the canonical meaning
    let mut translated = None;
    if let Some(t) = translator {
        let to_lang = {
            let config = state.config.read().await;
            config.translator.to_lang
        };

        translated = handle_translation(t, &meaning, to_lang, app_to_ui_tx).await?;
    }

    // Spoken output, original and translated
    if let Some(synth) = synthesizer {
        handle_speech(synth, &meaning, translated.as_deref(), app_to_ui_tx).await?;
    }

    app_to_ui_tx.send(AppEvent::Completed).await?;
    Ok(())
}

/// Translate the meaning, reporting success and failure to the renderer
pub async fn handle_translation<T: Translator>(
    translator: &T,
    meaning: &str,
    to_lang: TargetLang,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<String>> {
    match translator.translate(meaning, to_lang).await {
        Ok(translation) => {
            app_to_ui_tx
                .send(AppEvent::ShowTranslation {
                    text: translation.text.clone(),
                    to_lang,
                })
                .await?;
            Ok(Some(translation.text))
        }
        Err(e) => {
            tracing::warn!("Translation failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::CaptureStatus {
                    status: format!("Translation failed: {e}"),
                    listening: false,
                })
                .await?;
            Ok(None)
        }
    }
}

/// Speak the meaning (and its translation), reporting failures to the renderer
pub async fn handle_speech<S: Synthesizer>(
    synthesizer: &S,
    meaning: &str,
    translated: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut texts = vec![meaning];
    if let Some(translated) = translated {
        texts.push(translated);
    }

    for text in texts {
        if let Err(e) = synthesizer.speak(text).await {
            tracing::error!("Synthesis failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::CaptureStatus {
                    status: format!("Speech synthesis failed: {e}"),
                    listening: false,
                })
                .await?;
        }
    }

    Ok(())
}
