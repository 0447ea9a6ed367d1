use std::sync::Arc;

use glossa_dictionary::DictionaryClient;
use glossa_speech::EspeakSynthesizer;
use glossa_translator::GtxTranslator;
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod word_input;

use word_input::handle_word_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Providers are built once from the startup config
    let (dictionary, translator, synthesizer) = {
        let config = state.config.read().await;

        let dictionary = DictionaryClient::new(config.dictionary.api_url.clone());

        let translator = if config.translator.enabled {
            Some(GtxTranslator::new(config.translator.api_url.clone()))
        } else {
            None
        };

        let synthesizer = if config.speech.speak_on_lookup {
            Some(EspeakSynthesizer::new(config.speech.tts_command.clone()))
        } else {
            None
        };

        (dictionary, translator, synthesizer)
    };

    tracing::debug!("event loop started, waiting for input");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_events(
            state.clone(),
            &dictionary,
            translator.as_ref(),
            synthesizer.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    dictionary: &DictionaryClient,
    translator: Option<&GtxTranslator>,
    synthesizer: Option<&EspeakSynthesizer>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::WordInput { text, source } => {
            tracing::info!("processing {:?} input: {}", source, text);
            handle_word_input(state, text, dictionary, translator, synthesizer, app_to_ui_tx)
                .await?;
        }
        AppEvent::ShowReport(_)
        | AppEvent::NoEntry { .. }
        | AppEvent::ShowTranslation { .. }
        | AppEvent::CaptureStatus { .. }
        | AppEvent::Completed => {
            // renderer-bound, nothing to do here
        }
    }

    Ok(())
}
