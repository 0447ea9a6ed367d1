use std::time::Duration;

use glossa_types::{AppEvent, TargetLang, WordReport};
use tokio::time::timeout;

use crate::render::render_loop;

fn report() -> WordReport {
    WordReport {
        word: "hello".to_string(),
        part_of_speech: "noun".to_string(),
        meaning: "A greeting.".to_string(),
        examples: vec!["he gave a loud hello".to_string()],
        synonyms: vec!["greeting".to_string()],
        antonyms: vec![],
    }
}

#[tokio::test]
async fn render_loop_exits_on_completed() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);
    let renderer = tokio::spawn(render_loop(rx));

    tx.send(AppEvent::ShowReport(report())).await.unwrap();
    tx.send(AppEvent::ShowTranslation {
        text: "Un saludo.".to_string(),
        to_lang: TargetLang::Spanish,
    })
    .await
    .unwrap();
    tx.send(AppEvent::Completed).await.unwrap();

    let result = timeout(Duration::from_secs(2), renderer)
        .await
        .expect("renderer did not exit on Completed")
        .expect("renderer panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn render_loop_keeps_running_through_status_events() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);
    let renderer = tokio::spawn(render_loop(rx));

    tx.send(AppEvent::CaptureStatus {
        status: "Listening...".to_string(),
        listening: true,
    })
    .await
    .unwrap();
    tx.send(AppEvent::NoEntry {
        word: "zzzxqq".to_string(),
    })
    .await
    .unwrap();

    // still alive: it only exits on Completed
    assert!(!renderer.is_finished());

    tx.send(AppEvent::Completed).await.unwrap();
    timeout(Duration::from_secs(2), renderer)
        .await
        .expect("renderer did not exit")
        .expect("renderer panicked")
        .unwrap();
}
