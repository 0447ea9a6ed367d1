use glossa_types::{AppEvent, WordReport};
use kanal::AsyncReceiver;

/// Print app events to stdout until the run completes
pub async fn render_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;

        match event {
            AppEvent::ShowReport(report) => print_report(&report),
            AppEvent::NoEntry { word } => {
                println!("No data found for the given word: {word}");
            }
            AppEvent::ShowTranslation { text, to_lang } => {
                println!("Translated Meaning ({to_lang}): {text}");
            }
            AppEvent::CaptureStatus { status, .. } => {
                println!("{status}");
            }
            AppEvent::Completed => break,
            AppEvent::WordInput { .. } => {
                // app-bound, not ours
            }
        }
    }

    Ok(())
}

fn print_report(report: &WordReport) {
    println!("Word: {}", report.word);
    println!("Part of Speech: {}", report.part_of_speech);
    println!("Meaning: {}", report.meaning);

    if !report.examples.is_empty() {
        println!("Examples:");
        for example in &report.examples {
            println!("- {example}");
        }
    }

    if !report.synonyms.is_empty() {
        println!("Synonyms:");
        println!("{}", report.synonyms.join(", "));
    }

    if !report.antonyms.is_empty() {
        println!("Antonyms:");
        println!("{}", report.antonyms.join(", "));
    }
}
