use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use glossa_config::Config;
use glossa_types::TargetLang;
use tokio::signal;

mod controller;
mod events;
mod io;
mod render;
mod state;

#[cfg(test)]
mod tests;

use self::controller::{AppController, RunMode};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "glossa", about = "Multilingual dictionary assistant")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Look up a typed English word
    Lookup {
        word: String,
        /// Translate the meaning (es, fr, de, zh-cn, hi)
        #[arg(long)]
        translate: Option<TargetLang>,
        /// Speak the meaning through the local synthesizer
        #[arg(long)]
        speak: bool,
    },
    /// Transcribe a spoken word from a raw s16le PCM source, then look it up
    Listen {
        /// Path to the PCM file
        input: PathBuf,
        #[arg(long)]
        sample_rate: Option<u32>,
        /// Capture session duration in seconds
        #[arg(long)]
        duration: Option<u64>,
        /// Translate the meaning (es, fr, de, zh-cn, hi)
        #[arg(long)]
        translate: Option<TargetLang>,
        /// Speak the meaning through the local synthesizer
        #[arg(long)]
        speak: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::new();

    let mode = match cli.command {
        CliCommand::Lookup {
            word,
            translate,
            speak,
        } => {
            apply_overrides(&mut config, translate, speak);
            RunMode::Lookup { word }
        }
        CliCommand::Listen {
            input,
            sample_rate,
            duration,
            translate,
            speak,
        } => {
            apply_overrides(&mut config, translate, speak);
            if let Some(rate) = sample_rate {
                config.capture.sample_rate = rate;
            }
            if let Some(secs) = duration {
                config.capture.duration_secs = secs;
            }
            RunMode::Listen { input }
        }
    };

    let state = Arc::new(AppState::new(config));
    run(state, mode).await
}

fn apply_overrides(config: &mut Config, translate: Option<TargetLang>, speak: bool) {
    if let Some(lang) = translate {
        config.translator.enabled = true;
        config.translator.to_lang = lang;
    }
    if speak {
        config.speech.speak_on_lookup = true;
    }
}

async fn run(state: Arc<AppState>, mode: RunMode) -> anyhow::Result<()> {
    let controller = AppController::new(state);

    let word = match &mode {
        RunMode::Lookup { word } => Some(word.clone()),
        RunMode::Listen { .. } => None,
    };

    let mut tasks = controller.spawn_tasks(mode);

    if let Some(word) = word {
        controller.submit_word(word).await?;
    }

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            result = &mut tasks.render => {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("renderer exited: {e}"),
                    Err(e) => tracing::error!("renderer panicked: {e}"),
                }
                break;
            }
            Some(result) = tasks.background.join_next() => {
                match result {
                    // normal completion (e.g. the capture watcher ran dry)
                    Ok(Ok(())) => continue,
                    Ok(Err(e)) => {
                        tracing::error!("task exited: {e}");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("task panicked: {e}");
                        break;
                    }
                }
            }
        }
    }

    controller.shutdown();
    tasks.background.shutdown().await;
    tasks.render.abort();
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stderr keeps stdout clean for the renderer
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();
}
