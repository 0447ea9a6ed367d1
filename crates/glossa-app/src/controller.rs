use std::path::PathBuf;
use std::sync::Arc;

use glossa_types::{AppEvent, TextSource};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::capture_io;
use crate::render::render_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

pub enum RunMode {
    /// One-shot lookup of a typed word
    Lookup { word: String },
    /// Drive a capture session from a PCM source, then look the result up
    Listen { input: PathBuf },
}

/// Tasks spawned for one run. The renderer is kept apart: its normal exit
/// (on `Completed`) is what ends the application.
pub struct TaskSet {
    pub background: JoinSet<anyhow::Result<()>>,
    pub render: JoinHandle<anyhow::Result<()>>,
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, mode: RunMode) -> TaskSet {
        let mut background = JoinSet::new();

        // Event loop
        background.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // Capture watcher (listen mode only)
        if let RunMode::Listen { input } = mode {
            background.spawn(capture_io(
                self.state.clone(),
                input,
                self.cancel_token.child_token(),
                self.channels.ui_to_app.0.clone(),
                self.channels.app_to_ui.0.clone(),
            ));
        }

        let render = tokio::spawn(render_loop(self.channels.app_to_ui.1.clone()));

        TaskSet { background, render }
    }

    /// Feed a typed word into the event loop
    pub async fn submit_word(&self, word: String) -> anyhow::Result<()> {
        self.channels
            .ui_to_app
            .0
            .send(AppEvent::WordInput {
                text: word,
                source: TextSource::Typed,
            })
            .await?;
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
