pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod llm;
pub mod pdf;
pub mod prompt;
pub mod storage;

use std::sync::Arc;
use config::Config;
use llm::{ChatModel, OpenAiChat};
use storage::{MemStore, RecordStore};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn ChatModel>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Wires the OpenAI-compatible client and an in-memory record store.
    pub fn from_config(config: Config) -> Self {
        let model = OpenAiChat::new(
            config.openai_api_key.clone(),
            &config.openai_base_url,
            config.model.clone(),
        );

        AppState {
            config: Arc::new(config),
            model: Arc::new(model),
            store: Arc::new(MemStore::new()),
        }
    }
}
