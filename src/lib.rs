pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use config::Config;
use services::{AnswerService, AnthropicClient, SerperSearchProvider};

#[derive(Clone)]
pub struct AppState {
    pub answer_service: AnswerService,
    pub search_enabled: bool,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    /// Wires the production LLM and search clients from `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let llm = Arc::new(AnthropicClient::new(&config.llm)?);
        let search = SerperSearchProvider::new(&config.search)?;
        let search_enabled = search.enabled();
        let answer_service = AnswerService::new(llm, Arc::new(search))
            .with_num_results(config.search.num_results);

        Ok(Self {
            answer_service,
            search_enabled,
            config,
            start_time: Instant::now(),
        })
    }
}
