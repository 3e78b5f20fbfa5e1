use std::sync::Arc;
use tracing::{error, info};

use crate::error::Result;
use crate::models::Decision;
use crate::services::{AnswerSynthesizer, LlmClient, NeedsSearchClassifier, SearchProvider};
use crate::utils::fallback_answer;

pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Classify, optionally search, then synthesize. Holds no per-call state.
#[derive(Clone)]
pub struct AnswerService {
    classifier: NeedsSearchClassifier,
    synthesizer: AnswerSynthesizer,
    search_provider: Arc<dyn SearchProvider>,
    num_results: usize,
}

impl AnswerService {
    pub fn new(llm: Arc<dyn LlmClient>, search_provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            classifier: NeedsSearchClassifier::new(llm.clone()),
            synthesizer: AnswerSynthesizer::new(llm),
            search_provider,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Never fails: any error from classification or synthesis becomes the apology fallback.
    pub async fn answer(&self, message: &str) -> String {
        match self.try_answer(message).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Error answering message: {}", e);
                fallback_answer(message)
            }
        }
    }

    async fn try_answer(&self, message: &str) -> Result<String> {
        let decision = self.classifier.classify(message).await?;

        let results = match decision {
            Decision::Search => {
                info!("Searching the web for: {}", message);
                let results = self.search_provider.search(message, self.num_results).await;
                info!("Found {} search results", results.len());
                results
            }
            Decision::NoSearch => Vec::new(),
        };

        let answer = self.synthesizer.synthesize(message, &results).await?;
        Ok(answer.trim().to_string())
    }
}
