use std::sync::Arc;

use crate::error::Result;
use crate::models::SearchResult;
use crate::services::LlmClient;
use crate::utils::{answer_with_results_prompt, direct_answer_prompt};

#[derive(Clone)]
pub struct AnswerSynthesizer {
    llm: Arc<dyn LlmClient>,
}

impl AnswerSynthesizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Picks the with-results template only when `results` is non-empty.
    pub fn build_prompt(message: &str, results: &[SearchResult]) -> String {
        if results.is_empty() {
            direct_answer_prompt(message)
        } else {
            answer_with_results_prompt(message, results)
        }
    }

    pub async fn synthesize(&self, message: &str, results: &[SearchResult]) -> Result<String> {
        let prompt = Self::build_prompt(message, results);
        let answer = self.llm.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}
