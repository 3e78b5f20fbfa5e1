use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::models::Decision;
use crate::services::LlmClient;
use crate::utils::needs_search_prompt;

#[derive(Clone)]
pub struct NeedsSearchClassifier {
    llm: Arc<dyn LlmClient>,
}

impl NeedsSearchClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// LLM errors propagate; unrecognised output is `NoSearch`.
    pub async fn classify(&self, message: &str) -> Result<Decision> {
        let raw = self.llm.complete(&needs_search_prompt(message)).await?;
        let decision = Decision::from_model_output(&raw);
        debug!(?decision, raw = raw.trim(), "classified message");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentError;
    use crate::services::MockLlmClient;
    use rstest::rstest;

    #[rstest]
    #[case("YES", Decision::Search)]
    #[case(" yes \n", Decision::Search)]
    #[case("NO", Decision::NoSearch)]
    #[case("Yes.", Decision::NoSearch)]
    #[case("", Decision::NoSearch)]
    #[tokio::test]
    async fn maps_model_output(#[case] output: &'static str, #[case] expected: Decision) {
        let mut llm = MockLlmClient::new();
        llm.expect_complete()
            .withf(|prompt: &str| prompt.contains("Message: Is it raining in Oslo?"))
            .times(1)
            .returning(move |_| Ok(output.to_string()));

        let classifier = NeedsSearchClassifier::new(Arc::new(llm));
        let decision = classifier.classify("Is it raining in Oslo?").await.unwrap();
        assert_eq!(decision, expected);
    }

    #[tokio::test]
    async fn llm_failure_propagates() {
        let mut llm = MockLlmClient::new();
        llm.expect_complete()
            .returning(|_| Err(AgentError::Llm("timeout".to_string())));

        let classifier = NeedsSearchClassifier::new(Arc::new(llm));
        assert!(classifier.classify("hello").await.is_err());
    }
}
