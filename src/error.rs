#[derive(thiserror::Error, Debug)]
pub enum AgentError {
    #[error("llm failed: {0}")]
    Llm(String),
    #[error("search failed: {0}")]
    Search(String),
    #[error("not configured: {0}")]
    NotConfigured(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
