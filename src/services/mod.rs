pub mod answer_service;
pub mod classifier;
pub mod llm_service;
pub mod search_service;
pub mod synthesizer;

pub use answer_service::*;
pub use classifier::*;
pub use llm_service::*;
pub use search_service::*;
pub use synthesizer::*;
