use serde::{Deserialize, Serialize};

/// One organic hit, in the provider's relevance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// Whether a message needs live web information before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Search,
    NoSearch,
}

impl Decision {
    /// Only an exact `YES` (after trimming and upper-casing) selects `Search`.
    ///
    /// Anything else, including `NO`, empty output, or `"yes."`, falls back to
    /// `NoSearch` so that ambiguous classifier output never triggers a search.
    pub fn from_model_output(raw: &str) -> Self {
        if raw.trim().to_uppercase() == "YES" {
            Decision::Search
        } else {
            Decision::NoSearch
        }
    }
}
