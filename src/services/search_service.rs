use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, warn};

use crate::config::SearchConfig;
use crate::error::{AgentError, Result};
use crate::models::SearchResult;

/// Web search that never fails past its boundary: any problem yields an empty set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, num_results: usize) -> Vec<SearchResult>;
}

#[derive(Debug, Clone)]
pub struct SerperSearchProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SerperSearchProvider {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AgentError::Search(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_organic(
        &self,
        api_key: &str,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&SerperRequest {
                q: query,
                num: num_results,
            })
            .send()
            .await
            .map_err(|e| AgentError::Search(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AgentError::Search(format!("serper HTTP {status}")));
        }

        let parsed: SerperResponse = resp
            .json()
            .await
            .map_err(|e| AgentError::Search(e.to_string()))?;
        Ok(parsed
            .organic
            .into_iter()
            .take(num_results)
            .map(SearchResult::from)
            .collect())
    }
}

#[async_trait]
impl SearchProvider for SerperSearchProvider {
    async fn search(&self, query: &str, num_results: usize) -> Vec<SearchResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("SERPER_API_KEY not found; web search is disabled");
            return Vec::new();
        };

        match self.fetch_organic(api_key, query, num_results).await {
            Ok(results) => results,
            Err(e) => {
                error!("Error in web search: {}", e);
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl From<OrganicResult> for SearchResult {
    fn from(item: OrganicResult) -> Self {
        Self {
            title: item.title.unwrap_or_default(),
            snippet: item.snippet.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
        }
    }
}
