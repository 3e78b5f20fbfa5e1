use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Without a key every search degrades to an empty result set.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub endpoint: String,
    pub num_results: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl SearchConfig {
    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5732,
                workers: num_cpus::get(),
                max_json_payload_size: 2_000_000, // 2MB
            },
            llm: LlmConfig {
                api_key: None,
                model: "claude-3-sonnet-20240229".to_string(),
                base_url: "https://api.anthropic.com".to_string(),
                max_tokens: 1024,
                temperature: None,
                timeout_secs: 60,
            },
            search: SearchConfig {
                api_key: None,
                endpoint: "https://google.serper.dev/search".to_string(),
                num_results: 5,
                timeout_secs: 15,
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        // Server configuration
        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Some(workers) = var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Some(max_json_payload_size) = var("MAX_JSON_PAYLOAD_SIZE") {
            config.server.max_json_payload_size = max_json_payload_size.parse()?;
        }

        // LLM configuration
        config.llm.api_key = var("ANTHROPIC_API_KEY");
        if let Some(model) = var("LLM_MODEL") {
            config.llm.model = model;
        }
        if let Some(base_url) = var("ANTHROPIC_BASE_URL") {
            config.llm.base_url = base_url;
        }
        if let Some(max_tokens) = var("LLM_MAX_TOKENS") {
            config.llm.max_tokens = max_tokens.parse()?;
        }
        if let Some(temperature) = var("LLM_TEMPERATURE") {
            config.llm.temperature = Some(temperature.parse()?);
        }
        if let Some(timeout_secs) = var("LLM_TIMEOUT_SECS") {
            config.llm.timeout_secs = timeout_secs.parse()?;
        }

        // Search configuration
        config.search.api_key = var("SERPER_API_KEY");
        if let Some(endpoint) = var("SERPER_ENDPOINT") {
            config.search.endpoint = endpoint;
        }
        if let Some(num_results) = var("SEARCH_NUM_RESULTS") {
            config.search.num_results = num_results.parse()?;
        }
        if let Some(timeout_secs) = var("SEARCH_TIMEOUT_SECS") {
            config.search.timeout_secs = timeout_secs.parse()?;
        }

        // Security configuration
        if let Some(allowed_origins) = var("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
