use crate::error::{QuarryError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where documents come from and how many to ingest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory walked recursively for `.txt` documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Optional cap on the number of documents loaded (corpus sampling).
    #[serde(default)]
    pub max_docs: Option<usize>,
}

/// Text normalization applied to documents and queries alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Whether to apply stemming (e.g., "running" -> "run").
    #[serde(default = "default_true")]
    pub stemming: bool,
    /// Whether to remove stopwords (e.g., "the", "is", "at").
    #[serde(default = "default_true")]
    pub remove_stopwords: bool,
    /// Tokens shorter than this are discarded.
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    /// Tokens longer than this are discarded.
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How many ranked results to return when the caller does not say.
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    /// How many matches the shell prints per query.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_true() -> bool {
    true
}
fn default_min_token_length() -> usize {
    2
}
fn default_max_token_length() -> usize {
    40
}
fn default_top_n() -> usize {
    10
}
fn default_display_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_docs: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stemming: true,
            remove_stopwords: true,
            min_token_length: default_min_token_length(),
            max_token_length: default_max_token_length(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            display_limit: default_display_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, then apply env overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|e| {
                    QuarryError::Config(format!("failed to read config file {p}: {e}"))
                })?;
                toml::from_str(&content)
                    .map_err(|e| QuarryError::Config(format!("failed to parse config: {e}")))?
            }
            None => Config::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides on top of file/default values.
    /// Env vars always take priority over TOML settings.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("QUARRY_DATA_DIR") {
            self.corpus.data_dir = v;
        }
        if let Some(v) = std::env::var("QUARRY_MAX_DOCS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.corpus.max_docs = Some(v);
        }
        if let Some(v) = std::env::var("QUARRY_TOP_N")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.search.default_top_n = v;
        }
        if let Ok(v) = std::env::var("QUARRY_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Ok(v) = std::env::var("QUARRY_LOG_FORMAT") {
            self.logging.format = v;
        }
    }
}
