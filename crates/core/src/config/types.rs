use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Drink API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("Barkeep/{}", env!("CARGO_PKG_VERSION"))
}

/// Search history configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Database file for recent searches
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
    /// How many recent searches to keep (oldest dropped first)
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            limit: default_history_limit(),
        }
    }
}

fn default_history_path() -> PathBuf {
    PathBuf::from("barkeep.db")
}

fn default_history_limit() -> usize {
    5
}

/// Presentation timings and prompt suggestions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Delay between revealing consecutive results, in milliseconds
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,
    /// Duration of the repeated-search acknowledgment, in milliseconds
    #[serde(default = "default_flash_duration")]
    pub flash_duration_ms: u64,
    /// Placeholder suggestions cycled at an empty prompt
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay(),
            flash_duration_ms: default_flash_duration(),
            placeholders: default_placeholders(),
        }
    }
}

fn default_reveal_delay() -> u64 {
    140
}

fn default_flash_duration() -> u64 {
    300
}

fn default_placeholders() -> Vec<String> {
    [
        "coffee",
        "tequila",
        "banana milk shake",
        "espresso martini",
        "grenadine",
        "salt",
        "amaretto sunrise",
        "margarita",
        "orange juice",
        "strawberries",
        "daiquiri",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
