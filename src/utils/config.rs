use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use easy_config_store::ConfigStore;
use eyre::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "RECRUITIA_API_URL";

pub type Config = Arc<ConfigInner>;

/// Loads `config.toml` (writing the embedded defaults if it is missing) and
/// applies the API origin override, if any.
pub fn config(path: PathBuf, api_url: Option<String>) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let mut inner = (*config_store).clone();

    inner.api.base_url = resolve_base_url(
        api_url,
        std::env::var(API_URL_ENV).ok(),
        inner.api.base_url,
    );

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner)?);

    Ok(Arc::new(inner))
}

/// The `--api-url` flag wins over the environment, which wins over the file.
pub fn resolve_base_url(flag: Option<String>, env: Option<String>, file: String) -> String {
    flag.or(env)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or(file)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_question_delay_ms")]
    pub question_delay_ms: u64,
}

impl ChatConfig {
    pub fn question_delay(&self) -> Duration {
        Duration::from_millis(self.question_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            question_delay_ms: default_question_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_user_agent() -> String {
    "recruitia-cli".to_string()
}

fn default_question_delay_ms() -> u64 {
    1000
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).expect("embedded config.default.toml must parse")
    }
}
