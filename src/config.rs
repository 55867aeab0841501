use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "TASKMAN_API_URL";

pub const DEFAULT_API_URL: &str = "https://taskmanagerbackend.pythonanywhere.com/";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            debug_logging: false,
        }
    }
}

impl AppConfig {
    /// `$XDG_CONFIG_HOME/taskman/config.json`, or relative to the working
    /// directory when no config dir is known.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskman")
            .join("config.json")
    }

    /// Read the config file, falling back to defaults when it is missing or
    /// unreadable, then apply the environment override.
    pub fn load() -> Self {
        let mut config = Self::from_file(&Self::default_path());
        config.apply_env(std::env::var(API_URL_ENV).ok());
        config
    }

    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
    }
}
