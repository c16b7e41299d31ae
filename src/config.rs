use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub ai_provider: String,
    pub api_key: Option<String>,
    pub model: String,
    #[serde(default)]
    pub openai_base_url: Option<String>,
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
    #[serde(default = "default_true")]
    pub enable_script_review: bool,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_abaqus_command")]
    pub abaqus_command: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_true() -> bool {
    true
}

fn default_max_generation_attempts() -> u32 {
    3
}

fn default_request_timeout_seconds() -> u64 {
    60
}

fn default_abaqus_command() -> String {
    "abaqus".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_provider: "openai".to_string(),
            api_key: None,
            model: "gpt-4".to_string(),
            openai_base_url: None,
            max_generation_attempts: default_max_generation_attempts(),
            enable_script_review: true,
            request_timeout_seconds: default_request_timeout_seconds(),
            abaqus_command: default_abaqus_command(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl AppConfig {
    /// Get the path to the config file in the user config dir
    pub fn config_path() -> Result<PathBuf, AppError> {
        let data_dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("Cannot find config directory".into()))?;
        Ok(data_dir.join("abaqus-assistant").join("config.json"))
    }

    /// Load config from disk, or return default if not found.
    /// `OPENAI_API_KEY` in the environment takes precedence over the file.
    pub fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str::<AppConfig>(&contents)
                .map_err(|e| AppError::Config(e.to_string()))?
        } else {
            Self::default()
        };
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}
