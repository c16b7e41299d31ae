use std::sync::{Arc, Mutex};

use crate::ai;
use crate::ai::provider::AiProvider;
use crate::config::AppConfig;
use crate::error::AppError;

/// Builds a completion provider for a request from the current config.
/// Swapped for a stub factory in router tests.
pub type ProviderFactory =
    Box<dyn Fn(&AppConfig) -> Result<Box<dyn AiProvider>, AppError> + Send + Sync>;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Mutex<AppConfig>,
    /// The most recently accepted generated script, kept for the debug and
    /// run endpoints. One slot for the whole process: concurrent generation
    /// requests overwrite each other, so a debug call may see a script from
    /// an interleaved request. The Mutex only makes the accesses atomic; it
    /// does not remove that interleaving.
    pub latest_script: Mutex<Option<String>>,
    pub provider_factory: ProviderFactory,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Mutex::new(config),
            latest_script: Mutex::new(None),
            provider_factory: Box::new(ai::create_provider),
        }
    }

    #[cfg(test)]
    pub fn with_provider_factory(config: AppConfig, factory: ProviderFactory) -> Self {
        Self {
            config: Mutex::new(config),
            latest_script: Mutex::new(None),
            provider_factory: factory,
        }
    }
}
