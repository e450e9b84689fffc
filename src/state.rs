use crate::config::AppConfig;
use crate::domain::ai::client::SharedGenerator;

/// Shared application state.
///
/// Nothing in here is mutable: requests share a config snapshot and a handle
/// to the generation client, and never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub generator: SharedGenerator,
}

impl AppState {
    pub fn new(config: AppConfig, generator: SharedGenerator) -> Self {
        Self { config, generator }
    }
}
