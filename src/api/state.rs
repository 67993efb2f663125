//! Application state for the Timecard Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded accounting policy, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_shares_config() {
        let state = AppState::new(ConfigLoader::load("./config/default").unwrap());
        let cloned = state.clone();
        assert_eq!(cloned.config().metadata().code, state.config().metadata().code);
        assert_eq!(cloned.config().default_currency(), "USD");
    }
}
