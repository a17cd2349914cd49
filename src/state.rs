//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::version::VersionLabel;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Built once at start-up and never mutated afterwards, so handlers read it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Greeting rendered once from the version label
    pub greeting: Arc<str>,
}

impl AppState {
    /// Creates a new application state, rendering the greeting from the configured label.
    pub fn new(config: AppConfig) -> Self {
        let greeting = Arc::from(config.version.greeting());
        Self {
            config: Arc::new(config),
            greeting,
        }
    }

    /// State for the given label with default listener settings.
    pub fn for_version(version: VersionLabel) -> Self {
        Self::new(AppConfig::default().with_version(version))
    }

    pub fn version(&self) -> &VersionLabel {
        &self.config.version
    }
}
