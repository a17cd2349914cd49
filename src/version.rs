//! Deployment version label.
//!
//! The label names the running deployment variant ("blue", "green", ...). It is
//! read from `APP_VERSION` once at start-up and never changes afterwards.

use std::fmt;
use std::sync::Arc;

use crate::config::{APP_VERSION_ENV, DEFAULT_VERSION_LABEL};

/// Resolved, non-empty version label shared across handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLabel(Arc<str>);

impl VersionLabel {
    /// Resolve a label from a raw environment value.
    ///
    /// A missing or empty value falls back to `DEFAULT_VERSION_LABEL`.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.is_empty() => Self(Arc::from(value)),
            _ => Self(Arc::from(DEFAULT_VERSION_LABEL)),
        }
    }

    /// Resolve the label from the process environment.
    ///
    /// Values that are not valid Unicode are treated as unset.
    pub fn from_env() -> Self {
        let raw = std::env::var(APP_VERSION_ENV).ok();
        Self::resolve(raw.as_deref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Greeting served on `/`, e.g. `Hello from GREEN version!`.
    pub fn greeting(&self) -> String {
        format!("Hello from {} version!", self.0.to_uppercase())
    }
}

impl Default for VersionLabel {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
