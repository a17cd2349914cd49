//! Greeter: a minimal HTTP service for blue/green deployment demos.
//!
//! Answers `/` with a greeting naming the deployment variant taken from
//! `APP_VERSION`, and `/health` with a liveness response.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod version;

pub use config::{AppConfig, ConfigError};
pub use routes::create_router;
pub use state::AppState;
pub use version::VersionLabel;
