//! Handler for the greeting page.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// Greets with the deployment version label, e.g. `Hello from BLUE version!`.
///
/// The body is rendered once at start-up, so every response in a process
/// lifetime is byte-identical.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}
