//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by load balancers and orchestrators during blue/green cut-overs to decide
//! whether to keep routing traffic to this instance.

/// Health check handler.
///
/// Returns "OK" to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> &'static str {
    "OK"
}
