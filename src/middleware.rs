//! Per-request tracing span.
//!
//! Every request runs inside a `request` span carrying a fresh UUID v4, so the
//! handler span and the completion event can be correlated in the logs.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{field, Instrument};
use uuid::Uuid;

/// Wraps the request in a span and logs its status and latency once served.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        status = field::Empty,
        duration_ms = field::Empty,
    );
    let started = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let duration_ms = started.elapsed().as_millis() as u64;
    span.record("status", status);
    span.record("duration_ms", duration_ms);
    span.in_scope(|| tracing::info!(status, duration_ms, "Request completed"));

    response
}
