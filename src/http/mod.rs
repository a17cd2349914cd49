//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to be terminated in front of the service.
//! The process runs until it is killed, with no custom signal handling.

mod server;

pub use server::{serve, start_server, ServerError};
