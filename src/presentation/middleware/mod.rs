//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;

pub use logging::log_requests;
