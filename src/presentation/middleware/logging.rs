//! Request Logging Middleware
//!
//! Emits one `tracing` event per request with method, path, remote address,
//! final status and latency. The response passes through untouched.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Log the outcome of every request.
///
/// The remote address comes from `ConnectInfo`, which is only present when the
/// router is served with `into_make_service_with_connect_info`.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let remote_addr = remote_addr(&req);

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = response.status().as_u16(),
        latency = ?start.elapsed(),
        "request completed"
    );

    response
}

fn remote_addr(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".into())
}
