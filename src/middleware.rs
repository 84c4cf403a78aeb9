//! Request logging middleware.
//!
//! Wraps every route: generates a UUID v4 request id, logs the request line on
//! entry, runs the handler inside a request span and logs the elapsed duration
//! once the response is ready. The request id is echoed back in the
//! `x-request-id` header so probe failures can be matched to log lines.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Remote peer as a log field, `-` when the connection info is not available
/// (for example when the router is driven directly in tests).
fn remote_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Middleware that logs each request on entry and on completion.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote = remote_addr(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    let mut request = request;
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        tracing::info!(method = %method, uri = %uri, remote_addr = %remote, "Request started");

        let mut response = next.run(request).await;
        let elapsed = start.elapsed();
        let duration_ms = elapsed.as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            elapsed = ?elapsed,
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
