use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{info, Instrument};

/// Log remote address, method and path of every request
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("http.request", method = %method, path = %path);
    info!(parent: &span, "{remote} {method} {path}");

    next.run(request).instrument(span).await
}
