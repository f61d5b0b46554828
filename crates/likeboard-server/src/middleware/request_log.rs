//! Request timing log

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// `[METHOD] path` label shared by the start and finish lines. The query
/// string is left out.
pub fn log_label<B>(request: &axum::http::Request<B>) -> String {
    format!("[{}] {}", request.method().as_str(), request.uri().path())
}

/// Log every request under its label with the elapsed time.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let label = log_label(&request);
    let started = Instant::now();
    tracing::debug!("{}: started", label);

    let response = next.run(request).await;

    info!(
        "{}: {:.3}ms ({})",
        label,
        started.elapsed().as_secs_f64() * 1000.0,
        response.status()
    );
    response
}
