//! Likeboard Server
//!
//! HTTP service for an in-memory catalog of source repositories: list, create,
//! update, delete and like. Nothing is persisted; the catalog starts empty on
//! every start.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod storage;

use axum::{
    routing::{get, post, put},
    Router,
};
use likeboard_core::ports::RepositoryStore;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::RepositoryCatalog;
use storage::MemoryRepositoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RepositoryCatalog>,
    pub started_at: Instant,
}

impl AppState {
    pub fn with_store(store: Arc<dyn RepositoryStore>) -> Self {
        Self {
            catalog: Arc::new(RepositoryCatalog::new(store)),
            started_at: Instant::now(),
        }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryRepositoryStore::new()))
    }
}

/// Build the HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/repositories",
            get(handlers::repositories::list).post(handlers::repositories::create),
        )
        .route(
            "/repositories/:id",
            put(handlers::repositories::update).delete(handlers::repositories::delete),
        )
        .route("/repositories/:id/like", post(handlers::repositories::like))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_cross_origin_requests_allowed() {
        let request = Request::builder()
            .uri("/repositories")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = router(AppState::in_memory()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .unwrap();
        assert_eq!(allow_origin.to_str().unwrap(), "*");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/repositories")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "PUT")
            .body(Body::empty())
            .unwrap();

        let response = router(AppState::in_memory()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-methods"));
    }
}
