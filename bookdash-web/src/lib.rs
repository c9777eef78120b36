//! bookdash-web library - Dashboard service
//!
//! Read-only HTTP JSON surface over the loaded books dataset. Each request
//! carries its own filter, sort or title selection and recomputes the
//! derived view from the shared, immutable tables.

use axum::Router;
use bookdash_common::Dataset;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Tables loaded at startup (read-only)
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/catalog", get(api::get_catalog_overview))
        .route("/api/catalog/titles", get(api::get_titles))
        .route("/api/books", get(api::get_books))
        .route("/api/books/:title/detail", get(api::get_book_detail))
        .route("/api/summary", get(api::get_summary))
        .route("/api/charts/price-by-year", get(api::get_price_by_year))
        .route("/api/charts/price-histogram", get(api::get_price_histogram));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The presentation layer may be served from another origin
        .layer(CorsLayer::permissive())
}
