//! Catalog-wide facets used to build the dashboard controls
//!
//! Slider bounds, genre options, sort options and the book selector list.

use axum::{extract::State, Json};
use bookdash_common::{CatalogBounds, LoadReport, SortSpec};
use serde::Serialize;

use crate::AppState;

/// Control seeding data for the dashboard sidebar
#[derive(Debug, Serialize)]
pub struct CatalogOverview {
    pub bounds: CatalogBounds,
    /// False when the catalog has no genre column; genre filtering is then a no-op
    pub genre_available: bool,
    pub genres: Vec<String>,
    pub sort_options: Vec<&'static str>,
    pub book_count: usize,
    pub review_count: usize,
    pub load_report: LoadReport,
}

/// Distinct titles for the book selector
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

/// GET /api/catalog
pub async fn get_catalog_overview(State(state): State<AppState>) -> Json<CatalogOverview> {
    let catalog = state.dataset.catalog();

    Json(CatalogOverview {
        bounds: catalog.bounds(),
        genre_available: catalog.genre_available(),
        genres: catalog.genres().into_iter().map(str::to_string).collect(),
        sort_options: SortSpec::ALL.iter().map(|spec| spec.as_str()).collect(),
        book_count: catalog.len(),
        review_count: state.dataset.reviews().len(),
        load_report: catalog.report(),
    })
}

/// GET /api/catalog/titles
///
/// Titles in catalog order, each listed once.
pub async fn get_titles(State(state): State<AppState>) -> Json<TitlesResponse> {
    Json(TitlesResponse {
        titles: state
            .dataset
            .catalog()
            .titles()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
