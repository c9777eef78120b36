//! Filtered book table and summary metrics
//!
//! An empty filter result is a normal response: `empty` is set and a
//! notice is provided so the presentation layer can show it instead of an
//! empty table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::{Query, WithRejection};
use bookdash_common::summary::{self, SummaryStats};
use bookdash_common::{BookRecord, FilterSpec, SortSpec};
use serde::Serialize;
use tracing::debug;

use super::{ApiError, DashboardQuery, QueryParams};
use crate::AppState;

/// Shown when the current filters match no books
pub const NO_MATCHES_NOTICE: &str = "No books match the selected filters.";

/// Summary metrics with their display strings
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub stats: SummaryStats,
    pub display_mean: String,
    pub display_min: String,
    pub display_max: String,
    pub empty: bool,
}

impl From<SummaryStats> for SummaryResponse {
    fn from(stats: SummaryStats) -> Self {
        Self {
            display_mean: stats.display_mean(),
            display_min: stats.display_min(),
            display_max: stats.display_max(),
            empty: !stats.has_data(),
            stats,
        }
    }
}

/// Filtered table response
#[derive(Debug, Serialize)]
pub struct BooksResponse<'a> {
    pub filter: &'a FilterSpec,
    pub sort: SortSpec,
    pub total_results: usize,
    pub empty: bool,
    pub notice: Option<&'static str>,
    pub summary: SummaryResponse,
    pub rows: &'a [&'a BookRecord],
}

/// GET /api/books
///
/// Returns the filtered and sorted table along with its summary.
pub async fn get_books(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<DashboardQuery>,
) -> Result<Response, ApiError> {
    let dataset = &state.dataset;
    let filter = query.filter_spec(dataset.catalog())?;
    let sort = query.sort_spec()?;

    let view = dataset.query(&filter, sort);
    debug!("Filter {:?} sort {} -> {} rows", filter, sort, view.len());

    let response = BooksResponse {
        filter: &filter,
        sort,
        total_results: view.len(),
        empty: view.is_empty(),
        notice: view.is_empty().then_some(NO_MATCHES_NOTICE),
        summary: summary::summarize(&view).into(),
        rows: view.rows(),
    };

    Ok(Json(response).into_response())
}

/// GET /api/summary
///
/// Sidebar metrics for the current filters. Sorting does not affect them.
pub async fn get_summary(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<DashboardQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let filter = query.filter_spec(state.dataset.catalog())?;
    let view = state.dataset.catalog().filter(&filter);

    Ok(Json(summary::summarize(&view).into()))
}
