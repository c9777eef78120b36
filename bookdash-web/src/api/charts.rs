//! Chart series endpoints
//!
//! Both charts share the table's filter parameters. Chart data for an empty
//! view is an empty series, flagged with `empty` so it is not drawn.

use axum::{extract::State, Json};
use axum_extra::extract::{Query, WithRejection};
use bookdash_common::charts::{self, HistogramBin, YearPriceBar, DEFAULT_HISTOGRAM_BINS};
use serde::{Deserialize, Serialize};

use super::{ApiError, DashboardQuery, QueryParams};
use crate::AppState;

/// Histogram-specific query parameters
#[derive(Debug, Deserialize)]
pub struct HistogramQuery {
    #[serde(default = "default_bins")]
    pub bins: usize,
}

/// Upper limit on requested bins; each bin is allocated up front
pub const MAX_HISTOGRAM_BINS: usize = 1000;

fn default_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

#[derive(Debug, Serialize)]
pub struct PriceByYearResponse {
    pub empty: bool,
    pub bars: Vec<YearPriceBar>,
}

#[derive(Debug, Serialize)]
pub struct HistogramResponse {
    pub empty: bool,
    pub bins: usize,
    pub histogram: Vec<HistogramBin>,
}

/// GET /api/charts/price-by-year
pub async fn get_price_by_year(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<DashboardQuery>,
) -> Result<Json<PriceByYearResponse>, ApiError> {
    let filter = query.filter_spec(state.dataset.catalog())?;
    let view = state.dataset.catalog().filter(&filter);

    Ok(Json(PriceByYearResponse {
        empty: view.is_empty(),
        bars: charts::price_by_year(&view),
    }))
}

/// GET /api/charts/price-histogram
pub async fn get_price_histogram(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<DashboardQuery>,
    WithRejection(Query(histogram), _): QueryParams<HistogramQuery>,
) -> Result<Json<HistogramResponse>, ApiError> {
    if histogram.bins > MAX_HISTOGRAM_BINS {
        return Err(ApiError::BadRequest(format!(
            "bins must be at most {}",
            MAX_HISTOGRAM_BINS
        )));
    }
    let filter = query.filter_spec(state.dataset.catalog())?;
    let view = state.dataset.catalog().filter(&filter);

    Ok(Json(HistogramResponse {
        empty: view.is_empty(),
        bins: histogram.bins,
        histogram: charts::price_histogram(&view, histogram.bins)?,
    }))
}
