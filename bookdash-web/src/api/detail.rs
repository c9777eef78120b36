//! Book detail page: catalog metadata plus reviews
//!
//! A book without reviews answers 200 with `state: "no_reviews"`; callers
//! render their empty-state message from that, not from an error.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::ApiError;
use crate::AppState;

/// GET /api/books/:title/detail
pub async fn get_book_detail(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, ApiError> {
    let detail = state.dataset.detail(&title)?;
    debug!(
        "Detail for {:?}: {} ({} reviews)",
        title,
        detail.reviews.state_name(),
        detail.review_count()
    );

    Ok(Json(&detail).into_response())
}
