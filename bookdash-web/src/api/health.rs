//! Liveness and build identification endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Identification stamped in by build.rs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        build_profile: env!("BUILD_PROFILE"),
    };
}

/// The dataset is loaded before the listener binds, so a responding
/// service always has data to serve.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    #[serde(flatten)]
    pub build: BuildInfo,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        module: "bookdash-web",
        build: BuildInfo::CURRENT,
    })
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo::CURRENT)
}

/// `/health` and `/api/buildinfo`
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/buildinfo", get(build_info))
}
