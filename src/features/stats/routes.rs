use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::stats::handlers;
use crate::features::stats::services::StatsService;

/// Create routes for the statistics feature
pub fn routes(service: Arc<StatsService>) -> Router {
    Router::new()
        .route("/api/stats/overview", get(handlers::get_overview))
        .route("/api/stats/summary", get(handlers::get_summary))
        .route("/api/stats/chart-colors", get(handlers::get_chart_colors))
        .with_state(service)
}
