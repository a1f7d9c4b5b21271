use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::stats::dtos::{ChartColorsDto, StatisticsSummaryDto, StatsOverviewDto};
use crate::features::stats::services::StatsService;
use crate::shared::types::ApiResponse;

/// Get lightweight overview counters
#[utoipa::path(
    get,
    path = "/api/stats/overview",
    responses(
        (status = 200, description = "Overview counters", body = ApiResponse<StatsOverviewDto>),
    ),
    tag = "stats"
)]
pub async fn get_overview(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatsOverviewDto>>> {
    let overview = service.overview().await?;
    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}

/// Get the full statistics summary
#[utoipa::path(
    get,
    path = "/api/stats/summary",
    responses(
        (status = 200, description = "Statistics summary", body = ApiResponse<StatisticsSummaryDto>),
    ),
    tag = "stats"
)]
pub async fn get_summary(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatisticsSummaryDto>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Get the chart color palette
#[utoipa::path(
    get,
    path = "/api/stats/chart-colors",
    responses(
        (status = 200, description = "Chart color palette", body = ApiResponse<ChartColorsDto>),
    ),
    tag = "stats"
)]
pub async fn get_chart_colors(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<ChartColorsDto>>> {
    let colors = service.chart_colors();
    Ok(Json(ApiResponse::success(Some(colors), None, None)))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Utc;

    use crate::features::help_requests::models::{RequestStatus, Urgency};
    use crate::features::stats::dtos::{ChartColorsDto, StatisticsSummaryDto, StatsOverviewDto};
    use crate::shared::test_helpers::{joined_volunteer, request_at, seeded_store, test_app};
    use crate::shared::types::ApiResponse;

    #[tokio::test]
    async fn overview_counts_open_critical_and_volunteers() {
        let mut critical = request_at(Utc::now());
        critical.urgency = Urgency::Critical;
        critical.volunteers.push(joined_volunteer());
        let mut completed = request_at(Utc::now());
        completed.status = RequestStatus::Completed;

        let store = seeded_store(vec![critical, completed, request_at(Utc::now())]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server.get("/api/stats/overview").await;
        response.assert_status_ok();
        let body: ApiResponse<StatsOverviewDto> = response.json();
        let overview = body.data.unwrap();
        assert_eq!(overview.total, 3);
        assert_eq!(overview.open, 2);
        assert_eq!(overview.critical, 1);
        assert_eq!(overview.volunteers, 1);
    }

    #[tokio::test]
    async fn summary_reflects_the_stored_requests() {
        let mut with_volunteer = request_at(Utc::now());
        with_volunteer.volunteers.push(joined_volunteer());
        let store = seeded_store(vec![with_volunteer, request_at(Utc::now())]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server.get("/api/stats/summary").await;
        response.assert_status_ok();
        let body: ApiResponse<StatisticsSummaryDto> = response.json();
        let summary = body.data.unwrap();
        assert_eq!(summary.overview.total_requests, 2);
        assert_eq!(summary.overview.response_rate, 50);
        assert_eq!(summary.category_stats.get("food"), Some(&2));
        assert_eq!(summary.time_stats.daily_requests.len(), 7);
        let daily_total: u64 = summary
            .time_stats
            .daily_requests
            .iter()
            .map(|b| b.count)
            .sum();
        assert_eq!(daily_total, 2);
    }

    #[tokio::test]
    async fn chart_colors_expose_the_fixed_palette() {
        let store = seeded_store(Vec::new()).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server.get("/api/stats/chart-colors").await;
        response.assert_status_ok();
        let body: ApiResponse<ChartColorsDto> = response.json();
        let colors = body.data.unwrap();
        assert_eq!(
            colors.status.get("completed").map(String::as_str),
            Some("#10b981")
        );
    }
}
