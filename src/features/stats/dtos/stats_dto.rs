use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lightweight counters for the landing header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsOverviewDto {
    pub total: u64,
    pub open: u64,
    pub critical: u64,
    pub volunteers: u64,
}

/// Headline numbers of the statistics summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStatsDto {
    pub total_requests: u64,
    pub open_requests: u64,
    pub in_progress_requests: u64,
    pub completed_requests: u64,
    pub total_volunteers: u64,
    /// Percentage of requests with at least one volunteer, rounded
    pub response_rate: u64,
    /// Percentage of completed requests, rounded
    pub completion_rate: u64,
    /// Rounded to one decimal
    pub avg_volunteers_per_request: f64,
}

/// Counts per urgency level; all four keys are always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UrgencyStatsDto {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// Counts per lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusStatsDto {
    pub open: u64,
    pub in_progress: u64,
    pub completed: u64,
}

/// One calendar-day bucket of the recent-activity histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyCountDto {
    /// Day label, e.g. "Aug 04"
    pub date: String,
    pub count: u64,
}

/// Time-windowed activity counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeStatsDto {
    pub requests_last7_days: u64,
    pub requests_last30_days: u64,
    /// Exactly 7 entries, oldest first, ending with the day containing "now"
    pub daily_requests: Vec<DailyCountDto>,
}

/// Full statistics summary produced by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummaryDto {
    pub overview: OverviewStatsDto,
    pub urgency_stats: UrgencyStatsDto,
    /// Keyed by the category values actually observed; no zero-filling
    pub category_stats: BTreeMap<String, u64>,
    pub status_stats: StatusStatsDto,
    pub time_stats: TimeStatsDto,
}

/// Hex color palette for the dashboard charts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartColorsDto {
    pub urgency: BTreeMap<String, String>,
    pub category: BTreeMap<String, String>,
    pub status: BTreeMap<String, String>,
}
