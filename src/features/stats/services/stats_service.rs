use std::sync::Arc;

use chrono::Local;

use crate::core::error::Result;
use crate::features::help_requests::models::{RequestStatus, Urgency};
use crate::features::stats::dtos::{ChartColorsDto, StatisticsSummaryDto, StatsOverviewDto};
use crate::features::stats::services::aggregation;
use crate::modules::store::JsonStore;

/// Service for dashboard statistics
///
/// Holds no aggregation logic; takes a store snapshot and hands it to the
/// pure aggregator.
pub struct StatsService {
    store: Arc<JsonStore>,
}

impl StatsService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Lightweight counters for the landing header
    pub async fn overview(&self) -> Result<StatsOverviewDto> {
        let requests = self.store.list_help_requests().await;
        Ok(StatsOverviewDto {
            total: requests.len() as u64,
            open: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Open)
                .count() as u64,
            critical: requests
                .iter()
                .filter(|r| r.urgency == Urgency::Critical)
                .count() as u64,
            volunteers: requests.iter().map(|r| r.volunteers.len() as u64).sum(),
        })
    }

    /// Full statistics summary over a fresh snapshot
    pub async fn summary(&self) -> Result<StatisticsSummaryDto> {
        let requests = self.store.list_help_requests().await;
        Ok(aggregation::compute_statistics(&requests, Local::now()))
    }

    /// Fixed chart palette for the client
    pub fn chart_colors(&self) -> ChartColorsDto {
        aggregation::chart_colors()
    }
}
