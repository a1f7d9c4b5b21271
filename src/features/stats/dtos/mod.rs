mod stats_dto;

pub use stats_dto::{
    ChartColorsDto, DailyCountDto, OverviewStatsDto, StatisticsSummaryDto, StatsOverviewDto,
    StatusStatsDto, TimeStatsDto, UrgencyStatsDto,
};
