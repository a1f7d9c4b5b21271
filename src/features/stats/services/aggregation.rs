//! Statistics aggregation over the help-request collection
//!
//! Pure and total: deterministic for a given input and `now`, no I/O, no
//! mutation of the input. Timestamps are stored as UTC instants; daily
//! buckets group by server-local calendar day, so a request created at 23:59
//! local time counts toward that day, not the next.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Duration, Local, NaiveDate};

use crate::features::help_requests::models::{HelpRequest, RequestStatus, Urgency};
use crate::features::stats::dtos::{
    ChartColorsDto, DailyCountDto, OverviewStatsDto, StatisticsSummaryDto, StatusStatsDto,
    TimeStatsDto, UrgencyStatsDto,
};

/// Number of calendar days in the recent-activity histogram
const DAILY_BUCKET_DAYS: u64 = 7;

/// Compute the full statistics summary for a snapshot of help requests
pub fn compute_statistics(requests: &[HelpRequest], now: DateTime<Local>) -> StatisticsSummaryDto {
    let total_requests = requests.len() as u64;
    let open_requests = count_status(requests, RequestStatus::Open);
    let in_progress_requests = count_status(requests, RequestStatus::InProgress);
    let completed_requests = count_status(requests, RequestStatus::Completed);
    let total_volunteers: u64 = requests.iter().map(|r| r.volunteers.len() as u64).sum();

    let urgency_stats = UrgencyStatsDto {
        critical: count_urgency(requests, Urgency::Critical),
        high: count_urgency(requests, Urgency::High),
        medium: count_urgency(requests, Urgency::Medium),
        low: count_urgency(requests, Urgency::Low),
    };

    // Category keys are taken verbatim from the records; no zero-filling
    let mut category_stats: BTreeMap<String, u64> = BTreeMap::new();
    for request in requests {
        *category_stats.entry(request.category.clone()).or_insert(0) += 1;
    }

    let status_stats = StatusStatsDto {
        open: open_requests,
        in_progress: in_progress_requests,
        completed: completed_requests,
    };

    let requests_last7_days = count_within(requests, now, 7);
    let requests_last30_days = count_within(requests, now, 30);

    let today = now.date_naive();
    let daily_requests = (0..DAILY_BUCKET_DAYS)
        .rev()
        .map(|back| {
            let day = today - Days::new(back);
            DailyCountDto {
                date: format_day_label(day),
                count: requests
                    .iter()
                    .filter(|r| r.created_at.with_timezone(&Local).date_naive() == day)
                    .count() as u64,
            }
        })
        .collect();

    let requests_with_volunteers =
        requests.iter().filter(|r| !r.volunteers.is_empty()).count() as u64;

    // Every rate/average is 0 (never NaN) on an empty collection
    let (response_rate, completion_rate, avg_volunteers_per_request) = if total_requests == 0 {
        (0, 0, 0.0)
    } else {
        (
            percentage(requests_with_volunteers, total_requests),
            percentage(completed_requests, total_requests),
            round_one_decimal(total_volunteers as f64 / total_requests as f64),
        )
    };

    StatisticsSummaryDto {
        overview: OverviewStatsDto {
            total_requests,
            open_requests,
            in_progress_requests,
            completed_requests,
            total_volunteers,
            response_rate,
            completion_rate,
            avg_volunteers_per_request,
        },
        urgency_stats,
        category_stats,
        status_stats,
        time_stats: TimeStatsDto {
            requests_last7_days,
            requests_last30_days,
            daily_requests,
        },
    }
}

fn count_status(requests: &[HelpRequest], status: RequestStatus) -> u64 {
    requests.iter().filter(|r| r.status == status).count() as u64
}

fn count_urgency(requests: &[HelpRequest], urgency: Urgency) -> u64 {
    requests.iter().filter(|r| r.urgency == urgency).count() as u64
}

/// Requests created within `[now - days, now]`, inclusive at both ends
///
/// The upper bound keeps future-dated records (possible only through a
/// hand-edited data file) out of the windows while they still count toward
/// totals.
fn count_within(requests: &[HelpRequest], now: DateTime<Local>, days: i64) -> u64 {
    let since = now - Duration::days(days);
    requests
        .iter()
        .filter(|r| {
            let created = r.created_at.with_timezone(&Local);
            created >= since && created <= now
        })
        .count() as u64
}

fn percentage(part: u64, whole: u64) -> u64 {
    (part as f64 / whole as f64 * 100.0).round() as u64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Histogram day label, e.g. "Aug 04"
pub fn format_day_label(day: NaiveDate) -> String {
    day.format("%b %d").to_string()
}

/// Compact display form: 1500 -> "1.5K", 2500000 -> "2.5M"
#[allow(dead_code)]
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Percent change between two period counts; 100 when coming from zero
#[allow(dead_code)]
pub fn calculate_trend(current: u64, previous: u64) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    ((current as f64 - previous as f64) / previous as f64 * 100.0).round() as i64
}

/// Fixed hex palette for the dashboard charts
pub fn chart_colors() -> ChartColorsDto {
    fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    ChartColorsDto {
        urgency: to_map(&[
            ("critical", "#ef4444"),
            ("high", "#f97316"),
            ("medium", "#eab308"),
            ("low", "#22c55e"),
        ]),
        category: to_map(&[
            ("food", "#3b82f6"),
            ("housing", "#8b5cf6"),
            ("medical", "#ef4444"),
            ("transportation", "#06b6d4"),
            ("childcare", "#f59e0b"),
            ("elderly", "#84cc16"),
            ("education", "#6366f1"),
            ("other", "#6b7280"),
        ]),
        status: to_map(&[
            ("open", "#3b82f6"),
            ("in_progress", "#f59e0b"),
            ("completed", "#10b981"),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::features::help_requests::models::HelpRequest;
    use crate::shared::test_helpers::{joined_volunteer, request_at};

    /// Fixed local noon, away from any day boundary
    fn test_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn request_days_ago(days: i64) -> HelpRequest {
        request_at((test_now() - Duration::days(days)).with_timezone(&Utc))
    }

    fn with_volunteers(mut request: HelpRequest, count: usize) -> HelpRequest {
        for _ in 0..count {
            request.volunteers.push(joined_volunteer());
        }
        request
    }

    #[test]
    fn empty_input_yields_zeroed_summary() {
        let summary = compute_statistics(&[], test_now());

        assert_eq!(summary.overview.total_requests, 0);
        assert_eq!(summary.overview.response_rate, 0);
        assert_eq!(summary.overview.completion_rate, 0);
        assert_eq!(summary.overview.avg_volunteers_per_request, 0.0);
        assert!(summary.category_stats.is_empty());
        assert_eq!(summary.urgency_stats.critical, 0);
        assert_eq!(summary.time_stats.daily_requests.len(), 7);
        assert!(summary
            .time_stats
            .daily_requests
            .iter()
            .all(|bucket| bucket.count == 0));
    }

    #[test]
    fn single_open_critical_request_created_now() {
        let mut request = request_days_ago(0);
        request.urgency = Urgency::Critical;
        let summary = compute_statistics(&[request], test_now());

        assert_eq!(summary.overview.total_requests, 1);
        assert_eq!(summary.overview.response_rate, 0);
        assert_eq!(summary.overview.completion_rate, 0);
        assert_eq!(summary.urgency_stats.critical, 1);
        assert_eq!(summary.status_stats.open, 1);
        assert_eq!(summary.time_stats.requests_last7_days, 1);

        let last = summary.time_stats.daily_requests.last().unwrap();
        assert_eq!(last.count, 1);
        assert_eq!(last.date, format_day_label(test_now().date_naive()));
    }

    #[test]
    fn volunteers_drive_response_and_completion_rates() {
        let mut completed = with_volunteers(request_days_ago(0), 2);
        completed.status = RequestStatus::Completed;
        let open = request_days_ago(0);

        let summary = compute_statistics(&[completed, open], test_now());

        assert_eq!(summary.overview.total_volunteers, 2);
        assert_eq!(summary.overview.avg_volunteers_per_request, 1.0);
        assert_eq!(summary.overview.response_rate, 50);
        assert_eq!(summary.overview.completion_rate, 50);
    }

    #[test]
    fn ten_day_old_request_counts_toward_30_days_but_not_7() {
        let summary = compute_statistics(&[request_days_ago(10)], test_now());

        assert_eq!(summary.overview.total_requests, 1);
        assert_eq!(summary.urgency_stats.medium, 1);
        assert_eq!(summary.status_stats.open, 1);
        assert_eq!(summary.category_stats.get("food"), Some(&1));
        assert_eq!(summary.time_stats.requests_last7_days, 0);
        assert_eq!(summary.time_stats.requests_last30_days, 1);
        assert!(summary
            .time_stats
            .daily_requests
            .iter()
            .all(|bucket| bucket.count == 0));
    }

    #[test]
    fn breakdowns_each_sum_to_total() {
        let mut housing = request_days_ago(1);
        housing.category = "housing".to_string();
        housing.urgency = Urgency::Critical;
        housing.status = RequestStatus::InProgress;
        let mut plumbing = request_days_ago(20);
        plumbing.category = "plumbing".to_string();
        plumbing.urgency = Urgency::Low;
        plumbing.status = RequestStatus::Completed;
        let requests = vec![request_days_ago(0), housing, plumbing, request_days_ago(40)];

        let summary = compute_statistics(&requests, test_now());
        let total = summary.overview.total_requests;

        let urgency_sum = summary.urgency_stats.critical
            + summary.urgency_stats.high
            + summary.urgency_stats.medium
            + summary.urgency_stats.low;
        let status_sum = summary.status_stats.open
            + summary.status_stats.in_progress
            + summary.status_stats.completed;
        let category_sum: u64 = summary.category_stats.values().sum();
        let daily_sum: u64 = summary
            .time_stats
            .daily_requests
            .iter()
            .map(|b| b.count)
            .sum();

        assert_eq!(total, 4);
        assert_eq!(urgency_sum, total);
        assert_eq!(status_sum, total);
        assert_eq!(category_sum, total);
        assert!(daily_sum <= summary.time_stats.requests_last7_days);
    }

    #[test]
    fn unrecognized_category_becomes_its_own_bucket() {
        let mut request = request_days_ago(0);
        request.category = "plumbing".to_string();

        let summary = compute_statistics(&[request], test_now());
        assert_eq!(summary.category_stats.get("plumbing"), Some(&1));
        assert_eq!(summary.category_stats.len(), 1);
    }

    #[test]
    fn average_volunteers_rounds_to_one_decimal() {
        let requests = vec![
            with_volunteers(request_days_ago(0), 1),
            request_days_ago(1),
            request_days_ago(2),
        ];

        let summary = compute_statistics(&requests, test_now());
        assert_eq!(summary.overview.avg_volunteers_per_request, 0.3);
        assert_eq!(summary.overview.response_rate, 33);
    }

    #[test]
    fn rates_stay_within_bounds() {
        let requests: Vec<HelpRequest> = (0..5)
            .map(|i| {
                let mut r = with_volunteers(request_days_ago(i), i as usize);
                if i % 2 == 0 {
                    r.status = RequestStatus::Completed;
                }
                r
            })
            .collect();

        let summary = compute_statistics(&requests, test_now());
        assert!(summary.overview.response_rate <= 100);
        assert!(summary.overview.completion_rate <= 100);
    }

    #[test]
    fn late_evening_request_stays_in_its_calendar_day() {
        let yesterday_2359 = Local
            .with_ymd_and_hms(2026, 3, 9, 23, 59, 59)
            .unwrap()
            .with_timezone(&Utc);
        let summary = compute_statistics(&[request_at(yesterday_2359)], test_now());

        let buckets = &summary.time_stats.daily_requests;
        assert_eq!(buckets[5].count, 1);
        assert_eq!(buckets[6].count, 0);
        assert_eq!(summary.time_stats.requests_last7_days, 1);
    }

    #[test]
    fn future_timestamp_counts_toward_totals_only() {
        let summary = compute_statistics(&[request_days_ago(-1)], test_now());

        assert_eq!(summary.overview.total_requests, 1);
        assert_eq!(summary.time_stats.requests_last7_days, 0);
        assert_eq!(summary.time_stats.requests_last30_days, 0);
        assert!(summary
            .time_stats
            .daily_requests
            .iter()
            .all(|bucket| bucket.count == 0));
    }

    #[test]
    fn daily_buckets_run_oldest_to_today() {
        let summary = compute_statistics(&[], test_now());
        let today = test_now().date_naive();

        let labels: Vec<String> = summary
            .time_stats
            .daily_requests
            .iter()
            .map(|b| b.date.clone())
            .collect();
        let expected: Vec<String> = (0..7)
            .rev()
            .map(|back| format_day_label(today - Days::new(back)))
            .collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn same_input_and_now_is_idempotent() {
        let requests = vec![
            with_volunteers(request_days_ago(0), 2),
            request_days_ago(3),
            request_days_ago(12),
        ];

        let first = compute_statistics(&requests, test_now());
        let second = compute_statistics(&requests, test_now());
        assert_eq!(first, second);
    }

    #[test]
    fn day_label_uses_short_month_and_zero_padded_day() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(format_day_label(day), "Mar 04");
    }

    #[test]
    fn format_number_scales_thousands_and_millions() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn trend_handles_zero_previous_period() {
        assert_eq!(calculate_trend(5, 0), 100);
        assert_eq!(calculate_trend(0, 0), 0);
        assert_eq!(calculate_trend(150, 100), 50);
        assert_eq!(calculate_trend(50, 100), -50);
    }

    #[test]
    fn chart_palette_covers_all_fixed_keys() {
        let colors = chart_colors();
        assert_eq!(colors.urgency.len(), 4);
        assert_eq!(colors.status.len(), 3);
        assert_eq!(colors.category.len(), 8);
        assert_eq!(colors.status.get("open").map(String::as_str), Some("#3b82f6"));
        assert_eq!(
            colors.urgency.get("critical").map(String::as_str),
            Some("#ef4444")
        );
    }
}
