use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account status returned by `api_status`: plan and current usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ApiStatus {
    pub authorized: bool,
    #[builder(into)]
    pub plan: Option<String>,
    pub usage_reports: Option<UsageReports>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UsageReports {
    pub usage_report: UsageReport,
}

/// Usage of one metric (usually `requests`) over the current billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct UsageReport {
    #[builder(into)]
    pub metric: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub max_value: i64,
    pub current_value: i64,
}

impl UsageReport {
    /// Requests left in the period, never negative.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.max_value.saturating_sub(self.current_value).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(max_value: i64, current_value: i64) -> UsageReport {
        UsageReport::builder()
            .metric("requests")
            .period_start(NaiveDate::MIN)
            .period_end(NaiveDate::MAX)
            .max_value(max_value)
            .current_value(current_value)
            .build()
    }

    #[test]
    fn remaining_should_subtract_usage() {
        assert_eq!(report(10_000, 1_250).remaining(), 8_750);
        assert_eq!(report(10_000, 12_000).remaining(), 0);
    }

    #[test]
    fn remaining_should_saturate_on_extreme_values() {
        assert_eq!(report(i64::MAX, -1).remaining(), i64::MAX);
        assert_eq!(report(i64::MIN, i64::MAX).remaining(), 0);
        assert_eq!(report(0, i64::MIN).remaining(), i64::MAX);
    }
}
