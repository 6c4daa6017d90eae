use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ModelError;

/// Upper bound on a report span: two years, both possible leap days
/// included. Matches the report UI's widest range preset.
pub const MAX_REPORT_SPAN_DAYS: i64 = 731;

/// The date window one analysis run covers.
///
/// Construction is the crate's validation boundary; downstream analysis
/// trusts a built range and never re-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// IANA timezone name the diary days were bucketed in. Carried as
    /// provenance only; all per-day bucketing happened upstream.
    pub timezone: String,
    /// Calendar days in the range, both endpoints inclusive.
    pub total_days: u32,
}

impl ReportRange {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        timezone: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if end < start {
            return Err(ModelError::RangeInverted { start, end });
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_REPORT_SPAN_DAYS {
            return Err(ModelError::RangeTooLong {
                days,
                max: MAX_REPORT_SPAN_DAYS,
            });
        }
        Ok(Self {
            start,
            end,
            timezone: timezone.into(),
            total_days: days as u32,
        })
    }
}
