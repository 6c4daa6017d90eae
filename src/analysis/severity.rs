//! ME/CFS severity burden summary with an inference guardrail.
//!
//! Segments each day of the range by its documented maximum severity.
//! The guardrail withholds any burden statement below the documented-day
//! minimum; undocumented days are counted, never filled by projection.

use serde::Serialize;

use crate::models::{GuardrailReason, SeverityDay, SeverityLevel};

use super::definitions::SEVERITY_MIN_DOCUMENTED_DAYS;

/// Day counts per severity level. The five fields partition the range:
/// they always sum to `days_in_range`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeveritySegments {
    pub none: u32,
    pub mild: u32,
    pub moderate: u32,
    pub severe: u32,
    pub undocumented: u32,
}

/// Whether a burden statement may be made, and why not when withheld.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailDecision {
    pub ok: bool,
    pub reason: Option<GuardrailReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeveritySummary {
    pub days_in_range: u32,
    pub documented_days: u32,
    pub segments: SeveritySegments,
    pub guardrail: GuardrailDecision,
    /// Permanently `true`; carried explicitly so downstream consumers see
    /// the rule without knowing this module.
    pub no_extrapolation: bool,
}

pub fn summarize_severity(days_in_range: u32, days: &[SeverityDay]) -> SeveritySummary {
    let mut segments = SeveritySegments {
        none: 0,
        mild: 0,
        moderate: 0,
        severe: 0,
        undocumented: 0,
    };

    for day in days {
        match (day.documented, &day.max_severity) {
            (true, Some(SeverityLevel::None)) => segments.none += 1,
            (true, Some(SeverityLevel::Mild)) => segments.mild += 1,
            (true, Some(SeverityLevel::Moderate)) => segments.moderate += 1,
            (true, Some(SeverityLevel::Severe)) => segments.severe += 1,
            // Undocumented flag or missing level both mean no usable data.
            _ => segments.undocumented += 1,
        }
    }

    // Days inside the range but absent from the input are undocumented too.
    segments.undocumented += days_in_range.saturating_sub(days.len() as u32);

    let documented_days = segments.none + segments.mild + segments.moderate + segments.severe;

    let guardrail = if documented_days == 0 {
        GuardrailDecision {
            ok: false,
            reason: Some(GuardrailReason::NoData),
        }
    } else if documented_days < SEVERITY_MIN_DOCUMENTED_DAYS {
        GuardrailDecision {
            ok: false,
            reason: Some(GuardrailReason::TooFewDays),
        }
    } else {
        GuardrailDecision {
            ok: true,
            reason: None,
        }
    };

    SeveritySummary {
        days_in_range,
        documented_days,
        segments,
        guardrail,
        no_extrapolation: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented(level: SeverityLevel) -> SeverityDay {
        SeverityDay {
            documented: true,
            max_severity: Some(level),
        }
    }

    fn undocumented() -> SeverityDay {
        SeverityDay {
            documented: false,
            max_severity: None,
        }
    }

    #[test]
    fn no_data_blocks_with_reason() {
        let summary = summarize_severity(90, &[]);
        assert!(!summary.guardrail.ok);
        assert_eq!(summary.guardrail.reason, Some(GuardrailReason::NoData));
        assert_eq!(summary.segments.undocumented, 90);
        assert!(summary.no_extrapolation);
    }

    #[test]
    fn sparse_data_blocks_as_too_few_days() {
        let days: Vec<SeverityDay> = (0..5).map(|_| documented(SeverityLevel::Moderate)).collect();
        let summary = summarize_severity(90, &days);
        assert!(!summary.guardrail.ok);
        assert_eq!(summary.guardrail.reason, Some(GuardrailReason::TooFewDays));
        assert_eq!(summary.documented_days, 5);
        assert_eq!(summary.segments.undocumented, 85);
    }

    #[test]
    fn exactly_the_minimum_passes_the_guardrail() {
        let days: Vec<SeverityDay> = (0..20).map(|_| documented(SeverityLevel::Mild)).collect();
        let summary = summarize_severity(30, &days);
        assert!(summary.guardrail.ok);
        assert_eq!(summary.guardrail.reason, None);

        let days: Vec<SeverityDay> = (0..19).map(|_| documented(SeverityLevel::Mild)).collect();
        let summary = summarize_severity(30, &days);
        assert!(!summary.guardrail.ok);
    }

    #[test]
    fn segments_partition_the_range() {
        let mut days = Vec::new();
        for _ in 0..6 {
            days.push(documented(SeverityLevel::None));
        }
        for _ in 0..8 {
            days.push(documented(SeverityLevel::Mild));
        }
        for _ in 0..4 {
            days.push(documented(SeverityLevel::Moderate));
        }
        for _ in 0..2 {
            days.push(documented(SeverityLevel::Severe));
        }
        for _ in 0..3 {
            days.push(undocumented());
        }
        let summary = summarize_severity(30, &days);
        assert_eq!(summary.segments.none, 6);
        assert_eq!(summary.segments.mild, 8);
        assert_eq!(summary.segments.moderate, 4);
        assert_eq!(summary.segments.severe, 2);
        // 3 explicit + 7 missing from input.
        assert_eq!(summary.segments.undocumented, 10);
        let total = summary.segments.none
            + summary.segments.mild
            + summary.segments.moderate
            + summary.segments.severe
            + summary.segments.undocumented;
        assert_eq!(total, 30);
        assert_eq!(summary.documented_days, 20);
        assert!(summary.guardrail.ok);
    }

    #[test]
    fn missing_level_counts_as_undocumented_even_when_flagged_documented() {
        let days = vec![
            SeverityDay {
                documented: true,
                max_severity: None,
            },
            documented(SeverityLevel::Severe),
        ];
        let summary = summarize_severity(2, &days);
        assert_eq!(summary.segments.undocumented, 1);
        assert_eq!(summary.documented_days, 1);
    }

    #[test]
    fn a_none_severity_day_is_documented_data_not_a_gap() {
        let days: Vec<SeverityDay> = (0..25).map(|_| documented(SeverityLevel::None)).collect();
        let summary = summarize_severity(25, &days);
        assert_eq!(summary.segments.none, 25);
        assert_eq!(summary.segments.undocumented, 0);
        assert!(summary.guardrail.ok);
    }
}
