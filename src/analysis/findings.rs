//! Templated findings for the downstream narrative generator.
//!
//! Every finding is assembled from already-computed values and lists the
//! bundle paths it interpolated, so rendered text can be audited back to
//! the numbers. Nothing here invents a statistic or free-composes prose.

use serde::Serialize;

use crate::models::{
    ConfidenceLevel, FindingCategory, GuardrailReason, RiskLevel, WeatherConfidence,
};

use super::core_metrics::CoreMetrics;
use super::coverage::CoverageReport;
use super::definitions::SEVERITY_MIN_DOCUMENTED_DAYS;
use super::helpers::ratio;
use super::moh::MohAssessment;
use super::severity::SeveritySummary;
use super::weather::{PressureBucket, WeatherAssociation};

/// Documentation ratio at or above which a count finding reads as high
/// confidence; above the medium bound it reads as medium.
const HIGH_CONFIDENCE_COVERAGE: f64 = 0.8;
const MEDIUM_CONFIDENCE_COVERAGE: f64 = 0.5;

/// A numerically grounded claim. Input to the narrative generator, never
/// free prose itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Stable slug; identical input yields the identical id.
    pub id: &'static str,
    pub category: FindingCategory,
    pub title: &'static str,
    pub statement: String,
    /// Bundle paths of the values interpolated into `statement`.
    pub metrics_used: Vec<&'static str>,
    pub basis: FindingBasis,
    pub confidence: ConfidenceLevel,
    pub limitations: Option<String>,
}

/// The sample a statement rests on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingBasis {
    pub n_days: u32,
    pub coverage: f64,
}

/// Builds the findings list in its fixed order: coverage, headache
/// summary, then the conditional medication, severity, and weather
/// findings. Order and ids are part of the reproducible output.
pub fn assemble_findings(
    core: &CoreMetrics,
    moh: &MohAssessment,
    coverage: &CoverageReport,
    severity: Option<&SeveritySummary>,
    weather: Option<&WeatherAssociation>,
) -> Vec<Finding> {
    let mut findings = vec![
        coverage_finding(core, coverage),
        headache_summary_finding(core, coverage),
    ];
    if moh.risk_level != RiskLevel::None {
        findings.push(moh_finding(core, moh, coverage));
    }
    if let Some(summary) = severity {
        if !summary.guardrail.ok {
            findings.push(severity_guardrail_finding(summary));
        }
    }
    if let Some(association) = weather {
        if association.pressure_delta24h.enabled {
            findings.push(weather_finding(association));
        }
    }
    findings
}

fn coverage_finding(core: &CoreMetrics, coverage: &CoverageReport) -> Finding {
    Finding {
        id: "coverage-documentation",
        category: FindingCategory::Coverage,
        title: "Diary documentation coverage",
        statement: format!(
            "{} of {} days in the report range carry diary documentation ({:.0}%).",
            core.documented_days,
            core.days_in_range,
            coverage.diary.ratio * 100.0
        ),
        metrics_used: vec![
            "core.documented_days",
            "core.days_in_range",
            "coverage.diary.ratio",
        ],
        basis: FindingBasis {
            n_days: core.days_in_range,
            coverage: coverage.diary.ratio,
        },
        confidence: ConfidenceLevel::High,
        limitations: if core.undocumented_days > 0 {
            Some(format!(
                "{} days are undocumented and excluded from every rate.",
                core.undocumented_days
            ))
        } else {
            None
        },
    }
}

fn headache_summary_finding(core: &CoreMetrics, coverage: &CoverageReport) -> Finding {
    let mut statement = format!(
        "{} of {} documented days recorded a headache.",
        core.headache_days, core.documented_days
    );
    let mut metrics_used = vec!["core.headache_days", "core.documented_days"];
    if let Some(avg) = core.avg_pain_on_headache_days {
        statement.push_str(&format!(
            " Average maximum pain on headache days was {avg:.1} of 10."
        ));
        metrics_used.push("core.avg_pain_on_headache_days");
    }
    Finding {
        id: "headache-day-summary",
        category: FindingCategory::Headache,
        title: "Headache days in range",
        statement,
        metrics_used,
        basis: FindingBasis {
            n_days: core.documented_days,
            coverage: coverage.diary.ratio,
        },
        confidence: grade_by_coverage(coverage.diary.ratio),
        limitations: Some(
            "Counts cover documented days only; the diary holds no migraine diagnosis flag."
                .to_string(),
        ),
    }
}

fn moh_finding(core: &CoreMetrics, moh: &MohAssessment, coverage: &CoverageReport) -> Finding {
    Finding {
        id: "moh-risk-screen",
        category: FindingCategory::Medication,
        title: "Acute-medication frequency screen",
        statement: moh.rationale.clone(),
        metrics_used: vec![
            "moh.risk_level",
            "moh.acute_med_days_per_30",
            "moh.triptan_days_per_30",
        ],
        basis: FindingBasis {
            n_days: core.days_in_range,
            coverage: coverage.diary.ratio,
        },
        confidence: moh.confidence.clone(),
        limitations: Some(
            "Screen over documented intake days only; not a diagnosis.".to_string(),
        ),
    }
}

fn severity_guardrail_finding(summary: &SeveritySummary) -> Finding {
    let statement = match &summary.guardrail.reason {
        Some(GuardrailReason::NoData) => {
            "No severity days are documented in this range, so the severity burden is not \
             summarized."
                .to_string()
        }
        _ => format!(
            "Severity data covers {} documented days; at least {} are needed before a burden \
             summary is made.",
            summary.documented_days, SEVERITY_MIN_DOCUMENTED_DAYS
        ),
    };
    Finding {
        id: "mecfs-severity-guardrail",
        category: FindingCategory::Severity,
        title: "Severity summary withheld",
        statement,
        metrics_used: vec![
            "mecfs_severity.documented_days",
            "mecfs_severity.guardrail.reason",
        ],
        basis: FindingBasis {
            n_days: summary.documented_days,
            coverage: ratio(summary.documented_days, summary.days_in_range),
        },
        confidence: ConfidenceLevel::High,
        limitations: Some("Undocumented days are never filled by projection.".to_string()),
    }
}

fn weather_finding(association: &WeatherAssociation) -> Finding {
    let delta = &association.pressure_delta24h;
    let mut statement = format!(
        "Across {} documented days with paired pressure data, headache frequency by 24h \
         pressure change was: {}.",
        delta.paired_days,
        bucket_rates_text(&delta.buckets)
    );
    let mut metrics_used = vec![
        "weather.pressure_delta24h.paired_days",
        "weather.pressure_delta24h.buckets",
    ];
    if let Some(rr) = &delta.relative_risk {
        match rr.ratio {
            Some(ratio) => statement.push_str(&format!(
                " Days after a {} saw {ratio:.2} times the headache rate of {} days.",
                rr.comparison.human_label(),
                rr.reference.human_label()
            )),
            None => statement.push_str(&format!(
                " The reference rate was zero; only the absolute difference of {:.1} percentage \
                 points is reported.",
                rr.absolute_difference * 100.0
            )),
        }
        metrics_used.push("weather.pressure_delta24h.relative_risk");
    }
    Finding {
        id: "weather-pressure-association",
        category: FindingCategory::Weather,
        title: "Pressure-change association",
        statement,
        metrics_used,
        basis: FindingBasis {
            n_days: delta.paired_days,
            coverage: association.coverage.delta24h_ratio,
        },
        confidence: match association.confidence {
            WeatherConfidence::High => ConfidenceLevel::High,
            WeatherConfidence::Medium => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        },
        limitations: Some(association.disclaimer.clone()),
    }
}

fn bucket_rates_text(buckets: &[PressureBucket]) -> String {
    let parts: Vec<String> = buckets
        .iter()
        .map(|bucket| match bucket.headache_rate {
            Some(rate) => format!(
                "{} {:.0}% (n={})",
                bucket.label.human_label(),
                rate * 100.0,
                bucket.days
            ),
            None => format!("{} no days", bucket.label.human_label()),
        })
        .collect();
    parts.join(", ")
}

fn grade_by_coverage(coverage: f64) -> ConfidenceLevel {
    if coverage >= HIGH_CONFIDENCE_COVERAGE {
        ConfidenceLevel::High
    } else if coverage >= MEDIUM_CONFIDENCE_COVERAGE {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
