//! Composes the analysis modules into one result bundle.
//!
//! The only entry point collaborator layers call. Optional modules yield
//! `None` when their input is absent; thin data degrades confidence or
//! disables a sub-analysis, it never fails the run. The result depends on
//! nothing but the input snapshot.

use super::core_metrics::compute_core_metrics;
use super::coverage::compute_coverage;
use super::definitions::{definitions, NARRATIVE_DO_NOT_DO};
use super::findings::assemble_findings;
use super::moh::assess_moh;
use super::severity::summarize_severity;
use super::types::{AnalysisBundle, AnalysisInput, Basis, NarrativeConstraints, SCHEMA_VERSION};
use super::weather::analyze_weather;

pub fn run_analysis(input: &AnalysisInput) -> AnalysisBundle {
    let days_in_range = input.range.total_days;

    let core = compute_core_metrics(days_in_range, &input.days, input.intake.clone());
    let moh = assess_moh(&core);

    // Module availability for the coverage audit comes from the inputs
    // themselves: days that actually carry usable data for that module.
    let weather_days_available = input.weather_days.as_ref().map(|days| {
        days.iter()
            .filter(|f| f.documented && f.pressure_mb.is_some())
            .count() as u32
    });
    let mecfs_days_available = input.mecfs_days.as_ref().map(|days| {
        days.iter()
            .filter(|d| d.documented && d.max_severity.is_some())
            .count() as u32
    });

    let coverage = compute_coverage(
        days_in_range,
        core.documented_days,
        weather_days_available,
        mecfs_days_available,
        input.prophylaxis_days,
    );

    // A present-but-empty severity module still gets a summary: the
    // guardrail is what reports "no data". Weather has no such guardrail,
    // so an empty feature list skips the association outright.
    let mecfs_severity = input
        .mecfs_days
        .as_ref()
        .map(|days| summarize_severity(days_in_range, days));

    let weather = match input.weather_days.as_deref() {
        Some([]) => {
            tracing::debug!("weather features present but empty; association skipped");
            None
        }
        Some(features) => Some(analyze_weather(features)),
        None => None,
    };

    let findings = assemble_findings(
        &core,
        &moh,
        &coverage,
        mecfs_severity.as_ref(),
        weather.as_ref(),
    );

    tracing::info!(
        days_in_range,
        documented_days = core.documented_days,
        headache_days = core.headache_days,
        moh_risk = moh.risk_level.as_str(),
        coverage_warnings = coverage.warnings.len(),
        findings = findings.len(),
        "analysis bundle assembled"
    );

    AnalysisBundle {
        schema_version: SCHEMA_VERSION,
        definitions: definitions(),
        basis: Basis {
            range: input.range.clone(),
            days_in_range,
            documented_days: core.documented_days,
            notes_count: input.notes_count,
        },
        core,
        moh,
        coverage,
        mecfs_severity,
        weather,
        findings,
        narrative_constraints: NarrativeConstraints {
            do_not_do: NARRATIVE_DO_NOT_DO.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ConfidenceLevel, CoverageModule, DayRecord, GuardrailReason, ReportRange, RiskLevel,
        SeverityDay, SeverityLevel, WeatherConfidence, WeatherDayFeature, WeatherSignalCoverage,
    };
    use chrono::{Duration, NaiveDate};

    fn range_of_days(n: u32) -> ReportRange {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = start + Duration::days(i64::from(n) - 1);
        ReportRange::new(start, end, "Europe/Berlin").unwrap()
    }

    fn make_input(range_days: u32, days: Vec<DayRecord>) -> AnalysisInput {
        AnalysisInput {
            range: range_of_days(range_days),
            days,
            intake: None,
            mecfs_days: None,
            weather_days: None,
            notes_count: None,
            prophylaxis_days: None,
        }
    }

    /// 60 documented days: the first 40 are headache days with pain
    /// cycling 5..=9, with `acute` acute-medication days and `triptans`
    /// triptan days counted from the front.
    fn quarter_days(acute: u32, triptans: u32) -> Vec<DayRecord> {
        (0..60)
            .map(|i| {
                let headache = i < 40;
                DayRecord {
                    documented: true,
                    headache,
                    pain_max: if headache { Some(5 + (i % 5) as u8) } else { None },
                    acute_med_used: i < acute,
                    triptan_used: i < triptans,
                }
            })
            .collect()
    }

    fn paired_weather_day(offset: i64, delta: f64) -> WeatherDayFeature {
        WeatherDayFeature {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset),
            documented: true,
            pain_max: None,
            had_headache: offset % 2 == 0,
            had_acute_med: false,
            pressure_mb: Some(1010.0),
            pressure_change_24h: Some(delta),
            temperature_c: None,
            humidity_pct: None,
            signal_coverage: WeatherSignalCoverage::PressureOnly,
        }
    }

    #[test]
    fn quarter_with_moderate_use_stays_unremarkable() {
        let input = make_input(90, quarter_days(15, 12));
        let bundle = run_analysis(&input);

        assert_eq!(bundle.basis.days_in_range, 90);
        assert_eq!(bundle.basis.documented_days, 60);
        assert_eq!(bundle.core.headache_days, 40);
        assert_eq!(bundle.core.avg_pain_on_headache_days, Some(7.0));
        assert_eq!(bundle.core.median_pain_on_headache_days, Some(7.0));
        assert_eq!(bundle.core.max_pain, Some(9));

        assert_eq!(bundle.moh.acute_med_days_per_30, 5.0);
        assert_eq!(bundle.moh.triptan_days_per_30, 4.0);
        assert_eq!(bundle.moh.risk_level, RiskLevel::None);
        assert_eq!(bundle.moh.confidence, ConfidenceLevel::High);

        assert_eq!(bundle.coverage.diary.ratio, 0.667);
        assert!(bundle.coverage.warnings.is_empty());

        assert!(bundle.mecfs_severity.is_none());
        assert!(bundle.weather.is_none());
        assert_eq!(bundle.findings.len(), 2);
    }

    #[test]
    fn heavy_acute_use_raises_the_medication_screen() {
        let input = make_input(90, quarter_days(35, 30));
        let bundle = run_analysis(&input);

        assert_eq!(bundle.moh.acute_med_days_per_30, 11.7);
        assert_eq!(bundle.moh.triptan_days_per_30, 10.0);
        assert_eq!(bundle.moh.risk_level, RiskLevel::Likely);
        let finding = bundle
            .findings
            .iter()
            .find(|f| f.id == "moh-risk-screen")
            .unwrap();
        assert!(finding.statement.contains("11.7"));
    }

    #[test]
    fn sparse_severity_module_is_guarded_not_extrapolated() {
        let mut input = make_input(90, quarter_days(15, 12));
        input.mecfs_days = Some(
            (0..5)
                .map(|_| SeverityDay {
                    documented: true,
                    max_severity: Some(SeverityLevel::Moderate),
                })
                .collect(),
        );
        let bundle = run_analysis(&input);

        let summary = bundle.mecfs_severity.as_ref().unwrap();
        assert!(!summary.guardrail.ok);
        assert_eq!(summary.guardrail.reason, Some(GuardrailReason::TooFewDays));
        assert_eq!(summary.segments.undocumented, 85);
        assert!(summary.no_extrapolation);

        assert_eq!(bundle.coverage.mecfs.as_ref().unwrap().available, 5);
        assert!(bundle
            .findings
            .iter()
            .any(|f| f.id == "mecfs-severity-guardrail"));
    }

    #[test]
    fn thin_weather_data_disables_the_association() {
        let mut input = make_input(90, quarter_days(15, 12));
        let mut features: Vec<WeatherDayFeature> =
            (0..15).map(|i| paired_weather_day(i, -6.0)).collect();
        for offset in 15..25 {
            features.push(WeatherDayFeature {
                pressure_mb: None,
                pressure_change_24h: None,
                signal_coverage: WeatherSignalCoverage::Missing,
                ..paired_weather_day(offset, 0.0)
            });
        }
        input.weather_days = Some(features);
        let bundle = run_analysis(&input);

        let association = bundle.weather.as_ref().unwrap();
        assert_eq!(association.confidence, WeatherConfidence::Insufficient);
        assert!(!association.pressure_delta24h.enabled);
        assert!(!bundle
            .findings
            .iter()
            .any(|f| f.id == "weather-pressure-association"));

        // 15 of 90 range days carry weather, which is below the warn line.
        assert_eq!(bundle.coverage.weather.as_ref().unwrap().available, 15);
        assert!(bundle
            .coverage
            .warnings
            .iter()
            .any(|w| w.module == CoverageModule::Weather));
    }

    #[test]
    fn rich_weather_data_yields_an_association_finding() {
        let mut input = make_input(90, quarter_days(15, 12));
        input.weather_days = Some(
            (0..70)
                .map(|i| paired_weather_day(i, if i % 2 == 0 { -9.0 } else { 2.0 }))
                .collect(),
        );
        let bundle = run_analysis(&input);

        let association = bundle.weather.as_ref().unwrap();
        assert_eq!(association.confidence, WeatherConfidence::High);
        assert!(association.pressure_delta24h.enabled);
        assert!(bundle
            .findings
            .iter()
            .any(|f| f.id == "weather-pressure-association"));
    }

    #[test]
    fn empty_weather_module_is_skipped() {
        let mut input = make_input(90, quarter_days(15, 12));
        input.weather_days = Some(Vec::new());
        let bundle = run_analysis(&input);
        assert!(bundle.weather.is_none());
        assert_eq!(bundle.coverage.weather.as_ref().unwrap().available, 0);
    }

    #[test]
    fn empty_severity_module_reports_no_data() {
        let mut input = make_input(90, quarter_days(15, 12));
        input.mecfs_days = Some(Vec::new());
        let bundle = run_analysis(&input);
        let summary = bundle.mecfs_severity.as_ref().unwrap();
        assert_eq!(summary.guardrail.reason, Some(GuardrailReason::NoData));
    }

    #[test]
    fn bundle_embeds_definitions_and_constraints() {
        let bundle = run_analysis(&make_input(30, Vec::new()));
        assert_eq!(bundle.schema_version, "analysis.v2");
        assert_eq!(bundle.definitions.moh_acute_threshold_per_30, 10.0);
        assert_eq!(bundle.definitions.severity_min_documented_days, 20);
        assert_eq!(bundle.narrative_constraints.do_not_do.len(), 6);
    }

    #[test]
    fn notes_count_passes_through_to_the_basis() {
        let mut input = make_input(30, Vec::new());
        input.notes_count = Some(17);
        let bundle = run_analysis(&input);
        assert_eq!(bundle.basis.notes_count, Some(17));
    }

    #[test]
    fn undocumented_range_still_yields_a_complete_bundle() {
        let bundle = run_analysis(&make_input(30, Vec::new()));
        assert_eq!(bundle.core.documented_days, 0);
        assert_eq!(bundle.core.undocumented_days, 30);
        assert_eq!(bundle.moh.risk_level, RiskLevel::None);
        assert!(bundle
            .coverage
            .warnings
            .iter()
            .any(|w| w.module == CoverageModule::Diary));
        assert_eq!(bundle.findings.len(), 2);
    }

    #[test]
    fn identical_input_yields_identical_bundles() {
        let mut input = make_input(90, quarter_days(35, 12));
        input.notes_count = Some(4);
        input.mecfs_days = Some(
            (0..25)
                .map(|i| SeverityDay {
                    documented: true,
                    max_severity: Some(if i % 2 == 0 {
                        SeverityLevel::Mild
                    } else {
                        SeverityLevel::Severe
                    }),
                })
                .collect(),
        );
        input.weather_days = Some(
            (0..40)
                .map(|i| paired_weather_day(i, if i % 3 == 0 { -9.0 } else { 1.0 }))
                .collect(),
        );

        let first = run_analysis(&input);
        let second = run_analysis(&input);
        assert_eq!(first, second);
        assert_eq!(
            first.to_canonical_json().unwrap(),
            second.to_canonical_json().unwrap()
        );
    }

    #[test]
    fn canonical_json_uses_snake_case_values() {
        let input = make_input(90, quarter_days(35, 0));
        let bundle = run_analysis(&input);
        let value: serde_json::Value =
            serde_json::from_str(&bundle.to_canonical_json().unwrap()).unwrap();
        assert_eq!(value["schema_version"], "analysis.v2");
        assert_eq!(value["moh"]["risk_level"], "likely");
        assert_eq!(value["core"]["migraine_days"], serde_json::Value::Null);
        assert!(value["weather"].is_null());
        assert_eq!(value["findings"][0]["id"], "coverage-documentation");
    }
}
