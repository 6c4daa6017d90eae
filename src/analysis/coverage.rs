//! Documentation-coverage audit across the diary and companion modules.
//!
//! Coverage is a data-quality statement, not a clinical one. A module the
//! user never activated is reported as absent and never warned about; only
//! measured insufficiency on present data produces a warning.

use serde::Serialize;

use crate::models::CoverageModule;

use super::definitions::{DIARY_COVERAGE_WARN_BELOW, WEATHER_COVERAGE_WARN_BELOW};
use super::helpers::ratio;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleCoverage {
    /// Days in the range with data from this module.
    pub available: u32,
    /// Days in the report range.
    pub total: u32,
    /// `available / total`, 0.0 for an empty range.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageWarning {
    pub module: CoverageModule,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub diary: ModuleCoverage,
    pub weather: Option<ModuleCoverage>,
    pub mecfs: Option<ModuleCoverage>,
    pub prophylaxis: Option<ModuleCoverage>,
    /// Ordered diary-first; at most one warning per module.
    pub warnings: Vec<CoverageWarning>,
}

pub fn compute_coverage(
    days_in_range: u32,
    documented_days: u32,
    weather_days_available: Option<u32>,
    mecfs_days_available: Option<u32>,
    prophylaxis_days_available: Option<u32>,
) -> CoverageReport {
    let diary = module_coverage(documented_days, days_in_range);
    let weather = weather_days_available.map(|n| module_coverage(n, days_in_range));
    let mecfs = mecfs_days_available.map(|n| module_coverage(n, days_in_range));
    let prophylaxis = prophylaxis_days_available.map(|n| module_coverage(n, days_in_range));

    let mut warnings = Vec::new();
    if days_in_range > 0 && diary.ratio < DIARY_COVERAGE_WARN_BELOW {
        warnings.push(CoverageWarning {
            module: CoverageModule::Diary,
            message: format!(
                "Diary entries cover {:.0}% of the report range; all counts and rates rest on \
                 documented days only.",
                diary.ratio * 100.0
            ),
        });
    }
    if let Some(coverage) = &weather {
        if days_in_range > 0 && coverage.ratio < WEATHER_COVERAGE_WARN_BELOW {
            warnings.push(CoverageWarning {
                module: CoverageModule::Weather,
                message: format!(
                    "Weather data covers {:.0}% of the report range; the pressure association \
                     analysis may be underpowered.",
                    coverage.ratio * 100.0
                ),
            });
        }
    }

    CoverageReport {
        diary,
        weather,
        mecfs,
        prophylaxis,
        warnings,
    }
}

fn module_coverage(available: u32, total: u32) -> ModuleCoverage {
    ModuleCoverage {
        available,
        total,
        ratio: ratio(available, total),
    }
}
