//! Engine input snapshot and the versioned result bundle.

use serde::{Deserialize, Serialize};

use crate::models::{DayRecord, IntakeTotals, ReportRange, SeverityDay, WeatherDayFeature};

use super::core_metrics::CoreMetrics;
use super::coverage::CoverageReport;
use super::definitions::Definitions;
use super::findings::Finding;
use super::moh::MohAssessment;
use super::severity::SeveritySummary;
use super::weather::WeatherAssociation;

/// Schema tag carried by every bundle this crate produces. Bump only with
/// a structural change; the snapshot cache keys on it.
pub const SCHEMA_VERSION: &str = "analysis.v2";

/// Pre-fetched input for one analysis run.
///
/// The collaborator layers assemble this snapshot; the engine only reads
/// it. Keeping every optional module as plain data on the snapshot keeps
/// the analysis functions pure and testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub range: ReportRange,
    /// Date-ordered per-day diary aggregates. May cover fewer days than
    /// the range; missing days count as undocumented.
    pub days: Vec<DayRecord>,
    pub intake: Option<IntakeTotals>,
    /// ME/CFS companion-module days, when that module is active.
    pub mecfs_days: Option<Vec<SeverityDay>>,
    /// Weather-join features, when weather tracking is active.
    pub weather_days: Option<Vec<WeatherDayFeature>>,
    /// Free-text note count, passed through into the basis block.
    pub notes_count: Option<u32>,
    /// Days with documented prophylaxis intake, when that module is active.
    pub prophylaxis_days: Option<u32>,
}

/// Range and sample metadata every finding ultimately rests on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Basis {
    pub range: ReportRange,
    pub days_in_range: u32,
    pub documented_days: u32,
    pub notes_count: Option<u32>,
}

/// Constraints the downstream narrative generator must honor, embedded in
/// the bundle so the generator needs no out-of-band rule list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeConstraints {
    pub do_not_do: Vec<&'static str>,
}

/// One immutable analysis result.
///
/// Treated as opaque JSON by the snapshot cache, the document renderer,
/// and the narrative generator. Field order is fixed; identical input
/// serializes to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisBundle {
    pub schema_version: &'static str,
    pub definitions: Definitions,
    pub basis: Basis,
    pub core: CoreMetrics,
    pub moh: MohAssessment,
    pub coverage: CoverageReport,
    pub mecfs_severity: Option<SeveritySummary>,
    pub weather: Option<WeatherAssociation>,
    pub findings: Vec<Finding>,
    pub narrative_constraints: NarrativeConstraints,
}

impl AnalysisBundle {
    /// Canonical JSON for cache keying and diffing: compact separators,
    /// struct-declaration field order, no map types anywhere in the tree.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
