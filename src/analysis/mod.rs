//! Deterministic clinical-analysis engine.
//!
//! Pure functions over immutable per-day aggregates: day-based KPIs,
//! medication-overuse screening, documentation-coverage auditing, an
//! ME/CFS severity summary behind an inference guardrail, and a
//! barometric-pressure association analysis. Identical input always
//! yields a byte-identical bundle; nothing here reads clocks, generates
//! ids, or touches global state. Downstream layers cache and diff the
//! output to decide whether a report needs regeneration.

pub mod core_metrics;
pub mod coverage;
pub mod definitions;
pub mod findings;
pub mod helpers;
pub mod moh;
pub mod orchestrator;
pub mod severity;
pub mod types;
pub mod weather;

pub use orchestrator::run_analysis;
pub use types::{AnalysisBundle, AnalysisInput};
