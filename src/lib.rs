//! Migralog analysis core.
//!
//! Deterministic, physician-facing metrics computed from per-day headache
//! diary aggregates. This crate is the pure computation layer of the app:
//! the diary store, report snapshot cache, document rendering, and
//! narrative generation live in collaborator crates and feed the engine
//! through the `models` types.
//!
//! Logging goes through `tracing`; callers install whatever subscriber
//! fits their binary.

pub mod analysis; // KPIs, MOH screen, coverage, severity, weather, findings
pub mod models; // input data model shared with the collaborator layers

pub use analysis::{run_analysis, AnalysisBundle, AnalysisInput};
pub use models::ModelError;
