use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::WeatherSignalCoverage;

/// Per-day join of diary outcome and weather signal, produced by the
/// weather-join layer.
///
/// The analyzer counts signal presence from the option fields themselves.
/// `signal_coverage` is the join layer's own classification of the day and
/// is reported back as-is, never re-derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDayFeature {
    pub date: NaiveDate,
    pub documented: bool,
    pub pain_max: Option<u8>,
    pub had_headache: bool,
    pub had_acute_med: bool,
    /// Station pressure in hPa (millibars).
    pub pressure_mb: Option<f64>,
    /// Pressure change over the trailing 24h window, in hPa.
    pub pressure_change_24h: Option<f64>,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub signal_coverage: WeatherSignalCoverage,
}
