use serde::{Deserialize, Serialize};

use crate::models::enums::SeverityLevel;

/// One calendar day of diary data, pre-aggregated by the diary layer.
///
/// `documented` is true when the day saw any diary interaction, including an
/// explicit no-headache check-in. `pain_max` carries the day's highest pain
/// on the diary's 0-10 scale, `None` when no pain level was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub documented: bool,
    pub headache: bool,
    pub pain_max: Option<u8>,
    pub acute_med_used: bool,
    pub triptan_used: bool,
}

/// Pass-through dose totals from the medication module.
///
/// Reported verbatim next to the day counts; the engine never derives day
/// counts from doses or vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeTotals {
    pub acute_doses: u32,
    pub triptan_doses: u32,
}

/// One day of ME/CFS companion-module data.
///
/// `max_severity = None` marks the day undocumented for this module, which
/// is independent of the diary's own `documented` flag for the same date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityDay {
    pub documented: bool,
    pub max_severity: Option<SeverityLevel>,
}
