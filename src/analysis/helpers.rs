//! Small numeric helpers shared across the analysis modules.
//!
//! All rounding in the crate funnels through `round_to` so every module
//! applies the same half-away-from-zero rule.

/// Round half away from zero to `decimals` places (`f64::round` semantics).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Ratio `part / whole` rounded to 3 decimals; 0.0 when `whole` is zero.
pub fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64, 3)
}

/// Event rate `events / days` rounded to 3 decimals; `None` when `days`
/// is zero, so an empty sample never masquerades as a zero rate.
pub fn rate(events: u32, days: u32) -> Option<f64> {
    if days == 0 {
        return None;
    }
    Some(round_to(events as f64 / days as f64, 3))
}

/// Mean of a pain sample rounded to 1 decimal; `None` when empty.
pub fn mean_1dp(values: &[u8]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
    Some(round_to(f64::from(sum) / values.len() as f64, 1))
}

/// Median of a pain sample rounded to 1 decimal; `None` when empty.
/// Even-sized samples take the mean of the two middle values.
pub fn median_1dp(values: &[u8]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    };
    Some(round_to(median, 1))
}
