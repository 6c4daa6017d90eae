use serde::{Deserialize, Serialize};

use crate::models::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SeverityLevel {
    None => "none",
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(GuardrailReason {
    NoData => "no_data",
    TooFewDays => "too_few_days",
});

str_enum!(PressureBucketLabel {
    StrongDrop => "strong_drop",
    ModerateDrop => "moderate_drop",
    StableRise => "stable_rise",
});

str_enum!(PressureTier {
    Low => "low",
    Normal => "normal",
    High => "high",
});

str_enum!(WeatherSignalCoverage {
    Complete => "complete",
    PressureOnly => "pressure_only",
    Missing => "missing",
});

str_enum!(FindingCategory {
    Coverage => "coverage",
    Headache => "headache",
    Medication => "medication",
    Severity => "severity",
    Weather => "weather",
});

str_enum!(CoverageModule {
    Diary => "diary",
    Weather => "weather",
    Mecfs => "mecfs",
    Prophylaxis => "prophylaxis",
});

impl PressureBucketLabel {
    /// Human wording used inside composed note and finding text.
    pub fn human_label(&self) -> &'static str {
        match self {
            Self::StrongDrop => "strong pressure drop",
            Self::ModerateDrop => "moderate pressure drop",
            Self::StableRise => "stable or rising pressure",
        }
    }
}

// ---------------------------------------------------------------------------
// Ordered ladders
// ---------------------------------------------------------------------------

/// Medication-overuse risk level. Ordering matters: raising either
/// normalized trigger value must never lower the level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Both normalized values sit below 80% of their threshold.
    None,
    /// At least one value is at or above 80% of its threshold.
    Possible,
    /// At least one value is at or above its threshold.
    Likely,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Possible => "possible",
            Self::Likely => "likely",
        }
    }
}

/// Reliability grade attached to a computed result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Sample-size ladder for the weather association analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WeatherConfidence {
    /// Below the minimum paired-day count; the analysis stays disabled.
    Insufficient,
    Low,
    Medium,
    High,
}

impl WeatherConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_level_round_trip() {
        for (variant, s) in [
            (SeverityLevel::None, "none"),
            (SeverityLevel::Mild, "mild"),
            (SeverityLevel::Moderate, "moderate"),
            (SeverityLevel::Severe, "severe"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SeverityLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn pressure_bucket_label_round_trip() {
        for (variant, s) in [
            (PressureBucketLabel::StrongDrop, "strong_drop"),
            (PressureBucketLabel::ModerateDrop, "moderate_drop"),
            (PressureBucketLabel::StableRise, "stable_rise"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(PressureBucketLabel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn weather_signal_coverage_round_trip() {
        for (variant, s) in [
            (WeatherSignalCoverage::Complete, "complete"),
            (WeatherSignalCoverage::PressureOnly, "pressure_only"),
            (WeatherSignalCoverage::Missing, "missing"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(WeatherSignalCoverage::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(SeverityLevel::from_str("extreme").is_err());
        assert!(GuardrailReason::from_str("unknown").is_err());
        assert!(PressureTier::from_str("").is_err());
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&PressureBucketLabel::StrongDrop).unwrap();
        assert_eq!(json, "\"strong_drop\"");
        let json = serde_json::to_string(&SeverityLevel::None).unwrap();
        assert_eq!(json, "\"none\"");
        let json = serde_json::to_string(&RiskLevel::Likely).unwrap();
        assert_eq!(json, "\"likely\"");
        let json = serde_json::to_string(&WeatherConfidence::Insufficient).unwrap();
        assert_eq!(json, "\"insufficient\"");
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::None < RiskLevel::Possible);
        assert!(RiskLevel::Possible < RiskLevel::Likely);
    }

    #[test]
    fn confidence_ladders_ordering() {
        assert!(ConfidenceLevel::Low < ConfidenceLevel::Medium);
        assert!(ConfidenceLevel::Medium < ConfidenceLevel::High);
        assert!(WeatherConfidence::Insufficient < WeatherConfidence::Low);
        assert!(WeatherConfidence::Medium < WeatherConfidence::High);
    }
}
