//! Input data model shared with the collaborator layers.
//!
//! Everything here is produced outside the engine (diary day aggregation,
//! weather join, companion modules) and consumed read-only by
//! `crate::analysis`. Records are plain immutable values; a day record has
//! no identity beyond its position in a date-ordered sequence.

pub mod day;
pub mod enums;
pub mod range;
pub mod weather;

pub use day::*;
pub use enums::*;
pub use range::*;
pub use weather::*;

use thiserror::Error;

/// Errors raised at the input boundary. The analysis functions themselves
/// never fail for well-formed input; thin data degrades the result instead.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Report range ends before it starts: {start} > {end}")]
    RangeInverted {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Report range spans {days} days; reports are capped at {max} days")]
    RangeTooLong { days: i64, max: i64 },
}
