//! Error kinds for the crate's fallible operations.
//!
//! `to_i32`/`to_i64` are the sole exception to "every error is surfaced":
//! they return a sentinel (`i32::MIN`/`i64::MIN`) instead of failing, paired
//! with `is_int`/`is_long` so callers can check ahead of time.

/// All failure kinds the crate's parsers, constructors and scalar
/// operations can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigNumError {
    #[error("malformed digit at byte offset {index}: {found:?} is not [0-9]")]
    MalformedDigit { index: usize, found: u8 },

    #[error("empty input")]
    EmptyInput,

    #[error("offset {offset} out of range for buffer of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("invalid length {length} for a starting offset of {offset}")]
    InvalidLength { offset: usize, length: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("incompatible bases: {lhs} vs {rhs}")]
    IncompatibleBases { lhs: u16, rhs: u16 },

    #[error("requested array size exceeds maximum representable length")]
    RequestedArraySizeExceedsMaximum,

    #[error("invalid sign character {found:?} at byte offset {index}")]
    InvalidSign { index: usize, found: u8 },

    #[error("repeated '.' at byte offset {index}")]
    RepeatedDot { index: usize },

    #[error("'.' after exponent at byte offset {index}")]
    DotAfterExponent { index: usize },

    #[error("'.' after period clause at byte offset {index}")]
    DotAfterPeriod { index: usize },

    #[error("repeated exponent marker at byte offset {index}")]
    RepeatedExponent { index: usize },

    #[error("exponent marker after period clause at byte offset {index}")]
    ExponentAfterPeriod { index: usize },

    #[error("exponent marker after a non-digit at byte offset {index}")]
    ExponentAfterNonDigit { index: usize },

    #[error("period marker without a preceding exponent at byte offset {index}")]
    PeriodWithoutExponent { index: usize },

    #[error("repeated period marker at byte offset {index}")]
    RepeatedPeriod { index: usize },

    #[error("period marker after a non-digit at byte offset {index}")]
    PeriodAfterNonDigit { index: usize },

    #[error("input ends with a non-digit character")]
    EndsWithNonDigit,

    #[error("empty period clause")]
    EmptyPeriod,

    #[error("exponent overflow: magnitude exceeds 999999999")]
    ExponentOverflow,

    #[error("precision loss: exponent too small for the significand's digit count")]
    PrecisionLoss,

    #[error("invalid character {found:?} at byte offset {index}")]
    InvalidCharacter { index: usize, found: u8 },
}

pub type BigNumResult<T> = Result<T, BigNumError>;
