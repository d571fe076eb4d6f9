//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billing-core errors (this file)                                       │
//! │  ├── CoreError        - Calculation-level failures                     │
//! │  └── ValidationError  - Configuration validation failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (API / workflow layer)     │
//! │                                                                         │
//! │  Exception: the OCR validator returns `false` instead of erroring —    │
//! │  it is a predicate over untrusted strings, not a precondition check    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (dates, field names, values)
//! 3. Errors are enum variants, never String
//! 4. All errors are caller-recoverable; nothing here is fatal

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Billing calculation errors.
///
/// These are raised synchronously at the point of the bad input. There is no
/// recovery-and-continue behavior inside the core; the caller decides whether
/// to surface the error or substitute a default.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stay date range ends before it starts.
    ///
    /// ## When This Occurs
    /// - Check-out date earlier than check-in date
    /// - Swapped date arguments from the booking form
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Organization configuration is malformed (wraps ValidationError).
    ///
    /// ## When This Occurs
    /// - Negative base price or surcharge
    /// - Cancellation fee fraction outside [0, 1]
    /// - Overlapping season ranges
    ///
    /// This is a data-integrity violation, not a runtime user error.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),

    /// A date string could not be parsed.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
///
/// These occur when organization-scoped configuration (price tables,
/// cancellation policies, season ranges) fails its load-time checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A monetary amount that must not be negative is negative.
    #[error("{field} must not be negative (got {ore} öre)")]
    MustBeNonNegative { field: String, ore: i64 },

    /// A fee fraction is outside the valid [0, 1] range.
    #[error("{field} must be a fraction between 0 and 1 (got {value})")]
    FractionOutOfRange { field: String, value: f64 },

    /// Two configured season ranges overlap.
    ///
    /// Overlapping seasons would make the nightly multiplier ambiguous,
    /// so they are rejected when the configuration is loaded.
    #[error("season '{first}' overlaps season '{second}'")]
    OverlappingSeasons { first: String, second: String },

    /// A season range ends before it starts.
    #[error("season '{name}' ends ({end}) before it starts ({start})")]
    EndBeforeStart {
        name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Duplicate configuration entry (e.g. two specials on the same date).
    #[error("{field} '{value}' is configured twice")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 19).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: end 2025-06-19 is before start 2025-06-22"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "base_price".to_string(),
            ore: -500,
        };
        assert_eq!(err.to_string(), "base_price must not be negative (got -500 öre)");

        let err = ValidationError::OverlappingSeasons {
            first: "Sommar".to_string(),
            second: "Midsommar".to_string(),
        };
        assert_eq!(err.to_string(), "season 'Sommar' overlaps season 'Midsommar'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::FractionOutOfRange {
            field: "days_3_to_7".to_string(),
            value: 1.5,
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidConfiguration(_)));
    }
}
