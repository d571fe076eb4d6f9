//! # Domain Types
//!
//! Shared scalar types used throughout the billing core.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Multiplier    │   │    FeeRate      │   │  BookingStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  Pending        │       │
//! │  │  13000 = ×1.3   │   │  5000 = 50%     │   │  Confirmed      │       │
//! │  │  season scaling │   │  fee fraction   │   │  CheckedIn/Out  │       │
//! │  └─────────────────┘   └─────────────────┘   │  Cancelled      │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐                                                    │
//! │  │    DogSize      │  Small (< 35 cm) / Medium (35-54) / Large (> 54)  │
//! │  └─────────────────┘  derived from withers height, keys the rate card  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Basis Points?
//! 1 basis point = 0.01% = 1/10000. Both scaling types store basis points in
//! a `u32` so all money scaling stays in integer arithmetic; floats appear
//! only at construction and display edges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Multiplier
// =============================================================================

/// A season price multiplier in basis points.
///
/// `10000` = ×1.0 (identity), `13000` = ×1.3, `0` = ×0 (a valid promotional
/// closure, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Creates a multiplier from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Creates a multiplier from a decimal factor (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::types::Multiplier;
    ///
    /// assert_eq!(Multiplier::from_factor(1.3).bps(), 13_000);
    /// ```
    pub fn from_factor(factor: f64) -> Self {
        Multiplier((factor * 10_000.0).round() as u32)
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a decimal factor (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Identity multiplier (×1.0) — applied when no season matches a date.
    #[inline]
    pub const fn identity() -> Self {
        Multiplier(10_000)
    }

    /// Checks if the multiplier is the identity.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 10_000
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::identity()
    }
}

// =============================================================================
// Fee Rate
// =============================================================================

/// A cancellation fee fraction in basis points.
///
/// Represents the proportion of the total price retained as a fee:
/// `0` = no fee, `5000` = 50%, `10000` = full price. Values above `10000`
/// are rejected by [`crate::validation::validate_fee_rate`] when a policy
/// is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeRate(u32);

impl FeeRate {
    /// Creates a fee rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        FeeRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::types::FeeRate;
    ///
    /// assert_eq!(FeeRate::from_bps(5_000).percentage(), 50.0);
    /// ```
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero fee.
    #[inline]
    pub const fn zero() -> Self {
        FeeRate(0)
    }

    /// Full fee (100% of the total price).
    #[inline]
    pub const fn full() -> Self {
        FeeRate(10_000)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        FeeRate::zero()
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// The status of a boarding booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Booking requested, not yet confirmed by the organization.
    Pending,
    /// Booking confirmed; the dog has not arrived yet.
    Confirmed,
    /// The dog has been checked in (stay in progress).
    CheckedIn,
    /// The stay is finished and the dog has been picked up.
    CheckedOut,
    /// Booking was cancelled.
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

// =============================================================================
// Dog Size
// =============================================================================

/// Size category of a dog, derived from withers height.
///
/// The rate card keys base prices by size category rather than exact height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DogSize {
    /// Withers height below 35 cm.
    Small,
    /// Withers height 35-54 cm.
    Medium,
    /// Withers height above 54 cm.
    Large,
}

impl DogSize {
    /// Categorizes a dog by withers height in centimeters.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::types::DogSize;
    ///
    /// assert_eq!(DogSize::from_height_cm(30.0), DogSize::Small);
    /// assert_eq!(DogSize::from_height_cm(45.0), DogSize::Medium);
    /// assert_eq!(DogSize::from_height_cm(60.0), DogSize::Large);
    /// ```
    pub fn from_height_cm(cm: f64) -> Self {
        if cm < 35.0 {
            DogSize::Small
        } else if cm <= 54.0 {
            DogSize::Medium
        } else {
            DogSize::Large
        }
    }
}

// =============================================================================
// Date Parsing
// =============================================================================

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// The booking workflow stores dates as strings; this is the single place
/// they are converted into typed dates, failing with
/// [`CoreError::InvalidDate`] on malformed input.
///
/// ## Example
/// ```rust
/// use billing_core::types::parse_date;
///
/// assert!(parse_date("2025-06-19").is_ok());
/// assert!(parse_date("19/06/2025").is_err());
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| CoreError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_from_factor() {
        assert_eq!(Multiplier::from_factor(1.3).bps(), 13_000);
        assert_eq!(Multiplier::from_factor(1.0).bps(), 10_000);
        assert_eq!(Multiplier::from_factor(0.0).bps(), 0);
    }

    #[test]
    fn test_multiplier_identity_default() {
        assert!(Multiplier::default().is_identity());
        assert!((Multiplier::identity().factor() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fee_rate_percentage() {
        assert_eq!(FeeRate::from_bps(5_000).percentage(), 50.0);
        assert_eq!(FeeRate::zero().percentage(), 0.0);
        assert_eq!(FeeRate::full().percentage(), 100.0);
    }

    #[test]
    fn test_booking_status_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_dog_size_boundaries() {
        // Boundary at 35 cm: strictly below is small
        assert_eq!(DogSize::from_height_cm(34.9), DogSize::Small);
        assert_eq!(DogSize::from_height_cm(35.0), DogSize::Medium);
        // Boundary at 54 cm: 54 is still medium
        assert_eq!(DogSize::from_height_cm(54.0), DogSize::Medium);
        assert_eq!(DogSize::from_height_cm(54.1), DogSize::Large);
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-06-19").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 19).unwrap());

        // Leading/trailing whitespace is tolerated
        assert!(parse_date(" 2025-06-19 ").is_ok());

        assert!(matches!(
            parse_date("2025-13-40"),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date(""),
            Err(CoreError::InvalidDate { .. })
        ));
    }
}
