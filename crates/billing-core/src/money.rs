//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a billing engine that splits fees and refunds:                      │
//! │    1000 kr × 0.5 twice may not reassemble to 1000 kr                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Öre                                              │
//! │    100000 öre × 50% = 50000 öre, and 50000 + 50000 = 100000            │
//! │    Fee + refund always equals the total, exactly                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Additions and subtractions are exact in integer öre. Rounding happens in
//! exactly one place: when scaling by a [`Multiplier`] (season) or a
//! [`FeeRate`] (cancellation fraction), round-half-up to the nearest öre.
//! Intermediate surcharge additions are never rounded, so rounding error
//! cannot compound across steps.
//!
//! ## Usage
//! ```rust
//! use billing_core::money::Money;
//!
//! // Create from öre (preferred)
//! let price = Money::from_ore(45_000); // 450.00 kr
//!
//! // Arithmetic operations
//! let with_surcharge = price + Money::from_ore(5_000); // 500.00 kr
//! let three_nights = with_surcharge * 3;               // 1500.00 kr
//!
//! // NEVER do this:
//! // let bad = Money::from_float(450.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{FeeRate, Multiplier};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (öre for SEK).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refund deltas, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PricingConfig.base_price ──► night subtotal ──► StayQuote.total       │
/// │                                                                         │
/// │  StayQuote.total ──► evaluate_cancellation ──► fee + refund            │
/// │                                                                         │
/// │  EVERY monetary value in the billing core flows through this type     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from öre (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// let price = Money::from_ore(45_000); // Represents 450.00 kr
    /// assert_eq!(price.ore(), 45_000);
    /// ```
    #[inline]
    pub const fn from_ore(ore: i64) -> Self {
        Money(ore)
    }

    /// Creates a Money value from major and minor units (kronor and öre).
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// let price = Money::from_kronor(450, 50); // 450.50 kr
    /// assert_eq!(price.ore(), 45_050);
    ///
    /// let negative = Money::from_kronor(-5, 50); // -5.50 kr
    /// assert_eq!(negative.ore(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_kronor(-5, 50)` = -5.50 kr, not -4.50 kr
    #[inline]
    pub const fn from_kronor(kronor: i64, ore: i64) -> Self {
        if kronor < 0 {
            Money(kronor * 100 - ore)
        } else {
            Money(kronor * 100 + ore)
        }
    }

    /// Returns the value in öre (smallest currency unit).
    #[inline]
    pub const fn ore(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (kronor) portion.
    #[inline]
    pub const fn kronor(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (öre) portion (always 0-99).
    #[inline]
    pub const fn ore_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Scales by a season multiplier, rounding half-up to the nearest öre.
    ///
    /// ## Implementation
    /// Integer math: `(öre × bps + 5000) / 10000`
    /// The +5000 provides half-up rounding (5000/10000 = 0.5).
    /// i128 intermediate prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    /// use billing_core::types::Multiplier;
    ///
    /// let subtotal = Money::from_ore(50_000);        // 500.00 kr
    /// let summer = Multiplier::from_bps(13_000);     // ×1.3
    ///
    /// assert_eq!(subtotal.apply_multiplier(summer).ore(), 65_000); // 650.00 kr
    /// ```
    pub fn apply_multiplier(&self, multiplier: Multiplier) -> Money {
        let scaled = (self.0 as i128 * multiplier.bps() as i128 + 5000) / 10000;
        Money::from_ore(scaled as i64)
    }

    /// Takes a fraction of this amount, rounding half-up to the nearest öre.
    ///
    /// Used for cancellation fees: `fee = total.apply_fraction(rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    /// use billing_core::types::FeeRate;
    ///
    /// let total = Money::from_ore(100_000);  // 1000.00 kr
    /// let half = FeeRate::from_bps(5_000);   // 50%
    /// assert_eq!(total.apply_fraction(half).ore(), 50_000);
    ///
    /// // Half-up at the öre boundary:
    /// let odd = Money::from_ore(333);
    /// assert_eq!(odd.apply_fraction(half).ore(), 167); // 166.5 rounds up
    /// ```
    pub fn apply_fraction(&self, rate: FeeRate) -> Money {
        let scaled = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_ore(scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This matches the customer-facing Swedish format ("450.00 kr") used in
/// cancellation summaries. Localized display beyond that is the frontend's
/// concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} kr",
            sign,
            self.kronor().abs(),
            self.ore_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for night counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i32) -> Self {
        Money(self.0 * count as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ore() {
        let money = Money::from_ore(45_099);
        assert_eq!(money.ore(), 45_099);
        assert_eq!(money.kronor(), 450);
        assert_eq!(money.ore_part(), 99);
    }

    #[test]
    fn test_from_kronor() {
        let money = Money::from_kronor(450, 50);
        assert_eq!(money.ore(), 45_050);

        let negative = Money::from_kronor(-5, 50);
        assert_eq!(negative.ore(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_ore(45_099)), "450.99 kr");
        assert_eq!(format!("{}", Money::from_ore(50_000)), "500.00 kr");
        assert_eq!(format!("{}", Money::from_ore(-550)), "-5.50 kr");
        assert_eq!(format!("{}", Money::from_ore(0)), "0.00 kr");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_ore(1000);
        let b = Money::from_ore(500);

        assert_eq!((a + b).ore(), 1500);
        assert_eq!((a - b).ore(), 500);
        let result: Money = a * 3;
        assert_eq!(result.ore(), 3000);
    }

    #[test]
    fn test_apply_multiplier_exact() {
        // 500.00 kr × 1.3 = 650.00 kr, no rounding needed
        let subtotal = Money::from_ore(50_000);
        let summer = Multiplier::from_bps(13_000);
        assert_eq!(subtotal.apply_multiplier(summer).ore(), 65_000);
    }

    #[test]
    fn test_apply_multiplier_rounds_half_up() {
        // 333 öre × 1.5 = 499.5 öre → 500 öre
        let amount = Money::from_ore(333);
        let rate = Multiplier::from_bps(15_000);
        assert_eq!(amount.apply_multiplier(rate).ore(), 500);
    }

    #[test]
    fn test_apply_multiplier_identity_and_zero() {
        let amount = Money::from_ore(45_000);
        assert_eq!(amount.apply_multiplier(Multiplier::identity()), amount);
        // A ×0 season (promotional closure) is valid and yields zero
        assert_eq!(amount.apply_multiplier(Multiplier::from_bps(0)), Money::zero());
    }

    #[test]
    fn test_apply_fraction() {
        let total = Money::from_ore(100_000);
        assert_eq!(total.apply_fraction(FeeRate::from_bps(5_000)).ore(), 50_000);
        assert_eq!(total.apply_fraction(FeeRate::zero()).ore(), 0);
        assert_eq!(total.apply_fraction(FeeRate::full()).ore(), 100_000);
    }

    #[test]
    fn test_apply_fraction_rounds_half_up() {
        // 333 öre at 50% = 166.5 öre → 167 öre
        let odd = Money::from_ore(333);
        assert_eq!(odd.apply_fraction(FeeRate::from_bps(5_000)).ore(), 167);
    }

    /// Critical invariant: fee + refund reassembles the total exactly,
    /// because the refund is computed by subtraction, not a second rounding.
    #[test]
    fn test_fee_plus_refund_is_exact() {
        for total_ore in [1, 33, 333, 33_333, 100_000, 987_654_321] {
            let total = Money::from_ore(total_ore);
            let fee = total.apply_fraction(FeeRate::from_bps(5_000));
            let refund = total - fee;
            assert_eq!(fee + refund, total);
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_ore(100);
        assert!(positive.is_positive());

        let negative = Money::from_ore(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().ore(), 100);
    }
}
