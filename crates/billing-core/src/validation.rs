//! # Validation Module
//!
//! Configuration validation utilities for the billing core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, negative)                             │
//! │  └── Immediate user feedback in the admin price screens                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Config constructors (Rust)                                   │
//! │  └── THIS MODULE: called by PricingConfig::new, RateCard::new,         │
//! │      CancellationPolicy::new at configuration-load time                │
//! │                                                                         │
//! │  Once a config value exists, every calculation over it is total —      │
//! │  there is no per-night re-validation inside the pricing loop           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::types::FeeRate;
//! use billing_core::validation::{validate_price, validate_fee_rate};
//!
//! validate_price("base_price", Money::from_ore(45_000)).unwrap();
//! validate_fee_rate("days_3_to_7", FeeRate::from_bps(5_000)).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::FeeRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates a configured price or surcharge.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free nights, zero surcharge)
///
/// ## Example
/// ```rust
/// use billing_core::money::Money;
/// use billing_core::validation::validate_price;
///
/// assert!(validate_price("base_price", Money::from_ore(45_000)).is_ok());
/// assert!(validate_price("base_price", Money::zero()).is_ok());
/// assert!(validate_price("base_price", Money::from_ore(-100)).is_err());
/// ```
pub fn validate_price(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            ore: amount.ore(),
        });
    }

    Ok(())
}

// =============================================================================
// Fraction Validators
// =============================================================================

/// Validates a cancellation fee rate.
///
/// ## Rules
/// - Must be between 0 and 10000 basis points (0% to 100% of the total)
pub fn validate_fee_rate(field: &str, rate: FeeRate) -> ValidationResult<()> {
    if rate.bps() > 10_000 {
        return Err(ValidationError::FractionOutOfRange {
            field: field.to_string(),
            value: rate.bps() as f64 / 10_000.0,
        });
    }

    Ok(())
}

/// Validates a raw fee fraction before it is converted to basis points.
///
/// Policy documents store fractions as decimals (`0.5` = 50%), so the range
/// check has to happen on the raw value — a negative fraction would be lost
/// in the float-to-bps cast.
pub fn validate_fraction(field: &str, fraction: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&fraction) || fraction.is_nan() {
        return Err(ValidationError::FractionOutOfRange {
            field: field.to_string(),
            value: fraction,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
