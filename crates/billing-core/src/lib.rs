//! # billing-core: Pure Billing Logic for the Kennel Platform
//!
//! This crate is the **calculation heart** of a multi-tenant dog daycare,
//! boarding and grooming platform. It contains the billing logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Platform Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Next.js)                           │   │
//! │  │    Booking UI ──► Quote UI ──► Invoice UI ──► Cancel UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Booking / Invoicing Workflow (out of scope)        │   │
//! │  │    loads org config, resolves dates, persists results          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ billing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐               │   │
//! │  │   │  pricing  │  │ cancellation │  │    ocr    │               │   │
//! │  │   │ stay price│  │  fee/refund  │  │ reference │               │   │
//! │  │   │ per night │  │  day tiers   │  │  numbers  │               │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer öre arithmetic (no floating point!)
//! - [`types`] - Shared scalars (multipliers, fee rates, statuses, dog sizes)
//! - [`error`] - Domain error types
//! - [`validation`] - Configuration validation rules
//! - [`pricing`] - Boarding price engine
//! - [`cancellation`] - Cancellation fee policy evaluator
//! - [`ocr`] - Swedish OCR payment reference numbers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. The "now" timestamp is a parameter, never a clock read.
//! 2. **No I/O**: Database, network and file system access are FORBIDDEN
//!    here; callers pass organization config in as plain data.
//! 3. **Integer Money**: All monetary values are öre (i64) to avoid float
//!    errors; rounding happens once, at the final scaling step.
//! 4. **Explicit Errors**: All errors are typed, never strings or panics.
//!    The three components never call each other and share no state, so
//!    any number of invocations may run in parallel.
//!
//! ## Example Usage
//!
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::pricing::{compute_boarding_price, PricingConfig};
//! use billing_core::types::parse_date;
//!
//! let config = PricingConfig::new(
//!     Money::from_ore(50_000), // 500 kr per night
//!     Money::from_ore(10_000), // +100 kr on Fri-Sun
//!     vec![],
//!     vec![],
//! )?;
//!
//! // A Friday-to-Monday stay: three weekend nights
//! let quote = compute_boarding_price(
//!     parse_date("2025-01-03")?,
//!     parse_date("2025-01-06")?,
//!     &config,
//! )?;
//! assert_eq!(quote.total, Money::from_ore(180_000)); // 1800 kr
//! # Ok::<(), billing_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cancellation;
pub mod error;
pub mod money;
pub mod ocr;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billing_core::Money` instead of
// `use billing_core::money::Money`

pub use cancellation::{
    can_customer_cancel, evaluate_cancellation, CancellationCalculation, CancellationPolicy,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use ocr::{generate_ocr, validate_ocr};
pub use pricing::{compute_boarding_price, PricingConfig, Season, SpecialDate, StayQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Day threshold for free cancellation (inclusive).
///
/// ## Business Reason
/// A booking cancelled 7 or more days before check-in falls into the
/// `days_7_plus` policy bucket. The threshold itself is fixed; only the
/// fee fractions are configurable per organization.
pub const FREE_CANCELLATION_DAYS: i64 = 7;

/// Day threshold for the partial-fee tier (inclusive).
///
/// ## Business Reason
/// Between this and [`FREE_CANCELLATION_DAYS`] the `days_3_to_7` bucket
/// applies; below it the `days_under_3` bucket applies.
pub const PARTIAL_FEE_DAYS: i64 = 3;
