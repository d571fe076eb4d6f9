//! # Cancellation Policy Evaluator
//!
//! Computes cancellation fees and refunds from a tiered day-count policy.
//!
//! ## Policy Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Days Until Check-In                                  │
//! │                                                                         │
//! │  days < 0          │ stay already started → cannot cancel,              │
//! │  (terminal state)  │ fee = total, refund = 0                           │
//! │  ──────────────────┼──────────────────────────────────────────────     │
//! │  0 <= days < 3     │ days_under_3 fraction (default 100%)              │
//! │  3 <= days < 7     │ days_3_to_7 fraction  (default  50%)              │
//! │  days >= 7         │ days_7_plus fraction  (default   0%)              │
//! │                                                                         │
//! │  Each higher tier has an INCLUSIVE lower bound: exactly 7 days is      │
//! │  free, exactly 3 days is the middle tier                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! The evaluation never reads a clock: "now" is an explicit parameter, so
//! the same inputs always produce the same calculation on every call site
//! and in every test.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{BookingStatus, FeeRate};
use crate::validation::{validate_fee_rate, validate_fraction, validate_price};
use crate::{FREE_CANCELLATION_DAYS, PARTIAL_FEE_DAYS};

// =============================================================================
// Cancellation Policy
// =============================================================================

/// A tiered cancellation fee policy, configured per organization.
///
/// The buckets are contiguous and exhaustive over non-negative day counts;
/// a negative day count (stay already started) is a distinct terminal state,
/// not part of the bucket set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CancellationPolicy {
    /// Fee fraction when 7 or more days remain.
    pub days_7_plus: FeeRate,
    /// Fee fraction when 3 to 6 days remain.
    pub days_3_to_7: FeeRate,
    /// Fee fraction when fewer than 3 days remain.
    pub days_under_3: FeeRate,
    /// Customer-facing description of the policy.
    pub description: Option<String>,
}

impl Default for CancellationPolicy {
    /// The standard policy: free a week out, half price inside a week,
    /// full price inside three days.
    fn default() -> Self {
        CancellationPolicy {
            days_7_plus: FeeRate::zero(),
            days_3_to_7: FeeRate::from_bps(5_000),
            days_under_3: FeeRate::full(),
            description: Some(
                "7+ dagar: Ingen avgift, 3-7 dagar: 50% avgift, Under 3 dagar: 100% avgift"
                    .to_string(),
            ),
        }
    }
}

impl CancellationPolicy {
    /// Builds a validated policy. Each fraction must lie in [0, 1].
    pub fn new(
        days_7_plus: FeeRate,
        days_3_to_7: FeeRate,
        days_under_3: FeeRate,
        description: Option<String>,
    ) -> CoreResult<Self> {
        validate_fee_rate("days_7_plus", days_7_plus)?;
        validate_fee_rate("days_3_to_7", days_3_to_7)?;
        validate_fee_rate("days_under_3", days_under_3)?;

        Ok(CancellationPolicy {
            days_7_plus,
            days_3_to_7,
            days_under_3,
            description,
        })
    }

    /// Builds a policy from raw decimal fractions (`0.5` = 50%).
    pub fn from_fractions(
        days_7_plus: f64,
        days_3_to_7: f64,
        days_under_3: f64,
        description: Option<String>,
    ) -> CoreResult<Self> {
        validate_fraction("days_7_plus", days_7_plus)?;
        validate_fraction("days_3_to_7", days_3_to_7)?;
        validate_fraction("days_under_3", days_under_3)?;

        Self::new(
            FeeRate::from_bps((days_7_plus * 10_000.0).round() as u32),
            FeeRate::from_bps((days_3_to_7 * 10_000.0).round() as u32),
            FeeRate::from_bps((days_under_3 * 10_000.0).round() as u32),
            description,
        )
    }

    /// Reads a policy from an organization's JSON policy document.
    ///
    /// The surrounding application stores the policy as a JSON column;
    /// missing or null fields fall back to the [`Default`] policy values.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::cancellation::CancellationPolicy;
    /// use serde_json::json;
    ///
    /// let policy = CancellationPolicy::from_json(&json!({ "days_3_to_7": 0.25 })).unwrap();
    /// assert_eq!(policy.days_3_to_7.bps(), 2_500);
    /// assert_eq!(policy.days_under_3.bps(), 10_000); // default kept
    /// ```
    pub fn from_json(value: &serde_json::Value) -> CoreResult<Self> {
        let default = Self::default();
        let fraction = |key: &str, fallback: FeeRate| {
            value
                .get(key)
                .and_then(serde_json::Value::as_f64)
                .unwrap_or(fallback.bps() as f64 / 10_000.0)
        };

        let description = value
            .get("description")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .or(default.description.clone());

        Self::from_fractions(
            fraction("days_7_plus", default.days_7_plus),
            fraction("days_3_to_7", default.days_3_to_7),
            fraction("days_under_3", default.days_under_3),
            description,
        )
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// The result of evaluating a cancellation.
///
/// Invariant: `cancellation_fee + refund_amount == total_price` exactly —
/// the refund is derived by subtraction in öre, never rounded separately.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CancellationCalculation {
    /// Amount retained by the organization.
    pub cancellation_fee: Money,
    /// Amount returned to the customer.
    pub refund_amount: Money,
    /// Whole days between "now" and the stay start (negative once started).
    pub days_until_start: i64,
    /// The fee fraction that fired.
    pub fee_rate: FeeRate,
    /// Human-readable label naming the bucket and percentage.
    pub policy_applied: String,
    /// Whether the booking can be cancelled at all.
    pub can_cancel: bool,
    /// Explanation when `can_cancel` is false.
    pub reason: Option<String>,
}

// =============================================================================
// Operations
// =============================================================================

/// Evaluates a cancellation against a tiered policy.
///
/// `now` is injected by the caller — typically the current time in the
/// workflow layer, or a fixed timestamp in tests. A stay that has already
/// started is a terminal state: the full price is retained regardless of
/// the policy's fractions.
///
/// ## Example
/// ```rust
/// use billing_core::cancellation::{evaluate_cancellation, CancellationPolicy};
/// use billing_core::money::Money;
/// use billing_core::types::parse_date;
/// use chrono::{TimeZone, Utc};
///
/// let calc = evaluate_cancellation(
///     parse_date("2025-06-06").unwrap(),
///     Money::from_ore(100_000), // 1000 kr
///     &CancellationPolicy::default(),
///     Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
/// ).unwrap();
///
/// // 5 days out: the 3-7 day tier fires at 50%
/// assert_eq!(calc.cancellation_fee.ore(), 50_000);
/// assert_eq!(calc.refund_amount.ore(), 50_000);
/// assert!(calc.can_cancel);
/// ```
pub fn evaluate_cancellation(
    start_date: NaiveDate,
    total_price: Money,
    policy: &CancellationPolicy,
    now: DateTime<Utc>,
) -> CoreResult<CancellationCalculation> {
    validate_price("total_price", total_price)?;

    let days_until_start = (start_date - now.date_naive()).num_days();

    if days_until_start < 0 {
        return Ok(CancellationCalculation {
            cancellation_fee: total_price,
            refund_amount: Money::zero(),
            days_until_start,
            fee_rate: FeeRate::full(),
            policy_applied: "Bokningen har redan startat".to_string(),
            can_cancel: false,
            reason: Some(
                "Bokningen har redan startat och kan inte avbokas. \
                 Kontakta pensionatet för hjälp."
                    .to_string(),
            ),
        });
    }

    let (fee_rate, policy_applied) = if days_until_start >= FREE_CANCELLATION_DAYS {
        (
            policy.days_7_plus,
            format!("7+ dagar kvar: {}% avgift", policy.days_7_plus.percentage()),
        )
    } else if days_until_start >= PARTIAL_FEE_DAYS {
        (
            policy.days_3_to_7,
            format!("3-7 dagar kvar: {}% avgift", policy.days_3_to_7.percentage()),
        )
    } else {
        (
            policy.days_under_3,
            format!(
                "Under 3 dagar kvar: {}% avgift",
                policy.days_under_3.percentage()
            ),
        )
    };

    let cancellation_fee = total_price.apply_fraction(fee_rate);
    let refund_amount = total_price - cancellation_fee;

    debug!(
        start = %start_date,
        days_until_start,
        fee_ore = cancellation_fee.ore(),
        refund_ore = refund_amount.ore(),
        "evaluated cancellation"
    );

    Ok(CancellationCalculation {
        cancellation_fee,
        refund_amount,
        days_until_start,
        fee_rate,
        policy_applied,
        can_cancel: true,
        reason: None,
    })
}

/// Checks whether the customer may cancel a booking themselves.
///
/// This is a pure status + date gate evaluated *before* any fee calculation
/// is offered: a checked-in, checked-out or already-cancelled booking can
/// never be customer-cancelled, and neither can a stay that has already
/// started.
pub fn can_customer_cancel(
    status: BookingStatus,
    start_date: NaiveDate,
    now: DateTime<Utc>,
) -> bool {
    if matches!(
        status,
        BookingStatus::CheckedIn | BookingStatus::CheckedOut | BookingStatus::Cancelled
    ) {
        return false;
    }

    (start_date - now.date_naive()).num_days() >= 0
}

// =============================================================================
// Customer-Facing Formatting
// =============================================================================

/// Formats a cancellation calculation for display to the customer.
pub fn format_cancellation_info(calculation: &CancellationCalculation) -> String {
    if !calculation.can_cancel {
        return calculation
            .reason
            .clone()
            .unwrap_or_else(|| "Bokningen kan inte avbokas.".to_string());
    }

    if calculation.cancellation_fee.is_zero() {
        return format!(
            "Du kan avboka utan kostnad ({} dagar kvar). Full återbetalning: {}",
            calculation.days_until_start, calculation.refund_amount
        );
    }

    format!(
        "Avbokningsavgift: {} ({})\nÅterbetalning: {}\nDagar kvar till incheckning: {}",
        calculation.cancellation_fee,
        calculation.policy_applied,
        calculation.refund_amount,
        calculation.days_until_start
    )
}

/// Builds the cancellation confirmation message sent to the customer.
///
/// The booking reference is shortened to its first 8 characters, matching
/// how references are displayed throughout the product.
pub fn cancellation_message(
    booking_ref: &str,
    dog_name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    calculation: &CancellationCalculation,
) -> String {
    let short_ref: String = booking_ref.chars().take(8).collect();

    format!(
        "Din bokning har avbokats\n\n\
         Bokningsnummer: {short_ref}\n\
         Hund: {dog_name}\n\
         Period: {start_date} - {end_date}\n\n\
         {}\n\n\
         Vi beklagar att du inte kan komma. Välkommen åter en annan gång!",
        format_cancellation_info(calculation)
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
