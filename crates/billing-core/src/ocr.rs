//! # OCR Reference Numbers
//!
//! Generates and validates OCR payment reference numbers for Swedish
//! invoices (Bankgiro/Plusgiro automatic payment matching).
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KKKKKK FFFFFFFFF C                                   │
//! │                                                                         │
//! │  K × 6  customer number, zero-left-padded; when the number has more    │
//! │         than 6 digits the RIGHTMOST 6 are kept — intentional           │
//! │         truncation, a constraint of the fixed-width format             │
//! │  F × 9  decimal digits extracted from the invoice identifier           │
//! │         ("INV-2025-00001" → "202500001"), rightmost 9, zero-padded     │
//! │  C × 1  Luhn/MOD-10 check digit over the 15-digit base                 │
//! │                                                                         │
//! │  Total: always exactly 16 digits                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Model
//! Generation is pure formatting + arithmetic and always succeeds — missing
//! inputs fall back to `0`/`"0"`. Validation is a predicate over untrusted
//! strings and returns `false` instead of erroring, since it is routinely
//! called on arbitrary user input.
//!
//! ## Known Limitation
//! Luhn detects every single-digit substitution and most adjacent
//! transpositions, but not the 09↔90 pair swap. This is inherent to the
//! algorithm and accepted by the Swedish banking format.

use tracing::debug;

/// Width of the customer-number segment.
pub const OCR_CUSTOMER_DIGITS: usize = 6;

/// Width of the invoice-number segment.
pub const OCR_INVOICE_DIGITS: usize = 9;

/// Minimum length of a validatable OCR reference (Swedish standard).
pub const OCR_MIN_LEN: usize = 2;

/// Maximum length of a validatable OCR reference (Swedish standard).
pub const OCR_MAX_LEN: usize = 25;

// =============================================================================
// Luhn / MOD-10
// =============================================================================

/// Computes the Luhn/MOD-10 check digit over a string of ASCII digits.
///
/// Walks the digits right to left, doubling every second digit starting
/// from the second-rightmost; a doubled value above 9 has 9 subtracted
/// (equivalent to summing its two digits). The check digit is whatever
/// brings the sum up to the next multiple of 10.
fn luhn_check_digit(digits: &str) -> u32 {
    let mut sum = 0;
    let mut double = false;

    for ch in digits.chars().rev() {
        let mut d = ch.to_digit(10).unwrap_or(0);
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }

    (10 - (sum % 10)) % 10
}

// =============================================================================
// Generation
// =============================================================================

/// Generates a 16-digit OCR reference for an invoice.
///
/// Total for all inputs: `None` customer numbers become `0`, `None` invoice
/// identifiers become `"0"`, and identifiers without any digits contribute
/// an all-zero segment. The result always validates under [`validate_ocr`].
///
/// ## Example
/// ```rust
/// use billing_core::ocr::{generate_ocr, validate_ocr};
///
/// let ocr = generate_ocr(Some(123), Some("INV-2025-00001"));
/// assert_eq!(ocr, "0001232025000014");
/// assert!(validate_ocr(&ocr));
///
/// // Missing inputs fall back to zero
/// assert!(validate_ocr(&generate_ocr(None, None)));
/// ```
pub fn generate_ocr(customer_number: Option<u64>, invoice_number: Option<&str>) -> String {
    let customer = customer_number.unwrap_or(0);
    let invoice = invoice_number.unwrap_or("0");

    // Customer segment: zero-padded to 6, rightmost 6 kept when longer
    let padded = format!("{:0width$}", customer, width = OCR_CUSTOMER_DIGITS);
    let customer_part = &padded[padded.len() - OCR_CUSTOMER_DIGITS..];

    // Invoice segment: digits only, rightmost 9, zero-padded to 9
    let digits: String = invoice.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail = &digits[digits.len().saturating_sub(OCR_INVOICE_DIGITS)..];
    let invoice_part = format!("{:0>width$}", tail, width = OCR_INVOICE_DIGITS);

    let base = format!("{customer_part}{invoice_part}");
    let reference = format!("{base}{}", luhn_check_digit(&base));

    debug!(customer, invoice, %reference, "generated OCR reference");

    reference
}

/// Validates an OCR reference against its Luhn check digit.
///
/// Strips spaces and hyphens first. Returns `false` — never an error — for
/// anything empty, non-numeric or outside the 2-25 digit Swedish standard
/// length range.
///
/// ## Example
/// ```rust
/// use billing_core::ocr::validate_ocr;
///
/// assert!(validate_ocr("0001232025000014"));
/// assert!(validate_ocr("0001 2320 2500 0014")); // grouping tolerated
/// assert!(!validate_ocr("0001232025000015"));   // wrong check digit
/// assert!(!validate_ocr("not a number"));
/// assert!(!validate_ocr(""));
/// ```
pub fn validate_ocr(reference: &str) -> bool {
    let clean: String = reference
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if clean.is_empty() || !clean.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if clean.len() < OCR_MIN_LEN || clean.len() > OCR_MAX_LEN {
        return false;
    }

    let (base, check) = clean.split_at(clean.len() - 1);
    luhn_check_digit(base).to_string() == check
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Formats an OCR reference in digit groups for print layouts.
///
/// ## Example
/// ```rust
/// use billing_core::ocr::format_ocr;
///
/// assert_eq!(format_ocr("0001232025000014", 4), "0001 2320 2500 0014");
/// ```
pub fn format_ocr(reference: &str, group_size: usize) -> String {
    let clean: String = reference.chars().filter(|c| !c.is_whitespace()).collect();
    if group_size == 0 {
        return clean;
    }

    clean
        .as_bytes()
        .chunks(group_size)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a plain-text payment reference for banks without OCR support.
///
/// Prefixes the invoice number with up to four initials from the
/// organization name ("Hundgården i Sjöbo AB" → "HISA-...").
pub fn payment_reference(invoice_number: &str, org_name: Option<&str>) -> String {
    let Some(org_name) = org_name else {
        return invoice_number.to_string();
    };

    let initials: String = org_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(4)
        .collect();

    if initials.is_empty() {
        return invoice_number.to_string();
    }

    format!("{initials}-{invoice_number}")
}

// =============================================================================
// Unit Tests
// =============================================================================
