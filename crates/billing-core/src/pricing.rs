//! # Boarding Price Engine
//!
//! Computes the total price for a boarding stay from the organization's
//! pricing configuration.
//!
//! ## Per-Night Price Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Price of One Night                                   │
//! │                                                                         │
//! │  base price                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Special date configured for this date?                                 │
//! │       ├── yes → + special surcharge   (HIGHEST priority, fully         │
//! │       │         supersedes the weekend rule for that date)             │
//! │       └── no  → Fri/Sat/Sun? → + weekend surcharge                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  day subtotal (exact öre, never rounded here)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Season covering this date? → × multiplier, round half-up to öre       │
//! │  (applies on special dates too; ×1.0 when no season matches)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  night price ──► summed over every night of the stay                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Season Overlap Policy
//! Overlapping season ranges would make the multiplier ambiguous, so they
//! are rejected when the [`PricingConfig`] is constructed. At lookup time at
//! most one season can match a date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{DogSize, Multiplier};
use crate::validation::validate_price;

// =============================================================================
// Special Dates
// =============================================================================

/// Category of a special calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateCategory {
    /// Swedish public holiday ("röd dag").
    RedDay,
    /// Holiday period (Christmas, Easter week).
    Holiday,
    /// Local event with high demand.
    Event,
    /// Organization-defined date.
    Custom,
}

/// A single calendar date carrying a fixed price surcharge.
///
/// A special date fully supersedes the weekend surcharge: a Midsummer Eve
/// that falls on a Friday gets the Midsummer surcharge only, never both.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecialDate {
    /// The calendar date this surcharge applies to.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Display name ("Midsommarafton", "Julafton").
    pub name: String,

    /// Category (red day, holiday, event, custom).
    pub category: SpecialDateCategory,

    /// Fixed surcharge added on top of the base price.
    pub surcharge: Money,
}

// =============================================================================
// Seasons
// =============================================================================

/// A named date range carrying a price multiplier.
///
/// Both endpoints are inclusive. A multiplier of ×0 is a valid promotional
/// closure, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Season {
    /// Display name ("Sommar", "Sportlov").
    pub name: String,

    /// First date of the season (inclusive).
    #[ts(as = "String")]
    pub start: NaiveDate,

    /// Last date of the season (inclusive).
    #[ts(as = "String")]
    pub end: NaiveDate,

    /// Price multiplier applied to the day subtotal.
    pub multiplier: Multiplier,
}

impl Season {
    /// Checks whether a date falls within this season (inclusive ends).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks whether two season ranges share at least one date.
    #[inline]
    fn overlaps(&self, other: &Season) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

// =============================================================================
// Pricing Configuration
// =============================================================================

/// Organization-scoped boarding price configuration.
///
/// Constructed once per calculation from plain data the caller loaded from
/// its store; all validation happens here, so the pricing loop itself is
/// total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    /// Per-night base price for the dog being boarded.
    pub base_price: Money,

    /// Flat surcharge for Friday, Saturday and Sunday nights.
    pub weekend_surcharge: Money,

    /// Special calendar dates with fixed surcharges.
    pub special_dates: Vec<SpecialDate>,

    /// Season ranges with price multipliers. Must not overlap.
    pub seasons: Vec<Season>,
}

impl PricingConfig {
    /// Builds a validated pricing configuration.
    ///
    /// ## Validation Rules
    /// - base price, weekend surcharge and every special surcharge must be
    ///   non-negative
    /// - no two special dates may share a calendar date
    /// - every season must start on or before its end
    /// - season ranges must not overlap
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    /// use billing_core::pricing::PricingConfig;
    ///
    /// let config = PricingConfig::new(
    ///     Money::from_ore(45_000), // 450 kr per night
    ///     Money::from_ore(5_000),  // +50 kr Fri-Sun
    ///     vec![],
    ///     vec![],
    /// ).unwrap();
    /// assert_eq!(config.base_price.ore(), 45_000);
    /// ```
    pub fn new(
        base_price: Money,
        weekend_surcharge: Money,
        special_dates: Vec<SpecialDate>,
        seasons: Vec<Season>,
    ) -> CoreResult<Self> {
        validate_price("base_price", base_price)?;
        validate_price("weekend_surcharge", weekend_surcharge)?;

        for special in &special_dates {
            validate_price(&format!("special_date '{}'", special.name), special.surcharge)?;
        }
        for (i, a) in special_dates.iter().enumerate() {
            for b in &special_dates[i + 1..] {
                if a.date == b.date {
                    return Err(ValidationError::Duplicate {
                        field: "special_date".to_string(),
                        value: a.date.to_string(),
                    }
                    .into());
                }
            }
        }

        for season in &seasons {
            if season.end < season.start {
                return Err(ValidationError::EndBeforeStart {
                    name: season.name.clone(),
                    start: season.start,
                    end: season.end,
                }
                .into());
            }
        }
        for (i, a) in seasons.iter().enumerate() {
            for b in &seasons[i + 1..] {
                if a.overlaps(b) {
                    return Err(ValidationError::OverlappingSeasons {
                        first: a.name.clone(),
                        second: b.name.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(PricingConfig {
            base_price,
            weekend_surcharge,
            special_dates,
            seasons,
        })
    }

    /// Looks up the special date configured for a calendar date, if any.
    pub fn special_for(&self, date: NaiveDate) -> Option<&SpecialDate> {
        self.special_dates.iter().find(|s| s.date == date)
    }

    /// Looks up the season covering a calendar date, if any.
    ///
    /// At most one season can match because overlaps are rejected in
    /// [`PricingConfig::new`].
    pub fn season_for(&self, date: NaiveDate) -> Option<&Season> {
        self.seasons.iter().find(|s| s.contains(date))
    }

    /// Computes the price of a single night.
    ///
    /// Infallible: the configuration was validated at construction and the
    /// per-night math is total.
    pub fn night_price(&self, date: NaiveDate) -> NightPrice {
        let mut lines = vec![PriceLine {
            label: "Grundpris".to_string(),
            amount: self.base_price,
        }];
        let mut subtotal = self.base_price;

        if let Some(special) = self.special_for(date) {
            subtotal += special.surcharge;
            lines.push(PriceLine {
                label: special.name.clone(),
                amount: special.surcharge,
            });
        } else if is_weekend(date) {
            subtotal += self.weekend_surcharge;
            lines.push(PriceLine {
                label: "Helgtillägg".to_string(),
                amount: self.weekend_surcharge,
            });
        }

        // Season multiplier applies on special dates too; rounding to the
        // öre happens only here, after the multiplication.
        let price = match self.season_for(date) {
            Some(season) => {
                let scaled = subtotal.apply_multiplier(season.multiplier);
                lines.push(PriceLine {
                    label: format!("{} ×{}", season.name, season.multiplier.factor()),
                    amount: scaled - subtotal,
                });
                scaled
            }
            None => subtotal,
        };

        NightPrice { date, price, lines }
    }
}

// =============================================================================
// Rate Card
// =============================================================================

/// Base price and weekend surcharge for one dog size category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardingRate {
    pub dog_size: DogSize,
    pub base_price: Money,
    pub weekend_surcharge: Money,
}

/// The organization's per-size price table.
///
/// Callers resolve a dog to a [`DogSize`] (via
/// [`DogSize::from_height_cm`]) and look up the rate that seeds a
/// [`PricingConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateCard {
    rates: Vec<BoardingRate>,
}

impl RateCard {
    /// Builds a validated rate card.
    ///
    /// Rejects negative amounts and duplicate size categories.
    pub fn new(rates: Vec<BoardingRate>) -> CoreResult<Self> {
        for rate in &rates {
            validate_price("base_price", rate.base_price)?;
            validate_price("weekend_surcharge", rate.weekend_surcharge)?;
        }
        for (i, a) in rates.iter().enumerate() {
            for b in &rates[i + 1..] {
                if a.dog_size == b.dog_size {
                    return Err(ValidationError::Duplicate {
                        field: "dog_size".to_string(),
                        value: format!("{:?}", a.dog_size),
                    }
                    .into());
                }
            }
        }

        Ok(RateCard { rates })
    }

    /// Looks up the rate for a dog size, if configured.
    pub fn rate_for(&self, size: DogSize) -> Option<&BoardingRate> {
        self.rates.iter().find(|r| r.dog_size == size)
    }
}

// =============================================================================
// Quote Types
// =============================================================================

/// One labeled component of a night's price, for customer-facing breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceLine {
    /// Human-readable label ("Grundpris", "Helgtillägg", "Sommar ×1.3").
    pub label: String,
    /// Amount this line contributes (the season line carries the rounding
    /// delta and may be negative for multipliers below 1).
    pub amount: Money,
}

/// The computed price of a single night.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NightPrice {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub price: Money,
    pub lines: Vec<PriceLine>,
}

/// The computed price of a whole stay.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StayQuote {
    /// Sum of all night prices.
    pub total: Money,
    /// Number of nights in the stay.
    pub nights: u32,
    /// Per-night detail in stay order.
    pub nights_detail: Vec<NightPrice>,
}

// =============================================================================
// Operations
// =============================================================================

/// Checks if a date counts as a weekend night (Friday through Sunday).
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Computes the total price for a stay of `[stay_start, stay_end)` nights.
///
/// The end date is the check-out day and is not charged. A stay with
/// `stay_start == stay_end` has zero nights and a total of zero; an end date
/// before the start date fails with [`CoreError::InvalidRange`].
///
/// ## Example
/// ```rust
/// use billing_core::money::Money;
/// use billing_core::pricing::{compute_boarding_price, PricingConfig};
/// use billing_core::types::parse_date;
///
/// let config = PricingConfig::new(
///     Money::from_ore(50_000), // 500 kr
///     Money::from_ore(10_000), // +100 kr Fri-Sun
///     vec![],
///     vec![],
/// ).unwrap();
///
/// // Friday to Monday: three weekend nights at 600 kr
/// let quote = compute_boarding_price(
///     parse_date("2025-01-03").unwrap(),
///     parse_date("2025-01-06").unwrap(),
///     &config,
/// ).unwrap();
/// assert_eq!(quote.nights, 3);
/// assert_eq!(quote.total.ore(), 180_000); // 1800.00 kr
/// ```
pub fn compute_boarding_price(
    stay_start: NaiveDate,
    stay_end: NaiveDate,
    config: &PricingConfig,
) -> CoreResult<StayQuote> {
    if stay_end < stay_start {
        return Err(CoreError::InvalidRange {
            start: stay_start,
            end: stay_end,
        });
    }

    let nights = (stay_end - stay_start).num_days();
    let mut total = Money::zero();
    let mut nights_detail = Vec::with_capacity(nights as usize);

    for offset in 0..nights {
        let night = config.night_price(stay_start + Duration::days(offset));
        total += night.price;
        nights_detail.push(night);
    }

    debug!(
        start = %stay_start,
        end = %stay_end,
        nights,
        total_ore = total.ore(),
        "computed boarding price"
    );

    Ok(StayQuote {
        total,
        nights: nights as u32,
        nights_detail,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn plain_config(base_ore: i64, weekend_ore: i64) -> PricingConfig {
        PricingConfig::new(
            Money::from_ore(base_ore),
            Money::from_ore(weekend_ore),
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn midsummer_special() -> SpecialDate {
        SpecialDate {
            date: date("2025-06-20"),
            name: "Midsommarafton".to_string(),
            category: SpecialDateCategory::RedDay,
            surcharge: Money::from_ore(40_000),
        }
    }

    fn summer_season() -> Season {
        Season {
            name: "Sommar".to_string(),
            start: date("2025-06-01"),
            end: date("2025-08-31"),
            multiplier: Multiplier::from_bps(13_000),
        }
    }

    #[test]
    fn test_is_weekend_fri_through_sun() {
        assert!(is_weekend(date("2025-06-20"))); // Friday
        assert!(is_weekend(date("2025-06-21"))); // Saturday
        assert!(is_weekend(date("2025-06-22"))); // Sunday
        assert!(!is_weekend(date("2025-06-19"))); // Thursday
        assert!(!is_weekend(date("2025-06-23"))); // Monday
    }

    #[test]
    fn test_weekend_stay_total() {
        // 500 kr base + 100 kr weekend, Fri-Sun: 3 × 600 kr = 1800 kr
        let config = plain_config(50_000, 10_000);
        let quote =
            compute_boarding_price(date("2025-01-03"), date("2025-01-06"), &config).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total.ore(), 180_000);
        for night in &quote.nights_detail {
            assert_eq!(night.price.ore(), 60_000);
        }
    }

    #[test]
    fn test_weekday_night_has_no_surcharge() {
        let config = plain_config(45_000, 5_000);
        let night = config.night_price(date("2025-06-19")); // Thursday
        assert_eq!(night.price.ore(), 45_000);
        assert_eq!(night.lines.len(), 1);
        assert_eq!(night.lines[0].label, "Grundpris");
    }

    #[test]
    fn test_weekend_night_gets_exactly_weekend_surcharge() {
        let config = plain_config(45_000, 5_000);
        let night = config.night_price(date("2025-06-21")); // Saturday
        assert_eq!(night.price.ore(), 50_000);
        assert_eq!(night.lines[1].label, "Helgtillägg");
        assert_eq!(night.lines[1].amount.ore(), 5_000);
    }

    #[test]
    fn test_special_date_supersedes_weekend() {
        // Midsummer Eve 2025 is a Friday: only the special surcharge applies
        let config = PricingConfig::new(
            Money::from_ore(45_000),
            Money::from_ore(5_000),
            vec![midsummer_special()],
            vec![],
        )
        .unwrap();

        let night = config.night_price(date("2025-06-20"));
        assert_eq!(night.price.ore(), 85_000); // 450 + 400, NOT + 50
        assert!(night.lines.iter().any(|l| l.label == "Midsommarafton"));
        assert!(!night.lines.iter().any(|l| l.label == "Helgtillägg"));
    }

    #[test]
    fn test_season_multiplier_applies_to_special_dates_too() {
        let config = PricingConfig::new(
            Money::from_ore(45_000),
            Money::from_ore(5_000),
            vec![midsummer_special()],
            vec![summer_season()],
        )
        .unwrap();

        // (450 + 400) × 1.3 = 1105 kr
        let night = config.night_price(date("2025-06-20"));
        assert_eq!(night.price.ore(), 110_500);
    }

    #[test]
    fn test_midsummer_weekend_stay() {
        // Thursday before Midsummer through Sunday, summer season ×1.3:
        //   Thu 2025-06-19: 450 × 1.3           =  585 kr
        //   Fri 2025-06-20: (450 + 400) × 1.3   = 1105 kr
        //   Sat 2025-06-21: (450 + 50) × 1.3    =  650 kr
        let config = PricingConfig::new(
            Money::from_ore(45_000),
            Money::from_ore(5_000),
            vec![midsummer_special()],
            vec![summer_season()],
        )
        .unwrap();

        let quote =
            compute_boarding_price(date("2025-06-19"), date("2025-06-22"), &config).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.nights_detail[0].price.ore(), 58_500);
        assert_eq!(quote.nights_detail[1].price.ore(), 110_500);
        assert_eq!(quote.nights_detail[2].price.ore(), 65_000);
        assert_eq!(quote.total.ore(), 234_000); // 2340 kr
    }

    #[test]
    fn test_zero_length_stay_is_zero() {
        let config = plain_config(45_000, 5_000);
        let quote =
            compute_boarding_price(date("2025-06-19"), date("2025-06-19"), &config).unwrap();
        assert_eq!(quote.nights, 0);
        assert!(quote.total.is_zero());
        assert!(quote.nights_detail.is_empty());
    }

    #[test]
    fn test_end_before_start_is_invalid_range() {
        let config = plain_config(45_000, 5_000);
        let err =
            compute_boarding_price(date("2025-06-22"), date("2025-06-19"), &config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange { .. }));
    }

    #[test]
    fn test_zero_multiplier_season_yields_free_night() {
        // Promotional closure: valid configuration, zero-priced nights
        let config = PricingConfig::new(
            Money::from_ore(45_000),
            Money::from_ore(5_000),
            vec![],
            vec![Season {
                name: "Stängt".to_string(),
                start: date("2025-11-01"),
                end: date("2025-11-07"),
                multiplier: Multiplier::from_bps(0),
            }],
        )
        .unwrap();

        let night = config.night_price(date("2025-11-03"));
        assert!(night.price.is_zero());
    }

    #[test]
    fn test_season_boundaries_are_inclusive() {
        let config = PricingConfig::new(
            Money::from_ore(10_000),
            Money::zero(),
            vec![],
            vec![summer_season()],
        )
        .unwrap();

        assert!(config.season_for(date("2025-06-01")).is_some());
        assert!(config.season_for(date("2025-08-31")).is_some());
        assert!(config.season_for(date("2025-05-31")).is_none());
        assert!(config.season_for(date("2025-09-01")).is_none());
    }

    #[test]
    fn test_overlapping_seasons_rejected_at_load() {
        let err = PricingConfig::new(
            Money::from_ore(45_000),
            Money::zero(),
            vec![],
            vec![
                summer_season(),
                Season {
                    name: "Sensommar".to_string(),
                    start: date("2025-08-15"),
                    end: date("2025-09-15"),
                    multiplier: Multiplier::from_bps(11_000),
                },
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfiguration(ValidationError::OverlappingSeasons { .. })
        ));
    }

    #[test]
    fn test_season_end_before_start_rejected() {
        let err = PricingConfig::new(
            Money::from_ore(45_000),
            Money::zero(),
            vec![],
            vec![Season {
                name: "Baklänges".to_string(),
                start: date("2025-08-31"),
                end: date("2025-06-01"),
                multiplier: Multiplier::identity(),
            }],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfiguration(ValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_duplicate_special_dates_rejected() {
        let mut second = midsummer_special();
        second.name = "Dubblett".to_string();
        let err = PricingConfig::new(
            Money::from_ore(45_000),
            Money::zero(),
            vec![midsummer_special(), second],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfiguration(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_negative_config_rejected() {
        let err = PricingConfig::new(
            Money::from_ore(-45_000),
            Money::zero(),
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));

        let err = PricingConfig::new(
            Money::from_ore(45_000),
            Money::from_ore(-1),
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rate_card_lookup() {
        let card = RateCard::new(vec![
            BoardingRate {
                dog_size: DogSize::Small,
                base_price: Money::from_ore(35_000),
                weekend_surcharge: Money::from_ore(4_000),
            },
            BoardingRate {
                dog_size: DogSize::Large,
                base_price: Money::from_ore(55_000),
                weekend_surcharge: Money::from_ore(6_000),
            },
        ])
        .unwrap();

        assert_eq!(
            card.rate_for(DogSize::Small).unwrap().base_price.ore(),
            35_000
        );
        assert!(card.rate_for(DogSize::Medium).is_none());
    }

    #[test]
    fn test_rate_card_duplicate_size_rejected() {
        let rate = BoardingRate {
            dog_size: DogSize::Medium,
            base_price: Money::from_ore(45_000),
            weekend_surcharge: Money::from_ore(5_000),
        };
        let err = RateCard::new(vec![rate.clone(), rate]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidConfiguration(ValidationError::Duplicate { .. })
        ));
    }
}
