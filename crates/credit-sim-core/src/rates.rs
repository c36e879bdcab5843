//! Age-bracket interest rate policy.
//!
//! A borrower's annual rate is taken from a fixed, ordered table of inclusive
//! age brackets. Callers may bypass the table entirely by supplying an
//! explicit annual rate.

use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditSimError;
use crate::types::Rate;
use crate::CreditSimResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the rate table. Bounds are inclusive; `max_age = None` means
/// the bracket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateBracket {
    pub label: &'static str,
    pub min_age: u32,
    pub max_age: Option<u32>,
    pub annual_rate: Rate,
}

/// Where the annual rate for a simulation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Look the rate up in the bracket table using the borrower's age.
    BirthDate(NaiveDate),
    /// Use this annual rate as-is.
    AnnualRate(Rate),
}

// ---------------------------------------------------------------------------
// Rate table
// ---------------------------------------------------------------------------

/// Brackets in ascending age order. Contiguous from age 0 upwards.
pub const RATE_TABLE: [RateBracket; 4] = [
    RateBracket {
        label: "up_to_25_years",
        min_age: 0,
        max_age: Some(25),
        annual_rate: dec!(0.05),
    },
    RateBracket {
        label: "from_26_to_40_years",
        min_age: 26,
        max_age: Some(40),
        annual_rate: dec!(0.03),
    },
    RateBracket {
        label: "from_41_to_60_years",
        min_age: 41,
        max_age: Some(60),
        annual_rate: dec!(0.02),
    },
    RateBracket {
        label: "above_60_years",
        min_age: 61,
        max_age: None,
        annual_rate: dec!(0.04),
    },
];

impl RateBracket {
    /// Whether `age` falls inside this bracket. Negative ages never match.
    pub fn contains(&self, age: i32) -> bool {
        let Ok(age) = u32::try_from(age) else {
            return false;
        };
        age >= self.min_age && self.max_age.map_or(true, |max| age <= max)
    }
}

/// Read-only view of the rate table.
pub fn rate_table() -> &'static [RateBracket] {
    &RATE_TABLE
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// First bracket (in ascending order) containing `age`.
pub fn bracket_for_age(age: i32) -> CreditSimResult<&'static RateBracket> {
    RATE_TABLE
        .iter()
        .find(|bracket| bracket.contains(age))
        .ok_or(CreditSimError::AgeNotSupported { age })
}

/// Annual rate for a borrower of the given age.
pub fn rate_for_age(age: i32) -> CreditSimResult<Rate> {
    bracket_for_age(age).map(|bracket| bracket.annual_rate)
}

/// Completed years between `birth_date` and `as_of`, floored.
///
/// The birthday counts only once reached, so someone born on 29 February
/// ages on 1 March in non-leap years. A birth date after `as_of` gives a
/// negative age.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Annual rate for a simulation: the override if present, otherwise the
/// bracket rate for the borrower's age on `as_of`.
pub fn resolve_rate(source: &RateSource, as_of: NaiveDate) -> CreditSimResult<Rate> {
    match source {
        RateSource::AnnualRate(rate) => Ok(*rate),
        RateSource::BirthDate(birth_date) => rate_for_age(age_on(*birth_date, as_of)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
