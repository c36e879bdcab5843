//! Request-level checks applied at the boundary before a simulation runs.
//!
//! [`crate::simulation::Simulator::simulate`] does not call these; it keeps
//! its own arithmetic guards so unvalidated input still fails cleanly.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::CreditSimError;
use crate::rates::RateSource;
use crate::simulation::SimulationInput;
use crate::CreditSimResult;

/// Reject the first rule `input` violates, measured against `as_of`.
pub fn validate_input(input: &SimulationInput, as_of: NaiveDate) -> CreditSimResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(CreditSimError::InvalidInput {
            field: "principal".into(),
            reason: "Loan amount must be greater than zero".into(),
        });
    }
    if input.term_months < 1 {
        return Err(CreditSimError::InvalidInput {
            field: "term_months".into(),
            reason: "Payment term must be at least 1 month".into(),
        });
    }
    match input.rate_source {
        RateSource::BirthDate(birth_date) if birth_date >= as_of => {
            Err(CreditSimError::InvalidInput {
                field: "birth_date".into(),
                reason: "Birth date must be in the past".into(),
            })
        }
        RateSource::AnnualRate(rate) if rate <= Decimal::ZERO => {
            Err(CreditSimError::InvalidInput {
                field: "annual_rate".into(),
                reason: "Annual rate must be greater than zero".into(),
            })
        }
        _ => Ok(()),
    }
}
