//! Level-payment (annuity) amortization.
//!
//! Intermediate values carry the full 28 fractional digits of
//! `rust_decimal::Decimal`. Precision is collapsed to cents, round-half-up,
//! only on the monthly installment, the total payable and the total interest.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticFault, CreditSimError};
use crate::types::{Money, Rate};
use crate::CreditSimResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Currency scale for every reported figure.
pub const CURRENCY_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline figures of a fixed-rate loan, all at currency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_amount_to_pay: Money,
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    /// Outstanding balance after this period's payment.
    pub balance: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Round to cents, ties away from zero, always reporting two fractional digits.
pub fn round_currency(value: Decimal) -> Money {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Periodic rate for monthly compounding.
pub fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / MONTHS_PER_YEAR
}

/// Fixed monthly installment, total payable and total interest.
///
/// `payment = P·r / (1 − (1 + r)^−n)` with `r = annual_rate / 12`; a zero
/// rate degenerates to `P / n`. Any arithmetic fault is reported as
/// [`CreditSimError::SimulationFailed`] carrying `principal` and `term_months`.
pub fn compute_installment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> CreditSimResult<Installment> {
    let fail = |cause: ArithmeticFault| CreditSimError::SimulationFailed {
        principal,
        term_months,
        cause,
    };

    let payment = level_payment(principal, annual_rate, term_months).map_err(fail)?;
    let monthly_installment = round_currency(payment);

    let total = monthly_installment
        .checked_mul(Decimal::from(term_months))
        .ok_or_else(|| fail(overflow("total amount to pay")))?;
    let total_amount_to_pay = round_currency(total);

    let interest = total_amount_to_pay
        .checked_sub(principal)
        .ok_or_else(|| fail(overflow("total interest")))?;
    let total_interest = round_currency(interest);

    Ok(Installment {
        monthly_installment,
        total_interest,
        total_amount_to_pay,
    })
}

/// Period-by-period breakdown of a fixed-rate loan.
///
/// Every period pays the rounded monthly installment except the last (or any
/// period whose scheduled principal would overshoot the balance), which pays
/// off exactly what remains. The balance therefore always ends at zero and the
/// principal column sums to the principal at currency scale. Because of that
/// final true-up, the payment column can differ by a few cents from
/// `total_amount_to_pay`.
pub fn amortization_schedule(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> CreditSimResult<Vec<SchedulePeriod>> {
    let installment = compute_installment(principal, annual_rate, term_months)?;
    let fail = |cause: ArithmeticFault| CreditSimError::SimulationFailed {
        principal,
        term_months,
        cause,
    };

    let r = monthly_rate(annual_rate);
    let mut balance = round_currency(principal);
    let mut rows = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let accrued = balance
            .checked_mul(r)
            .ok_or_else(|| fail(overflow("period interest")))?;
        let interest = round_currency(accrued);
        let scheduled = installment.monthly_installment - interest;

        let principal_paid = if period == term_months || scheduled > balance {
            balance
        } else {
            scheduled
        };
        balance -= principal_paid;

        rows.push(SchedulePeriod {
            period,
            payment: round_currency(interest + principal_paid),
            interest,
            principal: round_currency(principal_paid),
            balance: round_currency(balance),
        });
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Unrounded level payment.
fn level_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Decimal, ArithmeticFault> {
    if term_months == 0 {
        return Err(ArithmeticFault::DivisionByZero {
            context: "annuity divisor (term of 0 months)".into(),
        });
    }

    let r = monthly_rate(annual_rate);
    let n = Decimal::from(term_months);

    if r.is_zero() {
        return principal
            .checked_div(n)
            .ok_or_else(|| overflow("zero-rate payment"));
    }

    let base = Decimal::ONE
        .checked_add(r)
        .ok_or_else(|| overflow("compound base 1 + r"))?;
    let discount = match base.checked_powu(u64::from(term_months)) {
        Some(growth) if growth.is_zero() => {
            return Err(ArithmeticFault::DivisionByZero {
                context: "discount factor (1 + r)^-n".into(),
            })
        }
        // Once (1 + r)^-n is below the smallest representable step the
        // payment is interest-only: P·r.
        Some(growth) => Decimal::ONE.checked_div(growth).unwrap_or(Decimal::ZERO),
        None if base > Decimal::ONE => Decimal::ZERO,
        None => return Err(overflow("compound factor (1 + r)^n")),
    };
    let divisor = Decimal::ONE - discount;
    if divisor.is_zero() {
        return Err(ArithmeticFault::DivisionByZero {
            context: "annuity divisor 1 - (1 + r)^-n".into(),
        });
    }

    let dividend = principal
        .checked_mul(r)
        .ok_or_else(|| overflow("principal × monthly rate"))?;

    log::trace!("annuity: r={r} discount={discount} divisor={divisor}");

    dividend
        .checked_div(divisor)
        .ok_or_else(|| overflow("level payment"))
}

fn overflow(context: &str) -> ArithmeticFault {
    ArithmeticFault::Overflow {
        context: context.into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
