//! Loan simulation: rate resolution followed by annuity amortization.
//!
//! [`Simulator`] carries no mutable state and can be shared freely across
//! threads. It optionally pins the evaluation date used to compute borrower
//! ages; otherwise the local calendar date is read once per call.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::amortization::{self, SchedulePeriod};
use crate::rates::{self, RateSource};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validation::validate_input;
use crate::CreditSimResult;

/// Terms longer than this are flagged in the envelope warnings.
const LONG_TERM_WARNING_MONTHS: u32 = 480;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A single loan to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SimulationInputWire", into = "SimulationInputWire")]
pub struct SimulationInput {
    pub principal: Money,
    pub term_months: u32,
    pub rate_source: RateSource,
}

/// Flat JSON shape of [`SimulationInput`]; exactly one of `birth_date` and
/// `annual_rate` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SimulationInputWire {
    #[serde(alias = "loanAmount")]
    principal: Money,
    #[serde(alias = "paymentTermInMonths")]
    term_months: u32,
    #[serde(default, alias = "birthDate", skip_serializing_if = "Option::is_none")]
    birth_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "variableInterestRate",
        skip_serializing_if = "Option::is_none"
    )]
    annual_rate: Option<Rate>,
}

impl TryFrom<SimulationInputWire> for SimulationInput {
    type Error = String;

    fn try_from(wire: SimulationInputWire) -> Result<Self, Self::Error> {
        let rate_source = match (wire.birth_date, wire.annual_rate) {
            (Some(birth_date), None) => RateSource::BirthDate(birth_date),
            (None, Some(rate)) => RateSource::AnnualRate(rate),
            (Some(_), Some(_)) => {
                return Err("provide either birth_date or annual_rate, not both".into())
            }
            (None, None) => return Err("one of birth_date or annual_rate is required".into()),
        };
        Ok(SimulationInput {
            principal: wire.principal,
            term_months: wire.term_months,
            rate_source,
        })
    }
}

impl From<SimulationInput> for SimulationInputWire {
    fn from(input: SimulationInput) -> Self {
        let (birth_date, annual_rate) = match input.rate_source {
            RateSource::BirthDate(date) => (Some(date), None),
            RateSource::AnnualRate(rate) => (None, Some(rate)),
        };
        SimulationInputWire {
            principal: input.principal,
            term_months: input.term_months,
            birth_date,
            annual_rate,
        }
    }
}

impl SimulationInput {
    /// Rate looked up from the borrower's age.
    pub fn with_birth_date(principal: Money, term_months: u32, birth_date: NaiveDate) -> Self {
        Self {
            principal,
            term_months,
            rate_source: RateSource::BirthDate(birth_date),
        }
    }

    /// Explicit annual rate, bypassing the age table.
    pub fn with_annual_rate(principal: Money, term_months: u32, annual_rate: Rate) -> Self {
        Self {
            principal,
            term_months,
            rate_source: RateSource::AnnualRate(annual_rate),
        }
    }
}

/// Result of one simulation. Money fields are at currency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_amount_to_pay: Money,
    /// Annual rate the figures were computed with.
    pub annual_rate: Rate,
}

/// Per-item outcome of a partial-success batch, as reported to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Ok {
        index: usize,
        #[serde(flatten)]
        output: SimulationOutput,
    },
    Error {
        index: usize,
        kind: String,
        message: String,
    },
}

#[derive(Serialize)]
struct SimulationAssumptions<'a, T: Serialize> {
    evaluation_date: NaiveDate,
    rate_policy: &'static str,
    input: &'a T,
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulator {
    as_of: Option<NaiveDate>,
}

impl Simulator {
    /// Simulator that evaluates ages against today's local date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulator with a pinned evaluation date.
    pub fn as_of(date: NaiveDate) -> Self {
        Self { as_of: Some(date) }
    }

    /// Date borrower ages are measured against.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Copy of this simulator with the evaluation date fixed, so every item in
    /// a batch sees the same date.
    fn pinned(&self) -> Self {
        Self::as_of(self.evaluation_date())
    }

    pub fn resolve_rate(&self, input: &SimulationInput) -> CreditSimResult<Rate> {
        rates::resolve_rate(&input.rate_source, self.evaluation_date())
    }

    /// Resolve the rate and compute the installment figures.
    pub fn simulate(&self, input: &SimulationInput) -> CreditSimResult<SimulationOutput> {
        let annual_rate = self.resolve_rate(input)?;
        let installment =
            amortization::compute_installment(input.principal, annual_rate, input.term_months)?;

        log::debug!(
            "simulated principal={} term={} rate={} -> installment={}",
            input.principal,
            input.term_months,
            annual_rate,
            installment.monthly_installment
        );

        Ok(SimulationOutput {
            monthly_installment: installment.monthly_installment,
            total_interest: installment.total_interest,
            total_amount_to_pay: installment.total_amount_to_pay,
            annual_rate,
        })
    }

    /// Amortization schedule for the rate this input resolves to.
    pub fn schedule(&self, input: &SimulationInput) -> CreditSimResult<Vec<SchedulePeriod>> {
        let annual_rate = self.resolve_rate(input)?;
        amortization::amortization_schedule(input.principal, annual_rate, input.term_months)
    }

    /// Fail-fast batch: one output per input, in order, or the first error
    /// encountered. With the `parallel` feature, "first" means first to fail,
    /// which need not be the lowest index.
    pub fn simulate_batch(
        &self,
        inputs: &[SimulationInput],
    ) -> CreditSimResult<Vec<SimulationOutput>> {
        let simulator = self.pinned();

        #[cfg(feature = "parallel")]
        let iter = inputs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = inputs.iter();

        iter.enumerate()
            .map(|(index, input)| {
                simulator.simulate(input).inspect_err(|e| {
                    log::warn!("batch item {index} failed, aborting batch: {e}");
                })
            })
            .collect()
    }

    /// Partial-success batch: one result per input, in order. A failing item
    /// does not affect its siblings.
    pub fn simulate_batch_isolated(
        &self,
        inputs: &[SimulationInput],
    ) -> Vec<CreditSimResult<SimulationOutput>> {
        let simulator = self.pinned();

        #[cfg(feature = "parallel")]
        let iter = inputs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = inputs.iter();

        iter.enumerate()
            .map(|(index, input)| {
                simulator.simulate(input).inspect_err(|e| {
                    log::warn!("batch item {index} failed: {e}");
                })
            })
            .collect()
    }

    /// Validate, simulate and wrap the result in the standard envelope.
    pub fn analyze(
        &self,
        input: &SimulationInput,
    ) -> CreditSimResult<ComputationOutput<SimulationOutput>> {
        let start = Instant::now();
        let simulator = self.pinned();
        let evaluation_date = simulator.evaluation_date();

        validate_input(input, evaluation_date)?;
        let output = simulator.simulate(input)?;
        let warnings = input_warnings(input, output.annual_rate);

        let assumptions = SimulationAssumptions {
            evaluation_date,
            rate_policy: rate_policy(input),
            input,
        };

        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Level-payment annuity amortization",
            &assumptions,
            warnings,
            elapsed,
            output,
        ))
    }

    /// Validated amortization schedule in the standard envelope.
    pub fn analyze_schedule(
        &self,
        input: &SimulationInput,
    ) -> CreditSimResult<ComputationOutput<Vec<SchedulePeriod>>> {
        let start = Instant::now();
        let simulator = self.pinned();
        let evaluation_date = simulator.evaluation_date();

        validate_input(input, evaluation_date)?;
        let annual_rate = simulator.resolve_rate(input)?;
        let rows = simulator.schedule(input)?;
        let warnings = input_warnings(input, annual_rate);

        let assumptions = SimulationAssumptions {
            evaluation_date,
            rate_policy: rate_policy(input),
            input,
        };

        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Level-payment amortization schedule",
            &assumptions,
            warnings,
            elapsed,
            rows,
        ))
    }

    /// Validate every item, then run a fail-fast batch inside the envelope.
    pub fn analyze_batch(
        &self,
        inputs: &[SimulationInput],
    ) -> CreditSimResult<ComputationOutput<Vec<SimulationOutput>>> {
        let start = Instant::now();
        let simulator = self.pinned();
        let evaluation_date = simulator.evaluation_date();

        for input in inputs {
            validate_input(input, evaluation_date)?;
        }
        let outputs = simulator.simulate_batch(inputs)?;

        let mut warnings = Vec::new();
        for (index, (input, output)) in inputs.iter().zip(&outputs).enumerate() {
            for w in input_warnings(input, output.annual_rate) {
                warnings.push(format!("item {index}: {w}"));
            }
        }

        let assumptions = SimulationAssumptions {
            evaluation_date,
            rate_policy: "per item",
            input: &inputs,
        };

        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Level-payment annuity amortization (batch, fail-fast)",
            &assumptions,
            warnings,
            elapsed,
            outputs,
        ))
    }

    /// Validate and simulate each item independently, reporting per-item
    /// status. Never fails as a whole.
    pub fn analyze_batch_isolated(
        &self,
        inputs: &[SimulationInput],
    ) -> ComputationOutput<Vec<BatchItem>> {
        let start = Instant::now();
        let simulator = self.pinned();
        let evaluation_date = simulator.evaluation_date();

        #[cfg(feature = "parallel")]
        let iter = inputs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = inputs.iter();

        let items: Vec<BatchItem> = iter
            .enumerate()
            .map(|(index, input)| {
                let outcome = validate_input(input, evaluation_date).and_then(|()| {
                    simulator.simulate(input).inspect_err(|e| {
                        log::warn!("batch item {index} failed: {e}");
                    })
                });
                match outcome {
                    Ok(output) => BatchItem::Ok { index, output },
                    Err(e) => BatchItem::Error {
                        index,
                        kind: e.kind().to_string(),
                        message: e.to_string(),
                    },
                }
            })
            .collect();

        let failed = items
            .iter()
            .filter(|item| matches!(item, BatchItem::Error { .. }))
            .count();
        let mut warnings = Vec::new();
        if failed > 0 {
            warnings.push(format!("{failed} of {} items failed", items.len()));
        }

        let assumptions = SimulationAssumptions {
            evaluation_date,
            rate_policy: "per item",
            input: &inputs,
        };

        let elapsed = start.elapsed().as_micros() as u64;
        with_metadata(
            "Level-payment annuity amortization (batch, partial success)",
            &assumptions,
            warnings,
            elapsed,
            items,
        )
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Simulate one loan, measuring age against today's date.
pub fn simulate(input: &SimulationInput) -> CreditSimResult<SimulationOutput> {
    Simulator::new().simulate(input)
}

/// Fail-fast batch against today's date.
pub fn simulate_batch(inputs: &[SimulationInput]) -> CreditSimResult<Vec<SimulationOutput>> {
    Simulator::new().simulate_batch(inputs)
}

/// Partial-success batch against today's date.
pub fn simulate_batch_isolated(
    inputs: &[SimulationInput],
) -> Vec<CreditSimResult<SimulationOutput>> {
    Simulator::new().simulate_batch_isolated(inputs)
}

/// Validated single simulation in the standard envelope.
pub fn analyze_simulation(
    input: &SimulationInput,
) -> CreditSimResult<ComputationOutput<SimulationOutput>> {
    Simulator::new().analyze(input)
}

/// Validated fail-fast batch in the standard envelope.
pub fn analyze_batch(
    inputs: &[SimulationInput],
) -> CreditSimResult<ComputationOutput<Vec<SimulationOutput>>> {
    Simulator::new().analyze_batch(inputs)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rate_policy(input: &SimulationInput) -> &'static str {
    match input.rate_source {
        RateSource::BirthDate(_) => "age bracket",
        RateSource::AnnualRate(_) => "explicit override",
    }
}

fn input_warnings(input: &SimulationInput, annual_rate: Rate) -> Vec<String> {
    let mut warnings = Vec::new();
    if let RateSource::AnnualRate(_) = input.rate_source {
        warnings.push("Explicit annual rate supplied; age bracket table not consulted.".into());
    }
    if annual_rate == Decimal::ZERO {
        warnings.push("Annual rate is zero; installment is a straight division.".into());
    }
    if input.term_months > LONG_TERM_WARNING_MONTHS {
        warnings.push(format!(
            "Term of {} months exceeds {} months; check the input.",
            input.term_months, LONG_TERM_WARNING_MONTHS
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CreditSimError;
    use chrono::Months;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
        date.checked_sub_months(Months::new(12 * years)).unwrap()
    }

    fn aged(years: u32) -> SimulationInput {
        SimulationInput::with_birth_date(dec!(10000.00), 12, years_before(today(), years))
    }

    #[test]
    fn test_simulate_age_25() {
        let out = Simulator::as_of(today()).simulate(&aged(25)).unwrap();
        assert_eq!(out.monthly_installment, dec!(856.07));
        assert_eq!(out.total_interest, dec!(272.84));
        assert_eq!(out.total_amount_to_pay, dec!(10272.84));
        assert_eq!(out.annual_rate, dec!(0.05));
    }

    #[test]
    fn test_simulate_age_35() {
        let out = Simulator::as_of(today()).simulate(&aged(35)).unwrap();
        assert_eq!(out.monthly_installment, dec!(846.94));
        assert_eq!(out.total_interest, dec!(163.28));
        assert_eq!(out.total_amount_to_pay, dec!(10163.28));
    }

    #[test]
    fn test_simulate_age_41() {
        let out = Simulator::as_of(today()).simulate(&aged(41)).unwrap();
        assert_eq!(out.monthly_installment, dec!(842.39));
        assert_eq!(out.total_interest, dec!(108.68));
        assert_eq!(out.total_amount_to_pay, dec!(10108.68));
    }

    #[test]
    fn test_simulate_age_61() {
        let out = Simulator::as_of(today()).simulate(&aged(61)).unwrap();
        assert_eq!(out.monthly_installment, dec!(851.50));
        assert_eq!(out.total_interest, dec!(218.00));
        assert_eq!(out.total_amount_to_pay, dec!(10218.00));
    }

    #[test]
    fn test_simulate_explicit_rate() {
        let input = SimulationInput::with_annual_rate(dec!(10000), 12, dec!(0.035));
        let out = Simulator::as_of(today()).simulate(&input).unwrap();
        assert_eq!(out.monthly_installment, dec!(849.22));
        assert_eq!(out.total_amount_to_pay, dec!(10190.64));
        assert_eq!(out.total_interest, dec!(190.64));
    }

    #[test]
    fn test_future_birth_date_not_supported() {
        let input =
            SimulationInput::with_birth_date(dec!(10000), 12, today().succ_opt().unwrap());
        let err = Simulator::as_of(today()).simulate(&input).unwrap_err();
        assert!(matches!(err, CreditSimError::AgeNotSupported { age: -1 }));
    }

    #[test]
    fn test_zero_term_reaches_core_guard() {
        let input = SimulationInput::with_annual_rate(dec!(10000), 0, dec!(0.05));
        let err = Simulator::as_of(today()).simulate(&input).unwrap_err();
        assert!(matches!(
            err,
            CreditSimError::SimulationFailed { term_months: 0, .. }
        ));
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![aged(25), aged(35), aged(41), aged(61)];
        let sim = Simulator::as_of(today());
        let outputs = sim.simulate_batch(&inputs).unwrap();
        assert_eq!(outputs.len(), 4);
        let installments: Vec<Decimal> =
            outputs.iter().map(|o| o.monthly_installment).collect();
        assert_eq!(
            installments,
            vec![dec!(856.07), dec!(846.94), dec!(842.39), dec!(851.50)]
        );
    }

    #[test]
    fn test_batch_fail_fast() {
        let bad = SimulationInput::with_birth_date(dec!(10000), 12, dec_date(2030, 1, 1));
        let inputs = vec![aged(25), bad, aged(35)];
        let err = Simulator::as_of(today()).simulate_batch(&inputs).unwrap_err();
        assert!(matches!(err, CreditSimError::AgeNotSupported { .. }));
    }

    #[test]
    fn test_batch_isolated_keeps_good_items() {
        let bad = SimulationInput::with_birth_date(dec!(10000), 12, dec_date(2030, 1, 1));
        let inputs = vec![aged(25), bad, aged(35)];
        let results = Simulator::as_of(today()).simulate_batch_isolated(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().monthly_installment, dec!(856.07));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().monthly_installment, dec!(846.94));
    }

    #[test]
    fn test_empty_batch() {
        let sim = Simulator::as_of(today());
        assert!(sim.simulate_batch(&[]).unwrap().is_empty());
        assert!(sim.simulate_batch_isolated(&[]).is_empty());
    }

    #[test]
    fn test_analyze_envelope() {
        let input = SimulationInput::with_annual_rate(dec!(10000), 12, dec!(0.035));
        let out = Simulator::as_of(today()).analyze(&input).unwrap();
        assert_eq!(out.result.monthly_installment, dec!(849.22));
        assert!(out.methodology.contains("annuity"));
        assert!(out.warnings.iter().any(|w| w.contains("Explicit annual rate")));
        assert_eq!(out.assumptions["rate_policy"], "explicit override");
        assert_eq!(out.assumptions["evaluation_date"], "2025-01-01");
        assert!(!out.metadata.version.is_empty());
    }

    #[test]
    fn test_analyze_rejects_invalid_input() {
        let input = SimulationInput::with_annual_rate(dec!(0), 12, dec!(0.05));
        let err = Simulator::as_of(today()).analyze(&input).unwrap_err();
        match err {
            CreditSimError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_long_term_warning() {
        let input = SimulationInput::with_annual_rate(dec!(100000), 600, dec!(0.03));
        let out = Simulator::as_of(today()).analyze(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("600 months")));
    }

    #[test]
    fn test_analyze_batch_isolated_reports_status() {
        let bad = SimulationInput::with_annual_rate(dec!(-5), 12, dec!(0.05));
        let inputs = vec![aged(25), bad];
        let out = Simulator::as_of(today()).analyze_batch_isolated(&inputs);
        assert_eq!(out.result.len(), 2);
        assert!(matches!(out.result[0], BatchItem::Ok { index: 0, .. }));
        match &out.result[1] {
            BatchItem::Error { index, kind, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(kind, "INVALID_INPUT");
            }
            other => panic!("Expected error item, got {other:?}"),
        }
        assert_eq!(out.warnings, vec!["1 of 2 items failed".to_string()]);
    }

    #[test]
    fn test_analyze_batch_isolated_validates_before_simulating() {
        let future_birth =
            SimulationInput::with_birth_date(dec!(10000), 12, today().succ_opt().unwrap());
        let zero_term = SimulationInput::with_annual_rate(dec!(10000), 0, dec!(0.05));
        let inputs = vec![future_birth, aged(35), zero_term];
        let out = Simulator::as_of(today()).analyze_batch_isolated(&inputs);

        let kinds: Vec<&str> = out
            .result
            .iter()
            .map(|item| match item {
                BatchItem::Ok { .. } => "OK",
                BatchItem::Error { kind, .. } => kind.as_str(),
            })
            .collect();
        assert_eq!(kinds, vec!["INVALID_INPUT", "OK", "INVALID_INPUT"]);

        match &out.result[0] {
            BatchItem::Error { message, .. } => assert!(message.contains("birth_date")),
            other => panic!("Expected error item, got {other:?}"),
        }
        match &out.result[2] {
            BatchItem::Error { message, .. } => assert!(message.contains("term_months")),
            other => panic!("Expected error item, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_high_rate_long_term_returns_interest_only_payment() {
        let input = SimulationInput::with_annual_rate(dec!(10000), 400, dec!(2.4));
        let out = Simulator::as_of(today()).analyze(&input).unwrap();
        assert_eq!(out.result.monthly_installment, dec!(2000.00));
        assert_eq!(out.result.total_amount_to_pay, dec!(800000.00));
        assert_eq!(out.result.total_interest, dec!(790000.00));
    }

    #[test]
    fn test_schedule_uses_resolved_rate() {
        let rows = Simulator::as_of(today()).schedule(&aged(25)).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].interest, dec!(41.67));
    }

    #[test]
    fn test_analyze_schedule_envelope() {
        let out = Simulator::as_of(today()).analyze_schedule(&aged(61)).unwrap();
        assert_eq!(out.result.len(), 12);
        assert_eq!(out.result[0].payment, dec!(851.50));
        assert_eq!(out.assumptions["rate_policy"], "age bracket");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_json_input_with_birth_date() {
        let json = r#"{"principal": "10000.00", "term_months": 12, "birth_date": "2000-01-01"}"#;
        let input: SimulationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.principal, dec!(10000.00));
        assert_eq!(input.rate_source, RateSource::BirthDate(dec_date(2000, 1, 1)));
    }

    #[test]
    fn test_json_input_accepts_legacy_field_names() {
        let json = r#"{"loanAmount": "10000", "paymentTermInMonths": 12, "variableInterestRate": "0.035"}"#;
        let input: SimulationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.rate_source, RateSource::AnnualRate(dec!(0.035)));
    }

    #[test]
    fn test_json_input_requires_exactly_one_rate_source() {
        let both = r#"{"principal": "1", "term_months": 1, "birth_date": "2000-01-01", "annual_rate": "0.1"}"#;
        let neither = r#"{"principal": "1", "term_months": 1}"#;
        assert!(serde_json::from_str::<SimulationInput>(both).is_err());
        assert!(serde_json::from_str::<SimulationInput>(neither).is_err());
    }

    #[test]
    fn test_json_input_round_trips_through_wire_shape() {
        let input = SimulationInput::with_annual_rate(dec!(10000), 12, dec!(0.035));
        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value["annual_rate"], "0.035");
        assert!(value.get("birth_date").is_none());
    }

    fn dec_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
