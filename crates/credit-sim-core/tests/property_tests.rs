use chrono::NaiveDate;
use credit_sim_core::amortization::{self, round_currency};
use credit_sim_core::rates;
use credit_sim_core::simulation::{SimulationInput, Simulator};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cents(value: u64) -> Decimal {
    Decimal::new(value as i64, 2)
}

fn basis_points(value: u32) -> Decimal {
    Decimal::new(i64::from(value), 4)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_totals_are_consistent_with_installment(
        principal_cents in 1u64..100_000_000,
        rate_bp in 0u32..3_000,
        term in 1u32..480,
    ) {
        let principal = cents(principal_cents);
        let out = amortization::compute_installment(principal, basis_points(rate_bp), term).unwrap();

        prop_assert_eq!(
            out.total_amount_to_pay,
            round_currency(out.monthly_installment * Decimal::from(term))
        );
        prop_assert_eq!(out.total_interest, out.total_amount_to_pay - principal);
        prop_assert_eq!(out.monthly_installment.scale(), 2);
        prop_assert_eq!(out.total_amount_to_pay.scale(), 2);
        prop_assert_eq!(out.total_interest.scale(), 2);
    }

    #[test]
    fn prop_higher_rate_never_lowers_installment(
        principal_cents in 1u64..100_000_000,
        low_bp in 0u32..3_000,
        step_bp in 0u32..1_000,
        term in 1u32..480,
    ) {
        let principal = cents(principal_cents);
        let low = amortization::compute_installment(principal, basis_points(low_bp), term).unwrap();
        let high = amortization::compute_installment(
            principal,
            basis_points(low_bp + step_bp),
            term,
        )
        .unwrap();
        prop_assert!(high.monthly_installment >= low.monthly_installment);
    }

    #[test]
    fn prop_simulation_is_idempotent(
        principal_cents in 1u64..10_000_000,
        age in 0u32..100,
        term in 1u32..360,
    ) {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let birth_date = NaiveDate::from_ymd_opt(2025 - age as i32, 1, 15).unwrap();
        let input = SimulationInput::with_birth_date(cents(principal_cents), term, birth_date);
        let sim = Simulator::as_of(as_of);

        let first = sim.simulate(&input).unwrap();
        let second = sim.simulate(&input).unwrap();
        prop_assert_eq!(first.monthly_installment.serialize(), second.monthly_installment.serialize());
        prop_assert_eq!(first.total_interest.serialize(), second.total_interest.serialize());
        prop_assert_eq!(first.total_amount_to_pay.serialize(), second.total_amount_to_pay.serialize());
        prop_assert_eq!(first.annual_rate, rates::rate_for_age(age as i32).unwrap());
    }

    #[test]
    fn prop_override_rate_used_verbatim(
        rate_bp in 1u32..3_000,
        term in 1u32..360,
    ) {
        let sim = Simulator::as_of(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let principal = Decimal::from(25_000);
        let input = SimulationInput::with_annual_rate(principal, term, basis_points(rate_bp));

        let simulated = sim.simulate(&input).unwrap();
        let direct = amortization::compute_installment(principal, basis_points(rate_bp), term).unwrap();
        prop_assert_eq!(simulated.annual_rate, basis_points(rate_bp));
        prop_assert_eq!(simulated.monthly_installment, direct.monthly_installment);
        prop_assert_eq!(simulated.total_amount_to_pay, direct.total_amount_to_pay);
    }

    #[test]
    fn prop_batch_equals_single(
        principals in proptest::collection::vec(1u64..10_000_000, 0..20),
        rate_bp in 1u32..2_000,
        term in 1u32..240,
    ) {
        let sim = Simulator::as_of(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let inputs: Vec<SimulationInput> = principals
            .iter()
            .map(|p| SimulationInput::with_annual_rate(cents(*p), term, basis_points(rate_bp)))
            .collect();
        let batch = sim.simulate_batch(&inputs).unwrap();
        prop_assert_eq!(batch.len(), inputs.len());
        for (input, output) in inputs.iter().zip(&batch) {
            prop_assert_eq!(*output, sim.simulate(input).unwrap());
        }
    }

    #[test]
    fn prop_schedule_fully_amortizes(
        principal_cents in 100u64..10_000_000,
        rate_bp in 0u32..2_000,
        term in 1u32..240,
    ) {
        let principal = cents(principal_cents);
        let rows = amortization::amortization_schedule(principal, basis_points(rate_bp), term).unwrap();
        prop_assert_eq!(rows.len(), term as usize);
        let repaid: Decimal = rows.iter().map(|r| r.principal).sum();
        prop_assert_eq!(repaid, principal);
        prop_assert_eq!(rows.last().unwrap().balance, Decimal::ZERO);
        prop_assert!(rows.iter().all(|r| r.balance >= Decimal::ZERO));
    }
}
