use napi::Result as NapiResult;
use napi_derive::napi;

use credit_sim_core::simulation::{SimulationInput, Simulator};
use credit_sim_core::{amortization, rates, CreditSimError};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Engine errors keep their category code so JS callers can branch on it.
fn sim_error(e: CreditSimError) -> napi::Error {
    napi::Error::from_reason(format!("{}: {}", e.kind(), e))
}

fn parse_input<T: serde::de::DeserializeOwned>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(|e| sim_error(e.into()))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_loan(input_json: String) -> NapiResult<String> {
    let input: SimulationInput = parse_input(&input_json)?;
    let output = Simulator::new().analyze(&input).map_err(sim_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_batch(input_json: String) -> NapiResult<String> {
    let inputs: Vec<SimulationInput> = parse_input(&input_json)?;
    let output = Simulator::new().analyze_batch(&inputs).map_err(sim_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_batch_isolated(input_json: String) -> NapiResult<String> {
    let inputs: Vec<SimulationInput> = parse_input(&input_json)?;
    let output = Simulator::new().analyze_batch_isolated(&inputs);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: SimulationInput = parse_input(&input_json)?;
    let output = Simulator::new()
        .analyze_schedule(&input)
        .map_err(sim_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[napi]
pub fn rate_table() -> NapiResult<String> {
    serde_json::to_string(rates::rate_table()).map_err(to_napi_error)
}

#[napi]
pub fn round_currency(value: String) -> NapiResult<String> {
    let parsed: rust_decimal::Decimal = value.parse().map_err(to_napi_error)?;
    Ok(amortization::round_currency(parsed).to_string())
}
