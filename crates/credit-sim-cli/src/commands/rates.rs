use serde_json::Value;

use credit_sim_core::rates;

pub fn run_rates() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(rates::rate_table())?)
}
