pub mod rates;
pub mod simulation;
