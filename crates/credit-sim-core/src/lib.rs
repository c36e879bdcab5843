pub mod amortization;
pub mod error;
pub mod rates;
pub mod simulation;
pub mod types;
pub mod validation;

pub use error::{ArithmeticFault, CreditSimError};
pub use types::*;

/// Standard result type for all credit-sim operations
pub type CreditSimResult<T> = Result<T, CreditSimError>;
