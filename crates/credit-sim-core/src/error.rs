use rust_decimal::Decimal;
use thiserror::Error;

/// Low-level fault raised while evaluating the annuity formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Decimal overflow in {context}")]
    Overflow { context: String },
}

#[derive(Debug, Error)]
pub enum CreditSimError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Age range not found for age: {age}")]
    AgeNotSupported { age: i32 },

    #[error("Simulation failed for loan amount {principal} over {term_months} months: {cause}")]
    SimulationFailed {
        principal: Decimal,
        term_months: u32,
        #[source]
        cause: ArithmeticFault,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CreditSimError {
    /// Stable machine-readable code for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::AgeNotSupported { .. } => "AGE_NOT_SUPPORTED",
            Self::SimulationFailed { .. } => "LOAN_SIMULATION_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True when the caller supplied something the engine cannot serve,
    /// as opposed to the engine failing on otherwise acceptable input.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::AgeNotSupported { .. } | Self::SerializationError(_)
        )
    }
}

impl From<serde_json::Error> for CreditSimError {
    fn from(e: serde_json::Error) -> Self {
        CreditSimError::SerializationError(e.to_string())
    }
}
