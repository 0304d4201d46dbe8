use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("\"{label}\" must be a number")]
    NotANumber {
        label: String,
    },

    #[error("\"{label}\" must be an integer")]
    NotAnInteger {
        label: String,
    },

    #[error("\"{label}\" must be greater than or equal to {limit}")]
    BelowMinimum {
        label: String,
        limit: f64,
    },

    #[error("\"{label}\" must be greater than {limit}")]
    NotGreaterThan {
        label: String,
        limit: f64,
    },

    #[error("\"{label}\" must be less than or equal to {limit}")]
    AboveMaximum {
        label: String,
        limit: f64,
    },

    #[error("invalid amount: {input:?}")]
    InvalidAmount {
        input: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("nothing submitted yet")]
    NotSubmitted,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalculatorError {
    /// true for the errors a form shows next to its inputs
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalculatorError::NotANumber { .. }
                | CalculatorError::NotAnInteger { .. }
                | CalculatorError::BelowMinimum { .. }
                | CalculatorError::NotGreaterThan { .. }
                | CalculatorError::AboveMaximum { .. }
                | CalculatorError::InvalidAmount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
