use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::interest::BasicInput;
use crate::types::CalculationInput;

pub const PRINCIPAL_LABEL: &str = "Principal amount";
pub const RATE_LABEL: &str = "Rate of interest";
pub const TIME_LABEL: &str = "Time period";

/// bounds enforced before an engine is invoked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub min_principal: f64,
    pub max_rate_percent: f64,
    pub min_time_period: f64,
    pub max_time_period: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_principal: 1.0,
            max_rate_percent: 100.0,
            min_time_period: 1.0,
            max_time_period: 50.0,
        }
    }
}

/// principal and rate checks used by the tenor-based forms
pub fn validate_input(input: &CalculationInput, limits: &ValidationLimits) -> Result<()> {
    check_principal(input.principal, limits)
        .and_then(|_| check_rate(input.rate_percent, limits))
        .map_err(reject)
}

/// principal, rate and time-period checks used by the basic forms
pub fn validate_basic(input: &BasicInput, limits: &ValidationLimits) -> Result<()> {
    check_principal(input.principal, limits)
        .and_then(|_| check_rate(input.rate_percent, limits))
        .and_then(|_| check_time(input.time, limits))
        .map_err(reject)
}

fn reject(err: CalculatorError) -> CalculatorError {
    tracing::warn!(error = %err, "input rejected");
    err
}

fn check_principal(principal: f64, limits: &ValidationLimits) -> Result<()> {
    let label = PRINCIPAL_LABEL.to_string();
    if !principal.is_finite() {
        return Err(CalculatorError::NotANumber { label });
    }
    if principal.fract() != 0.0 {
        return Err(CalculatorError::NotAnInteger { label });
    }
    if principal < limits.min_principal {
        return Err(CalculatorError::BelowMinimum {
            label,
            limit: limits.min_principal,
        });
    }
    Ok(())
}

fn check_rate(rate_percent: f64, limits: &ValidationLimits) -> Result<()> {
    let label = RATE_LABEL.to_string();
    if !rate_percent.is_finite() {
        return Err(CalculatorError::NotANumber { label });
    }
    if rate_percent > limits.max_rate_percent {
        return Err(CalculatorError::AboveMaximum {
            label,
            limit: limits.max_rate_percent,
        });
    }
    if rate_percent <= 0.0 {
        return Err(CalculatorError::NotGreaterThan { label, limit: 0.0 });
    }
    Ok(())
}

fn check_time(time: f64, limits: &ValidationLimits) -> Result<()> {
    let label = TIME_LABEL.to_string();
    if !time.is_finite() {
        return Err(CalculatorError::NotANumber { label });
    }
    if time < limits.min_time_period {
        return Err(CalculatorError::BelowMinimum {
            label,
            limit: limits.min_time_period,
        });
    }
    if time > limits.max_time_period {
        return Err(CalculatorError::AboveMaximum {
            label,
            limit: limits.max_time_period,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tenor;

    fn input(principal: f64, rate: f64) -> CalculationInput {
        CalculationInput::new(principal, rate, Tenor::ZERO)
    }

    fn message(result: Result<()>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_accepts_valid_input() {
        let limits = ValidationLimits::default();
        assert!(validate_input(&input(1000.0, 10.0), &limits).is_ok());
        assert!(validate_input(&input(1.0, 100.0), &limits).is_ok());
        assert!(validate_basic(&BasicInput::new(1.0, 0.5, 50.0), &limits).is_ok());
    }

    #[test]
    fn test_principal_rules() {
        let limits = ValidationLimits::default();
        assert_eq!(
            message(validate_input(&input(0.0, 10.0), &limits)),
            "\"Principal amount\" must be greater than or equal to 1"
        );
        assert_eq!(
            message(validate_input(&input(100.5, 10.0), &limits)),
            "\"Principal amount\" must be an integer"
        );
        assert_eq!(
            message(validate_input(&input(f64::NAN, 10.0), &limits)),
            "\"Principal amount\" must be a number"
        );
    }

    #[test]
    fn test_rate_rules() {
        let limits = ValidationLimits::default();
        assert_eq!(
            message(validate_input(&input(1000.0, 0.0), &limits)),
            "\"Rate of interest\" must be greater than 0"
        );
        assert_eq!(
            message(validate_input(&input(1000.0, 100.01), &limits)),
            "\"Rate of interest\" must be less than or equal to 100"
        );
    }

    #[test]
    fn test_principal_checked_before_rate() {
        let err = validate_input(&input(0.0, 0.0), &ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, CalculatorError::BelowMinimum { .. }));
    }

    #[test]
    fn test_basic_time_range() {
        let limits = ValidationLimits::default();
        assert_eq!(
            message(validate_basic(&BasicInput::new(1000.0, 10.0, 0.5), &limits)),
            "\"Time period\" must be greater than or equal to 1"
        );
        assert_eq!(
            message(validate_basic(&BasicInput::new(1000.0, 10.0, 51.0), &limits)),
            "\"Time period\" must be less than or equal to 50"
        );
    }

    #[test]
    fn test_tenor_not_validated_for_tenor_forms() {
        let junk = CalculationInput::new(1000.0, 10.0, Tenor::new(-5.0, f64::NAN, 0.0));
        assert!(validate_input(&junk, &ValidationLimits::default()).is_ok());
    }
}
