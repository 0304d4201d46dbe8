use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::format::CurrencyFormat;
use crate::interest::CompoundingFrequency;
use crate::ledger::LedgerOptions;
use crate::types::{usable, CalculatorKind, RateBasis, Tenor};
use crate::validation::ValidationLimits;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub currency: CurrencyFormat,
    pub limits: ValidationLimits,
    pub tenor_bounds: TenorBounds,
    pub ledger: LedgerOptions,
    pub simple_interest: FormDefaults,
    pub compound_interest: FormDefaults,
}

/// largest values the tenor pickers offer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenorBounds {
    pub max_years: f64,
    pub max_months: f64,
    pub max_days: f64,
}

/// initial field values of a form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub principal: f64,
    pub rate_percent: f64,
    pub tenor: Tenor,
    pub rate_basis: RateBasis,
    pub compounding_frequency: Option<CompoundingFrequency>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            limits: ValidationLimits::default(),
            tenor_bounds: TenorBounds::default(),
            ledger: LedgerOptions::default(),
            simple_interest: FormDefaults::simple_interest(),
            compound_interest: FormDefaults::compound_interest(),
        }
    }
}

impl Default for TenorBounds {
    fn default() -> Self {
        Self {
            max_years: 60.0,
            max_months: 11.0,
            max_days: 30.0,
        }
    }
}

impl TenorBounds {
    /// pull every component into `0..=max`; unusable values become zero
    pub fn clamp(&self, tenor: Tenor) -> Tenor {
        Tenor {
            years: usable(tenor.years).min(self.max_years),
            months: usable(tenor.months).min(self.max_months),
            days: usable(tenor.days).min(self.max_days),
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self::simple_interest()
    }
}

impl FormDefaults {
    /// create simple interest form defaults
    pub fn simple_interest() -> Self {
        Self {
            principal: 1000.0,
            rate_percent: 3.0,
            tenor: Tenor::years(1.0),
            rate_basis: RateBasis::Annual,
            compounding_frequency: None,
        }
    }

    /// create compound interest form defaults
    pub fn compound_interest() -> Self {
        Self {
            principal: 1000.0,
            rate_percent: 10.0,
            tenor: Tenor::years(1.0),
            rate_basis: RateBasis::Annual,
            compounding_frequency: Some(CompoundingFrequency::Yearly),
        }
    }
}

impl CalculatorConfig {
    /// parse a JSON document; missing sections fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn defaults_for(&self, kind: CalculatorKind) -> &FormDefaults {
        match kind {
            CalculatorKind::SimpleInterest => &self.simple_interest,
            CalculatorKind::CompoundInterest => &self.compound_interest,
        }
    }

    /// reject limits that would make every input invalid
    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if !(limits.min_principal > 0.0) {
            return Err(invalid("min_principal must be positive"));
        }
        if !(limits.max_rate_percent > 0.0) {
            return Err(invalid("max_rate_percent must be positive"));
        }
        if !(limits.min_time_period <= limits.max_time_period) {
            return Err(invalid("min_time_period exceeds max_time_period"));
        }

        let bounds = &self.tenor_bounds;
        if [bounds.max_years, bounds.max_months, bounds.max_days]
            .iter()
            .any(|v| !(*v >= 0.0))
        {
            return Err(invalid("tenor bounds must be non-negative"));
        }
        if !(self.ledger.monthly_breakdown_max_years >= 0.0) {
            return Err(invalid("monthly_breakdown_max_years must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> CalculatorError {
    CalculatorError::InvalidConfiguration {
        message: message.to_string(),
    }
}
