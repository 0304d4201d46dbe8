use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::errors::{CalculatorError, Result};
use crate::interest::{engine_for, CompoundingFrequency};
use crate::ledger::{Ledger, LedgerSummary};
use crate::types::{CalculationInput, CalculatorKind, RateBasis, Tenor};
use crate::validation::{validate_input, PRINCIPAL_LABEL, RATE_LABEL};

/// a single field edit
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    PrincipalChanged(String),
    RateChanged(String),
    YearsChanged(f64),
    MonthsChanged(f64),
    DaysChanged(f64),
    RateBasisChanged(RateBasis),
    FrequencyChanged(CompoundingFrequency),
}

/// everything a presentation layer needs after a successful submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub kind: CalculatorKind,
    pub input: CalculationInput,
    /// headline interest; compound forms take it from the ledger so the
    /// trailing months are included
    pub interest: f64,
    pub summary: LedgerSummary,
    pub ledger: Ledger,
}

/// field values of one calculator form
///
/// edits go through [`CalculatorForm::apply`], which returns the next form
/// rather than mutating the caller's copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    kind: CalculatorKind,
    config: CalculatorConfig,
    principal: String,
    rate: String,
    tenor: Tenor,
    rate_basis: RateBasis,
    frequency: CompoundingFrequency,
    error: Option<String>,
    submitted: Option<CalculationInput>,
}

impl CalculatorForm {
    pub fn new(kind: CalculatorKind, config: CalculatorConfig) -> Self {
        let defaults = *config.defaults_for(kind);
        Self {
            kind,
            principal: config.currency.whole().format(defaults.principal),
            rate: defaults.rate_percent.to_string(),
            tenor: config.tenor_bounds.clamp(defaults.tenor),
            rate_basis: defaults.rate_basis,
            frequency: defaults.compounding_frequency.unwrap_or_default(),
            error: None,
            submitted: None,
            config,
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    /// principal as displayed, e.g. `₹10,000`
    pub fn principal_text(&self) -> &str {
        &self.principal
    }

    pub fn rate_text(&self) -> &str {
        &self.rate
    }

    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    pub fn rate_basis(&self) -> RateBasis {
        self.rate_basis
    }

    pub fn frequency(&self) -> CompoundingFrequency {
        self.frequency
    }

    /// message from the last rejected submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// snapshot accepted by the last successful submit
    pub fn submitted(&self) -> Option<&CalculationInput> {
        self.submitted.as_ref()
    }

    /// apply a field edit
    pub fn apply(self, event: FormEvent) -> Self {
        let bounds = self.config.tenor_bounds;
        match event {
            FormEvent::PrincipalChanged(text) => {
                let whole = self.config.currency.whole();
                let amount = whole.parse(&text).unwrap_or(0.0);
                Self {
                    principal: whole.format(amount),
                    ..self
                }
            }
            FormEvent::RateChanged(text) => Self { rate: text, ..self },
            FormEvent::YearsChanged(years) => Self {
                tenor: bounds.clamp(Tenor { years, ..self.tenor }),
                ..self
            },
            FormEvent::MonthsChanged(months) => Self {
                tenor: bounds.clamp(Tenor { months, ..self.tenor }),
                ..self
            },
            FormEvent::DaysChanged(days) => Self {
                tenor: bounds.clamp(Tenor { days, ..self.tenor }),
                ..self
            },
            FormEvent::RateBasisChanged(rate_basis) => Self { rate_basis, ..self },
            FormEvent::FrequencyChanged(frequency) => Self { frequency, ..self },
        }
    }

    /// parse the current fields into an engine input, without validating ranges
    pub fn current_input(&self) -> Result<CalculationInput> {
        let principal = self
            .config
            .currency
            .parse(&self.principal)
            .map_err(|_| CalculatorError::NotANumber {
                label: PRINCIPAL_LABEL.to_string(),
            })?;
        let rate_percent = self
            .rate
            .trim()
            .parse::<f64>()
            .map_err(|_| CalculatorError::NotANumber {
                label: RATE_LABEL.to_string(),
            })?;

        let input = CalculationInput::new(principal, rate_percent, self.tenor).rate_basis(self.rate_basis);
        Ok(match self.kind {
            CalculatorKind::CompoundInterest => input.compounded(self.frequency),
            CalculatorKind::SimpleInterest => input,
        })
    }

    /// validate the current fields and remember them as the submitted snapshot
    pub fn submit(self) -> Self {
        let checked = self
            .current_input()
            .and_then(|input| validate_input(&input, &self.config.limits).map(|_| input));

        match checked {
            Ok(input) => Self {
                submitted: Some(input),
                error: None,
                ..self
            },
            Err(err) => Self {
                error: Some(err.to_string()),
                ..self
            },
        }
    }

    /// ledger and totals for the submitted snapshot
    pub fn report(&self) -> Result<CalculationReport> {
        let input = self.submitted.ok_or(CalculatorError::NotSubmitted)?;
        let engine = engine_for(self.kind, self.config.ledger);
        let ledger = engine.ledger(&input);
        let interest = match self.kind {
            CalculatorKind::CompoundInterest => ledger.total_interest(),
            CalculatorKind::SimpleInterest => engine.interest(&input),
        };

        Ok(CalculationReport {
            kind: self.kind,
            input,
            interest,
            summary: ledger.summary(),
            ledger,
        })
    }
}
