use crate::interest::InterestEngine;
use crate::ledger::{Ledger, LedgerBuilder, LedgerOptions};
use crate::types::{whole_periods, CalculationInput, CalculatorKind, PeriodUnit, RateBasis, Tenor};

/// simple interest on `principal` over the whole tenor
pub fn compute_simple_interest(
    principal: f64,
    rate_percent: f64,
    tenor: &Tenor,
    rate_basis: RateBasis,
) -> f64 {
    principal * rate_basis.annual_rate(rate_percent) * tenor.total_years()
}

/// ledger with the default breakdown options
pub fn build_simple_interest_ledger(input: &CalculationInput) -> Ledger {
    SimpleInterestEngine::default().ledger(input)
}

/// engine for linear (non-compounding) interest
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterestEngine {
    pub options: LedgerOptions,
}

impl SimpleInterestEngine {
    pub fn new(options: LedgerOptions) -> Self {
        Self { options }
    }

    fn period_interest(&self, input: &CalculationInput, period: Tenor) -> f64 {
        compute_simple_interest(input.principal, input.rate_percent, &period, input.rate_basis)
    }
}

impl InterestEngine for SimpleInterestEngine {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::SimpleInterest
    }

    fn interest(&self, input: &CalculationInput) -> f64 {
        compute_simple_interest(input.principal, input.rate_percent, &input.tenor, input.rate_basis)
    }

    fn ledger(&self, input: &CalculationInput) -> Ledger {
        let tenor = input.tenor;
        let mut builder = LedgerBuilder::new(input.principal);

        let years = tenor.usable_years();
        if years > 0.0 {
            let monthly = input.rate_basis == RateBasis::Monthly
                && years <= self.options.monthly_breakdown_max_years;
            let (count, period, unit) = if monthly {
                (whole_periods(years * 12.0), Tenor::years(1.0 / 12.0), PeriodUnit::Month)
            } else {
                (whole_periods(years), Tenor::years(1.0), PeriodUnit::Year)
            };

            for i in 1..=count {
                let interest = self.period_interest(input, period);
                builder.push(i, unit, interest, monthly && i % 12 == 0);
            }
        }

        for i in 1..=whole_periods(tenor.months) {
            let interest = self.period_interest(input, Tenor::months(1.0));
            builder.push(i, PeriodUnit::Month, interest, false);
        }

        let days = tenor.usable_days();
        if days > 0.0 {
            let interest = self.period_interest(input, Tenor::days(days));
            builder.push_days(days, interest);
        }

        let ledger = builder.finish();
        tracing::debug!(
            rows = ledger.len(),
            total_interest = ledger.total_interest(),
            "built simple interest ledger"
        );
        ledger
    }
}
