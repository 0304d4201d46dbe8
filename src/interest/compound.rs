use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interest::InterestEngine;
use crate::ledger::{Ledger, LedgerBuilder};
use crate::types::{whole_periods, CalculationInput, CalculatorKind, PeriodUnit, RateBasis, Tenor};

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingFrequency {
    #[default]
    Yearly,
    HalfYearly,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Yearly => "Yearly",
            CompoundingFrequency::HalfYearly => "Half Yearly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        };
        write!(f, "{} ({}/yr)", name, self.periods_per_year())
    }
}

/// compound interest earned over the tenor's years component
///
/// months and days are ignored here; the ledger builder handles months as a
/// separate phase.
pub fn compute_compound_interest(
    principal: f64,
    rate_percent: f64,
    tenor: &Tenor,
    rate_basis: RateBasis,
    frequency: CompoundingFrequency,
) -> f64 {
    let years = tenor.usable_years();
    if years == 0.0 {
        return 0.0;
    }

    let n = f64::from(frequency.periods_per_year());
    let rate = rate_basis.annual_rate(rate_percent);
    principal * (1.0 + rate / n).powf(n * years) - principal
}

pub fn build_compound_interest_ledger(input: &CalculationInput) -> Ledger {
    CompoundInterestEngine.ledger(input)
}

/// engine for compound interest calculations
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterestEngine;

impl CompoundInterestEngine {
    /// interest on `principal` for a fraction of a year
    fn period_interest(&self, input: &CalculationInput, principal: f64, years: f64) -> f64 {
        compute_compound_interest(
            principal,
            input.rate_percent,
            &Tenor::years(years),
            input.rate_basis,
            input.frequency(),
        )
    }

    /// month rows that follow the whole years
    fn month_phase(
        &self,
        input: &CalculationInput,
        builder: &mut LedgerBuilder,
        mut running_principal: f64,
        months: u32,
    ) {
        match input.frequency() {
            CompoundingFrequency::Yearly => {
                let per_month = self.period_interest(input, running_principal, 1.0) / 12.0;
                for i in 1..=months {
                    builder.push(i, PeriodUnit::Month, per_month, i % 12 == 0);
                }
            }
            CompoundingFrequency::HalfYearly | CompoundingFrequency::Quarterly => {
                let block = 12 / input.frequency().periods_per_year();
                let mut per_month = 0.0;
                for i in 1..=months {
                    if (i - 1) % block == 0 {
                        let interest = self.period_interest(
                            input,
                            running_principal,
                            f64::from(block) / 12.0,
                        );
                        running_principal += interest;
                        per_month = interest / f64::from(block);
                    }
                    builder.push(i, PeriodUnit::Month, per_month, i % 12 == 0);
                }
            }
            // daily rows use the one-month period as well
            CompoundingFrequency::Monthly | CompoundingFrequency::Daily => {
                for i in 1..=months {
                    let interest = self.period_interest(input, running_principal, 1.0 / 12.0);
                    builder.push(i, PeriodUnit::Month, interest, i % 12 == 0);
                    running_principal += interest;
                }
            }
        }
    }
}

impl InterestEngine for CompoundInterestEngine {
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::CompoundInterest
    }

    fn interest(&self, input: &CalculationInput) -> f64 {
        compute_compound_interest(
            input.principal,
            input.rate_percent,
            &input.tenor,
            input.rate_basis,
            input.frequency(),
        )
    }

    fn ledger(&self, input: &CalculationInput) -> Ledger {
        let mut builder = LedgerBuilder::new(input.principal);
        let mut running_principal = input.principal;

        for i in 1..=whole_periods(input.tenor.years) {
            let interest = self.period_interest(input, running_principal, 1.0);
            builder.push(i, PeriodUnit::Year, interest, false);
            running_principal += interest;
        }

        let months = whole_periods(input.tenor.months);
        if months > 0 {
            self.month_phase(input, &mut builder, running_principal, months);
        }

        let ledger = builder.finish();
        tracing::debug!(
            rows = ledger.len(),
            frequency = %input.frequency(),
            total_interest = ledger.total_interest(),
            "built compound interest ledger"
        );
        ledger
    }
}

/// calculate the future value with compound interest over whole years
pub fn future_value(
    present_value: f64,
    rate_percent: f64,
    years: f64,
    frequency: CompoundingFrequency,
) -> f64 {
    present_value
        + compute_compound_interest(
            present_value,
            rate_percent,
            &Tenor::years(years),
            RateBasis::Annual,
            frequency,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn ledger(tenor: Tenor, frequency: CompoundingFrequency) -> Ledger {
        let input = CalculationInput::new(1000.0, 12.0, tenor).compounded(frequency);
        build_compound_interest_ledger(&input)
    }

    #[test]
    fn test_one_year_yearly_is_simple_growth() {
        let interest = compute_compound_interest(
            1000.0,
            10.0,
            &Tenor::years(1.0),
            RateBasis::Annual,
            CompoundingFrequency::Yearly,
        );
        assert_relative_eq!(interest, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_compounding_comparison() {
        let tenor = Tenor::years(1.0);
        let by_frequency: Vec<f64> = CompoundingFrequency::ALL
            .iter()
            .map(|f| compute_compound_interest(10_000.0, 12.0, &tenor, RateBasis::Annual, *f))
            .collect();

        // yearly < half-yearly < quarterly < monthly < daily
        for pair in by_frequency.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_relative_eq!(by_frequency[3], 1268.25, epsilon = 0.01);
    }

    #[test]
    fn test_months_ignored_by_single_call() {
        let with_months = compute_compound_interest(
            1000.0,
            10.0,
            &Tenor::new(2.0, 6.0, 0.0),
            RateBasis::Annual,
            CompoundingFrequency::Monthly,
        );
        let without = compute_compound_interest(
            1000.0,
            10.0,
            &Tenor::years(2.0),
            RateBasis::Annual,
            CompoundingFrequency::Monthly,
        );
        assert_eq!(with_months, without);
        assert_eq!(
            compute_compound_interest(1000.0, 10.0, &Tenor::months(6.0), RateBasis::Annual, CompoundingFrequency::Monthly),
            0.0
        );
    }

    #[test]
    fn test_years_phase_compounds_row_to_row() {
        let ledger = ledger(Tenor::years(3.0), CompoundingFrequency::Yearly);
        let rows = ledger.rows();
        assert_eq!(rows.len(), 3);
        assert_relative_eq!(rows[0].period_interest, 120.0, max_relative = 1e-12);
        assert_relative_eq!(rows[1].period_interest, 134.4, max_relative = 1e-12);
        assert_relative_eq!(rows[2].period_interest, 150.528, max_relative = 1e-12);
        assert_relative_eq!(ledger.final_amount(), 1404.928, max_relative = 1e-12);
        assert_eq!(rows[2].period_label, "3rd Year");
    }

    #[test]
    fn test_yearly_months_use_fixed_slice() {
        let ledger = ledger(Tenor::new(1.0, 5.0, 0.0), CompoundingFrequency::Yearly);
        let rows = ledger.rows();
        assert_eq!(rows.len(), 6);
        // one year on 1120, split over twelve months
        for row in &rows[1..] {
            assert_eq!(row.period_unit, PeriodUnit::Month);
            assert_relative_eq!(row.period_interest, 134.4 / 12.0, max_relative = 1e-12);
        }
        assert_eq!(rows[5].period_label, "5th Month");
    }

    #[test]
    fn test_half_yearly_months_recompute_every_six() {
        let ledger = ledger(Tenor::months(8.0), CompoundingFrequency::HalfYearly);
        let rows = ledger.rows();
        assert_eq!(rows.len(), 8);

        let first = 1000.0 * 1.06f64.powf(1.0) - 1000.0;
        let second = 1060.0 * 1.06f64.powf(1.0) - 1060.0;
        for row in &rows[..6] {
            assert_relative_eq!(row.period_interest, first / 6.0, max_relative = 1e-9);
        }
        for row in &rows[6..] {
            assert_relative_eq!(row.period_interest, second / 6.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_quarterly_months_recompute_every_three() {
        let ledger = ledger(Tenor::months(4.0), CompoundingFrequency::Quarterly);
        let rows = ledger.rows();
        assert_eq!(rows.len(), 4);
        assert_relative_eq!(rows[0].period_interest, 10.0, max_relative = 1e-9);
        assert_relative_eq!(rows[2].period_interest, 10.0, max_relative = 1e-9);
        assert_relative_eq!(rows[3].period_interest, 10.3, max_relative = 1e-9);
    }

    #[test]
    fn test_monthly_months_compound_each_row() {
        let ledger = ledger(Tenor::months(3.0), CompoundingFrequency::Monthly);
        let rows = ledger.rows();
        assert_relative_eq!(rows[0].period_interest, 10.0, max_relative = 1e-9);
        assert_relative_eq!(rows[1].period_interest, 10.1, max_relative = 1e-9);
        assert_relative_eq!(rows[2].period_interest, 10.201, max_relative = 1e-9);
    }

    #[test]
    fn test_monthly_rate_is_scaled_to_annual() {
        let tenor = Tenor::years(3.0);
        for f in CompoundingFrequency::ALL {
            let monthly = compute_compound_interest(1000.0, 1.0, &tenor, RateBasis::Monthly, f);
            let annual = compute_compound_interest(1000.0, 12.0, &tenor, RateBasis::Annual, f);
            assert_relative_eq!(monthly, annual, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_quarterly_months_with_monthly_rate() {
        // 1% a month is 12% a year, so a quarter earns 3%
        let input = CalculationInput::new(1000.0, 1.0, Tenor::new(1.0, 4.0, 0.0))
            .rate_basis(RateBasis::Monthly)
            .compounded(CompoundingFrequency::Quarterly);
        let ledger = build_compound_interest_ledger(&input);
        let rows = ledger.rows();
        assert_eq!(rows.len(), 5);

        let first_year = 1000.0 * 1.03f64.powf(4.0) - 1000.0;
        assert_relative_eq!(rows[0].period_interest, first_year, max_relative = 1e-9);

        let opening = 1000.0 + first_year;
        for row in &rows[1..4] {
            assert_relative_eq!(row.period_interest, opening * 0.03 / 3.0, max_relative = 1e-9);
        }
        assert_relative_eq!(rows[4].period_interest, opening * 1.03 * 0.03 / 3.0, max_relative = 1e-9);
    }

    #[test]
    fn test_daily_months_match_monthly_rows() {
        let tenor = Tenor::months(6.0);
        let daily = ledger(tenor, CompoundingFrequency::Daily);
        let monthly = ledger(tenor, CompoundingFrequency::Monthly);
        assert_eq!(daily.len(), monthly.len());

        // a 1/12-year period at n = 365 is slightly richer than one month at n = 12
        for (d, m) in daily.rows().iter().zip(monthly.rows()) {
            assert_eq!(d.period_label, m.period_label);
            assert!(d.period_interest >= m.period_interest);
            assert_relative_eq!(d.period_interest, m.period_interest, max_relative = 1e-2);
        }
    }

    #[test]
    fn test_empty_and_degenerate_tenor() {
        assert!(ledger(Tenor::ZERO, CompoundingFrequency::Monthly).is_empty());
        assert!(ledger(Tenor::days(20.0), CompoundingFrequency::Monthly).is_empty());
        assert!(ledger(Tenor::new(f64::NAN, -2.0, 0.0), CompoundingFrequency::Quarterly).is_empty());
    }

    #[test]
    fn test_future_value() {
        let fv = future_value(10_000.0, 5.0, 3.0, CompoundingFrequency::Yearly);
        assert_relative_eq!(fv, 11576.25, max_relative = 1e-12);
    }

    #[test]
    fn test_frequency_display() {
        assert_eq!(CompoundingFrequency::HalfYearly.to_string(), "Half Yearly (2/yr)");
        assert_eq!(CompoundingFrequency::Daily.to_string(), "Daily (365/yr)");
    }

    fn frequency() -> impl Strategy<Value = CompoundingFrequency> {
        prop::sample::select(CompoundingFrequency::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_ledger_balances(
            p in 1.0f64..1e6,
            r in 0.01f64..100.0,
            y in 0u32..60,
            m in 0u32..12,
            f in frequency(),
        ) {
            let input = CalculationInput::new(p, r, Tenor::new(y as f64, m as f64, 0.0)).compounded(f);
            let ledger = build_compound_interest_ledger(&input);

            prop_assert_eq!(ledger.len() as u32, y + m);
            for pair in ledger.rows().windows(2) {
                prop_assert!(pair[1].cumulative_interest >= pair[0].cumulative_interest);
            }
            if let Some(last) = ledger.last() {
                prop_assert_eq!(last.running_balance, p + last.cumulative_interest);
            }
        }

        #[test]
        fn prop_compute_is_idempotent(p in 1.0f64..1e6, r in 0.01f64..100.0, y in 0u32..60, f in frequency()) {
            let tenor = Tenor::years(y as f64);
            let a = compute_compound_interest(p, r, &tenor, RateBasis::Annual, f);
            let b = compute_compound_interest(p, r, &tenor, RateBasis::Annual, f);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn prop_monthly_basis_matches_twelve_times_annual(
            p in 1.0f64..1e6,
            r in 0.01f64..8.0,
            y in 0u32..60,
            f in frequency(),
        ) {
            let tenor = Tenor::years(y as f64);
            let monthly = compute_compound_interest(p, r, &tenor, RateBasis::Monthly, f);
            let annual = compute_compound_interest(p, 12.0 * r, &tenor, RateBasis::Annual, f);
            prop_assert!(approx::relative_eq!(monthly, annual, epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
