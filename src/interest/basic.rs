use serde::{Deserialize, Serialize};

use crate::types::{usable, RateBasis, TimeUnit};

/// row of the basic calculators' record tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicRecord {
    pub serial: u32,
    pub principal: f64,
    pub rate_percent: f64,
    pub time: u32,
    pub interest: f64,
    pub amount: f64,
    pub highlight: bool,
}

/// inputs of the single time-period forms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub time: f64,
    pub time_unit: TimeUnit,
    pub rate_basis: RateBasis,
}

impl BasicInput {
    pub fn new(principal: f64, rate_percent: f64, time: f64) -> Self {
        Self {
            principal,
            rate_percent,
            time,
            time_unit: TimeUnit::Years,
            rate_basis: RateBasis::Annual,
        }
    }

    pub fn time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn rate_basis(mut self, rate_basis: RateBasis) -> Self {
        self.rate_basis = rate_basis;
        self
    }

    pub fn simple_interest(&self) -> f64 {
        basic_simple_interest(self.principal, self.rate_percent, self.time, self.time_unit, self.rate_basis)
    }

    pub fn simple_records(&self) -> Vec<BasicRecord> {
        basic_simple_records(self.principal, self.rate_percent, self.time, self.time_unit, self.rate_basis)
    }

    /// yearly compounding over `time` years; unit and basis do not apply
    pub fn compound_interest(&self) -> f64 {
        basic_compound_interest(self.principal, self.rate_percent, self.time)
    }

    pub fn compound_records(&self) -> Vec<BasicRecord> {
        basic_compound_records(self.principal, self.rate_percent, self.time)
    }
}

/// simple interest for a single time period given in `time_unit`
pub fn basic_simple_interest(
    principal: f64,
    rate_percent: f64,
    time: f64,
    time_unit: TimeUnit,
    rate_basis: RateBasis,
) -> f64 {
    principal * rate_basis.annual_rate(rate_percent) * usable(time) / time_unit.per_year()
}

/// running totals after each year (or month, for a monthly rate)
///
/// each record carries the interest accrued since the start, not just for
/// its own period. Expects a time period that passed
/// [`validate_basic`](crate::validation::validate_basic); one record is
/// produced per started period.
pub fn basic_simple_records(
    principal: f64,
    rate_percent: f64,
    time: f64,
    time_unit: TimeUnit,
    rate_basis: RateBasis,
) -> Vec<BasicRecord> {
    let (steps, step_size) = match rate_basis {
        RateBasis::Annual => (usable(time).ceil() as u32, 1.0),
        RateBasis::Monthly => ((usable(time) * 12.0).ceil() as u32, 12.0),
    };

    (1..=steps)
        .map(|serial| {
            let elapsed = f64::from(serial) / step_size;
            let interest = basic_simple_interest(principal, rate_percent, elapsed, time_unit, rate_basis);
            BasicRecord {
                serial,
                principal,
                rate_percent,
                time: serial,
                interest,
                amount: principal + interest,
                highlight: rate_basis == RateBasis::Monthly && serial % 12 == 0,
            }
        })
        .collect()
}

/// yearly compound interest over `years`
pub fn basic_compound_interest(principal: f64, rate_percent: f64, years: f64) -> f64 {
    principal * (1.0 + rate_percent / 100.0).powf(usable(years)) - principal
}

/// one record per year, each compounding on the previous year's amount
///
/// `years` should already be validated; a partial final year still gets a
/// record.
pub fn basic_compound_records(principal: f64, rate_percent: f64, years: f64) -> Vec<BasicRecord> {
    let steps = usable(years).ceil() as u32;
    let mut running_principal = principal;
    let mut records = Vec::with_capacity(steps as usize);

    for serial in 1..=steps {
        let interest = basic_compound_interest(running_principal, rate_percent, 1.0);
        records.push(BasicRecord {
            serial,
            principal: running_principal,
            rate_percent,
            time: serial,
            interest,
            amount: running_principal + interest,
            highlight: false,
        });
        running_principal += interest;
    }

    records
}
