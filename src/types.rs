use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interest::CompoundingFrequency;

/// investment duration split into years, months and days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tenor {
    pub years: f64,
    pub months: f64,
    pub days: f64,
}

impl Tenor {
    pub const ZERO: Tenor = Tenor { years: 0.0, months: 0.0, days: 0.0 };

    pub fn new(years: f64, months: f64, days: f64) -> Self {
        Self { years, months, days }
    }

    pub fn years(years: f64) -> Self {
        Self { years, ..Self::ZERO }
    }

    pub fn months(months: f64) -> Self {
        Self { months, ..Self::ZERO }
    }

    pub fn days(days: f64) -> Self {
        Self { days, ..Self::ZERO }
    }

    /// years component, zero when it cannot contribute
    pub fn usable_years(&self) -> f64 {
        usable(self.years)
    }

    /// months component, zero when it cannot contribute
    pub fn usable_months(&self) -> f64 {
        usable(self.months)
    }

    /// days component, zero when it cannot contribute
    pub fn usable_days(&self) -> f64 {
        usable(self.days)
    }

    /// whole tenor expressed in years (365-day year)
    pub fn total_years(&self) -> f64 {
        self.usable_years() + self.usable_months() / 12.0 + self.usable_days() / 365.0
    }

    /// true when no component contributes anything
    pub fn is_empty(&self) -> bool {
        self.total_years() == 0.0
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.usable_years() > 0.0 {
            parts.push(format!("{} years", self.years));
        }
        if self.usable_months() > 0.0 {
            parts.push(format!("{} month", self.months));
        }
        if self.usable_days() > 0.0 {
            parts.push(format!("{} days", self.days));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// zero unless the value is finite and positive
pub(crate) fn usable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// number of iterations of a `1..=value` loop
pub(crate) fn whole_periods(value: f64) -> u32 {
    usable(value).floor() as u32
}

/// whether the entered rate is per annum or per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RateBasis {
    #[default]
    Annual,
    Monthly,
}

impl RateBasis {
    /// normalise a percentage into an annual decimal rate
    pub fn annual_rate(&self, rate_percent: f64) -> f64 {
        let rate = rate_percent / 100.0;
        match self {
            RateBasis::Annual => rate,
            RateBasis::Monthly => rate * 12.0,
        }
    }
}

/// unit of the single time-period field on the basic simple interest form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeUnit {
    #[default]
    Years,
    Months,
    Days,
}

impl TimeUnit {
    /// how many of this unit make up a year
    pub fn per_year(&self) -> f64 {
        match self {
            TimeUnit::Years => 1.0,
            TimeUnit::Months => 12.0,
            TimeUnit::Days => 365.0,
        }
    }
}

/// unit a ledger row covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    Year,
    Month,
    Days,
}

impl PeriodUnit {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodUnit::Year => "Year",
            PeriodUnit::Month => "Month",
            PeriodUnit::Days => "Days",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// which calculator a form drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    SimpleInterest,
    CompoundInterest,
}

/// validated request handed to an engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub tenor: Tenor,
    pub rate_basis: RateBasis,
    pub compounding_frequency: Option<CompoundingFrequency>,
}

impl CalculationInput {
    pub fn new(principal: f64, rate_percent: f64, tenor: Tenor) -> Self {
        Self {
            principal,
            rate_percent,
            tenor,
            rate_basis: RateBasis::Annual,
            compounding_frequency: None,
        }
    }

    pub fn rate_basis(mut self, rate_basis: RateBasis) -> Self {
        self.rate_basis = rate_basis;
        self
    }

    pub fn compounded(mut self, frequency: CompoundingFrequency) -> Self {
        self.compounding_frequency = Some(frequency);
        self
    }

    /// compounding frequency, yearly when none was chosen
    pub fn frequency(&self) -> CompoundingFrequency {
        self.compounding_frequency.unwrap_or_default()
    }
}
