use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::format::{ordinal, round_to, CurrencyFormat};
use crate::types::PeriodUnit;

/// one elapsed period in a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub period_index: u32,
    pub period_label: String,
    pub period_unit: PeriodUnit,
    pub period_interest: f64,
    pub cumulative_interest: f64,
    pub running_balance: f64,
    /// marks a year boundary when rows are monthly
    pub highlight: bool,
}

/// knobs that change how ledgers are broken down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerOptions {
    /// a monthly-rate simple interest ledger is itemised per month up to this many years
    pub monthly_breakdown_max_years: f64,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            monthly_breakdown_max_years: 5.0,
        }
    }
}

/// headline figures for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub principal: f64,
    pub total_interest: f64,
    pub final_amount: f64,
}

/// chart-ready series, all of equal length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub interest: Vec<f64>,
    pub amount: Vec<f64>,
    pub principal: Vec<f64>,
}

/// ordered record of interest accrual, oldest period first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    principal: f64,
    rows: Vec<LedgerRow>,
}

impl Ledger {
    pub fn empty(principal: f64) -> Self {
        Self {
            principal,
            rows: Vec::new(),
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&LedgerRow> {
        self.rows.last()
    }

    /// cumulative interest of the last row, zero when empty
    pub fn total_interest(&self) -> f64 {
        self.last().map(|r| r.cumulative_interest).unwrap_or(0.0)
    }

    pub fn final_amount(&self) -> f64 {
        self.principal + self.total_interest()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            principal: self.principal,
            total_interest: self.total_interest(),
            final_amount: self.final_amount(),
        }
    }

    /// per-period interest, running balance and a flat principal line
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.rows.iter().map(|r| r.period_label.clone()).collect(),
            interest: self.rows.iter().map(|r| round_to(r.period_interest, 2)).collect(),
            amount: self.rows.iter().map(|r| round_to(r.running_balance, 2)).collect(),
            principal: self.rows.iter().map(|_| round_to(self.principal, 2)).collect(),
        }
    }

    /// rows rendered as display strings: label, interest, total interest, balance
    pub fn formatted_rows(&self, format: &CurrencyFormat) -> Vec<[String; 4]> {
        self.rows
            .iter()
            .map(|r| {
                [
                    r.period_label.clone(),
                    format.format(r.period_interest),
                    format.format(r.cumulative_interest),
                    format.format(r.running_balance),
                ]
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// accumulates rows so totals carry across every phase of a ledger
pub(crate) struct LedgerBuilder {
    principal: f64,
    cumulative: f64,
    rows: Vec<LedgerRow>,
}

impl LedgerBuilder {
    pub(crate) fn new(principal: f64) -> Self {
        Self {
            principal,
            cumulative: 0.0,
            rows: Vec::new(),
        }
    }

    /// append an ordinal row such as "3rd Month"
    pub(crate) fn push(&mut self, index: u32, unit: PeriodUnit, interest: f64, highlight: bool) {
        let label = format!("{} {}", ordinal(index), unit);
        self.push_row(index, label, unit, interest, highlight);
    }

    /// append the single trailing row that covers all leftover days
    pub(crate) fn push_days(&mut self, days: f64, interest: f64) {
        let label = format!("{} {}", days, PeriodUnit::Days);
        self.push_row(days.floor() as u32, label, PeriodUnit::Days, interest, false);
    }

    fn push_row(&mut self, index: u32, label: String, unit: PeriodUnit, interest: f64, highlight: bool) {
        self.cumulative += interest;
        self.rows.push(LedgerRow {
            period_index: index,
            period_label: label,
            period_unit: unit,
            period_interest: interest,
            cumulative_interest: self.cumulative,
            running_balance: self.principal + self.cumulative,
            highlight,
        });
    }

    pub(crate) fn finish(self) -> Ledger {
        Ledger {
            principal: self.principal,
            rows: self.rows,
        }
    }
}
