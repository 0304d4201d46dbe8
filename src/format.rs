use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};

/// display format for currency amounts, e.g. `₹1,234.50`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_places: u32,
    pub grouping: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            decimal_places: 2,
            grouping: true,
        }
    }
}

impl CurrencyFormat {
    /// same symbol and grouping, no decimals (used for the principal field)
    pub fn whole(&self) -> Self {
        Self {
            decimal_places: 0,
            ..self.clone()
        }
    }

    /// render a raw amount; non-finite amounts render as zero
    pub fn format(&self, amount: f64) -> String {
        let mut value = Decimal::from_f64(amount)
            .unwrap_or(Decimal::ZERO)
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(self.decimal_places);

        let negative = value.is_sign_negative() && !value.is_zero();
        let text = value.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.grouping {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// parse a formatted amount back into a raw number
    pub fn parse(&self, text: &str) -> Result<f64> {
        let cleaned: String = text
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        let parsed = if cleaned.is_empty() {
            None
        } else {
            Decimal::from_str(&cleaned).ok().and_then(|d| d.to_f64())
        };

        parsed.ok_or_else(|| {
            tracing::warn!(input = text, "unparseable currency amount");
            CalculatorError::InvalidAmount {
                input: text.to_string(),
            }
        })
    }
}

/// format with the default two-decimal rupee format
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}

/// parse text produced by [`format_currency`] (or typed by a user)
pub fn parse_currency(text: &str) -> Result<f64> {
    CurrencyFormat::default().parse(text)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// round half away from zero to `dp` places; non-finite values become zero
pub fn round_to(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

/// english ordinal suffix: st, nd, rd or th
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    }
}

pub fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}
