pub mod basic;
pub mod compound;
pub mod simple;

use crate::ledger::{Ledger, LedgerOptions};
use crate::types::{CalculationInput, CalculatorKind};

pub use basic::{
    basic_compound_interest, basic_compound_records, basic_simple_interest, basic_simple_records,
    BasicInput, BasicRecord,
};
pub use compound::{
    build_compound_interest_ledger, compute_compound_interest, future_value,
    CompoundInterestEngine, CompoundingFrequency,
};
pub use simple::{build_simple_interest_ledger, compute_simple_interest, SimpleInterestEngine};

/// trait shared by the simple and compound engines
pub trait InterestEngine {
    /// which calculator this engine backs
    fn kind(&self) -> CalculatorKind;

    /// single-figure interest for the whole input
    fn interest(&self, input: &CalculationInput) -> f64;

    /// period-by-period ledger for the input
    fn ledger(&self, input: &CalculationInput) -> Ledger;
}

/// engine backing a calculator kind
pub fn engine_for(kind: CalculatorKind, options: LedgerOptions) -> Box<dyn InterestEngine> {
    match kind {
        CalculatorKind::SimpleInterest => Box::new(SimpleInterestEngine::new(options)),
        CalculatorKind::CompoundInterest => Box::new(CompoundInterestEngine),
    }
}
