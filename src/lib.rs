pub mod config;
pub mod errors;
pub mod format;
pub mod interest;
pub mod ledger;
pub mod state;
pub mod types;
pub mod validation;

// re-export key types
pub use config::{CalculatorConfig, FormDefaults, TenorBounds};
pub use errors::{CalculatorError, Result};
pub use format::{format_currency, ordinal, ordinal_suffix, parse_currency, CurrencyFormat};
pub use interest::{
    build_compound_interest_ledger, build_simple_interest_ledger, compute_compound_interest,
    compute_simple_interest, engine_for, future_value, BasicInput, BasicRecord,
    CompoundInterestEngine, CompoundingFrequency, InterestEngine, SimpleInterestEngine,
};
pub use ledger::{ChartSeries, Ledger, LedgerOptions, LedgerRow, LedgerSummary};
pub use state::{CalculationReport, CalculatorForm, FormEvent};
pub use types::{CalculationInput, CalculatorKind, PeriodUnit, RateBasis, Tenor, TimeUnit};
pub use validation::{validate_basic, validate_input, ValidationLimits};
