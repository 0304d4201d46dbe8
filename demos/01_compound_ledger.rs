/// compound ledger - years phase followed by a quarterly months phase
use interest_calculator_rs::{
    build_compound_interest_ledger, CalculationInput, CompoundingFrequency, CurrencyFormat, Tenor,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = CalculationInput::new(50_000.0, 8.5, Tenor::new(3.0, 7.0, 0.0))
        .compounded(CompoundingFrequency::Quarterly);
    let ledger = build_compound_interest_ledger(&input);

    let format = CurrencyFormat::default();
    println!("{:<12} {:>14} {:>16} {:>16}", "Time", "Interest", "Total Interest", "Balance");
    for [label, interest, total, balance] in ledger.formatted_rows(&format) {
        println!("{:<12} {:>14} {:>16} {:>16}", label, interest, total, balance);
    }

    let summary = ledger.summary();
    println!();
    println!("amount invested: {}", format.format(summary.principal));
    println!("interest gain:   {}", format.format(summary.total_interest));
    println!("final amount:    {}", format.format(summary.final_amount));

    println!("{}", serde_json::to_string_pretty(&ledger.chart_series())?);

    Ok(())
}
