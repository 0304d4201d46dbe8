/// quick start - simple and compound interest on the same deposit
use interest_calculator_rs::{
    compute_compound_interest, compute_simple_interest, format_currency, future_value,
    CompoundingFrequency, RateBasis, Tenor,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let principal = 1_000.0;
    let tenor = Tenor::years(20.0);

    let simple = compute_simple_interest(principal, 10.0, &tenor, RateBasis::Annual);
    println!("simple interest:   {}", format_currency(simple));
    println!("final amount:      {}", format_currency(principal + simple));

    for frequency in CompoundingFrequency::ALL {
        let interest = compute_compound_interest(principal, 10.0, &tenor, RateBasis::Annual, frequency);
        let amount = future_value(principal, 10.0, 20.0, frequency);
        println!(
            "{:<22} {:>16} {:>16}",
            frequency.to_string(),
            format_currency(interest),
            format_currency(amount)
        );
    }

    Ok(())
}
