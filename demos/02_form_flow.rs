/// form flow - field edits, a rejected submit, then a report
use interest_calculator_rs::{
    CalculatorConfig, CalculatorForm, CalculatorKind, FormEvent, RateBasis,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CalculatorConfig::from_json(r#"{ "limits": { "max_rate_percent": 50.0 } }"#)?;
    let form = CalculatorForm::new(CalculatorKind::SimpleInterest, config)
        .apply(FormEvent::PrincipalChanged("25000".to_string()))
        .apply(FormEvent::RateChanged("75".to_string()))
        .submit();

    if let Some(message) = form.error() {
        println!("rejected: {}", message);
    }

    let form = form
        .apply(FormEvent::RateChanged("1.5".to_string()))
        .apply(FormEvent::RateBasisChanged(RateBasis::Monthly))
        .apply(FormEvent::YearsChanged(1.0))
        .apply(FormEvent::DaysChanged(15.0))
        .submit();

    let report = form.report()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
