//! Output formatting module

use shipkit_app::quote::ShipmentQuote;
use shipkit_app::report::{render_plan, render_quote};
use shipkit_domain::PackingResult;
use shipkit_types::{OutputFormat, Result};

pub fn output_plan(output_format: OutputFormat, result: &PackingResult) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Table => print!("{}", render_plan(result)),
    }
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &ShipmentQuote) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(quote)?),
        OutputFormat::Table => print!("{}", render_quote(quote)),
    }
    Ok(())
}
