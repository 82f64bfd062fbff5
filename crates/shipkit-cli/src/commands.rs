//! Command handlers

use crate::cli::{parse_rate_bracket, Cli, Commands, ShipmentArgs};
use crate::output::{output_plan, output_quote};
use shipkit_app::config::Config;
use shipkit_app::input::{load_items_csv, load_shipment};
use shipkit_app::quote::quote_plan;
use shipkit_app::rates::{RateBracket, RateTable};
use shipkit_domain::{PackingPlanner, ShipmentRequest};
use shipkit_types::{Error, Result};
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // A reset must not depend on the stored file being readable
    let config = match cli.command {
        Commands::Config { reset: true, .. } => Config::default(),
        _ => Config::load()?,
    };
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Plan { shipment } => {
            let request = build_request(&shipment, &config)?;
            let result = PackingPlanner::new().plan(&request)?;
            output_plan(output_format, &result)
        }

        Commands::Quote { shipment } => {
            let request = build_request(&shipment, &config)?;
            let rates = RateTable::new(&config.rate_table)?;
            let result = PackingPlanner::new().plan(&request)?;
            let quote = quote_plan(&result, &rates)?;
            output_quote(output_format, &quote)
        }

        Commands::Config {
            show,
            set_max_weight,
            set_max_quantity,
            set_output,
            set_currency,
            add_rate,
            clear_rates,
            reset,
        } => {
            if reset {
                info!("resetting configuration to defaults");
            }
            let mut config = config;
            let mut modified = reset;

            if let Some(max_weight) = set_max_weight {
                config.limits.max_weight = max_weight;
                modified = true;
            }
            if let Some(max_quantity) = set_max_quantity {
                config.limits.max_quantity = (max_quantity > 0).then_some(max_quantity);
                modified = true;
            }
            if let Some(format) = set_output {
                config.output_format = format;
                modified = true;
            }
            if let Some(currency) = set_currency {
                config.rate_table.currency = currency;
                modified = true;
            }
            if clear_rates {
                config.rate_table.brackets.clear();
                modified = true;
            }
            if let Some(values) = add_rate {
                let (max_weight, price) = parse_rate_bracket(&values).map_err(Error::InvalidInput)?;
                config
                    .rate_table
                    .brackets
                    .retain(|b| b.max_weight != max_weight);
                config.rate_table.brackets.push(RateBracket { max_weight, price });
                config
                    .rate_table
                    .brackets
                    .sort_by(|a, b| a.max_weight.total_cmp(&b.max_weight));
                modified = true;
            }

            if modified {
                config.limits.validate()?;
                if !config.rate_table.brackets.is_empty() {
                    RateTable::new(&config.rate_table)?;
                }
                config.save()?;
                println!("Configuration saved.");
            }

            if show || !modified {
                println!("{}", config);
            }

            Ok(())
        }
    }
}

/// Assemble a request: config defaults, then the shipment file, then CLI flags
fn build_request(args: &ShipmentArgs, config: &Config) -> Result<ShipmentRequest> {
    let mut request = if let Some(ref path) = args.file {
        load_shipment(path, &config.limits)?
    } else if let Some(ref path) = args.items {
        ShipmentRequest::itemized(load_items_csv(path)?).with_limits(config.limits.clone())
    } else if let (Some(weight_each), Some(quantity)) = (args.weight_each, args.quantity) {
        ShipmentRequest::uniform(weight_each, quantity).with_limits(config.limits.clone())
    } else {
        return Err(Error::InvalidInput(
            "provide a shipment file, --items, or --weight-each with --quantity".to_string(),
        ));
    };

    args.overrides().apply(&mut request.limits);
    Ok(request)
}
