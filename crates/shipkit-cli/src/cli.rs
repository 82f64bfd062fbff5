//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use shipkit_app::input::LimitOverrides;
use shipkit_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipkit")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Split shipments into boxes and quote them by weight")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Where the shipment comes from, plus per-run limit overrides
#[derive(Args, Debug, Clone)]
pub struct ShipmentArgs {
    /// Shipment file (.json, .toml, or .csv item list)
    pub file: Option<PathBuf>,

    /// CSV item list (id,unit_weight,quantity)
    #[arg(long, conflicts_with = "file")]
    pub items: Option<PathBuf>,

    /// Weight of each unit for a uniform shipment
    #[arg(long, requires = "quantity", conflicts_with_all = ["file", "items"])]
    pub weight_each: Option<f64>,

    /// Number of units for a uniform shipment
    #[arg(long, requires = "weight_each")]
    pub quantity: Option<u32>,

    /// Heaviest box allowed
    #[arg(long)]
    pub max_weight: Option<f64>,

    /// Most units per box
    #[arg(long)]
    pub max_quantity: Option<u32>,

    /// Item variety below which like items are packed together (0.0-1.0)
    #[arg(long)]
    pub variation_threshold: Option<f64>,

    /// Weight fill ratio a chunk must exceed to close as its own box (0.0-1.0)
    #[arg(long)]
    pub weight_threshold: Option<f64>,

    /// Count fill ratio a chunk must exceed to close as its own box (0.0-1.0)
    #[arg(long)]
    pub quantity_threshold: Option<f64>,
}

impl ShipmentArgs {
    pub fn overrides(&self) -> LimitOverrides {
        LimitOverrides {
            max_weight: self.max_weight,
            max_quantity: self.max_quantity,
            variation_threshold: self.variation_threshold,
            weight_threshold: self.weight_threshold,
            quantity_threshold: self.quantity_threshold,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a shipment into boxes
    Plan {
        #[command(flatten)]
        shipment: ShipmentArgs,
    },

    /// Split a shipment into boxes and price each box
    Quote {
        #[command(flatten)]
        shipment: ShipmentArgs,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default max weight per box
        #[arg(long)]
        set_max_weight: Option<f64>,

        /// Set default max quantity per box (0 clears the limit)
        #[arg(long)]
        set_max_quantity: Option<u32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the rate table currency
        #[arg(long)]
        set_currency: Option<String>,

        /// Add or replace a rate bracket: packages up to WEIGHT cost PRICE
        #[arg(long, num_args = 2, value_names = ["WEIGHT", "PRICE"])]
        add_rate: Option<Vec<String>>,

        /// Remove all rate brackets
        #[arg(long)]
        clear_rates: bool,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Parse the two values passed to `--add-rate`
pub fn parse_rate_bracket(values: &[String]) -> Result<(f64, Decimal), String> {
    let [weight, price] = values else {
        return Err("--add-rate takes WEIGHT and PRICE".to_string());
    };
    let weight: f64 = weight
        .parse()
        .map_err(|_| format!("invalid weight '{}'", weight))?;
    let price: Decimal = price
        .parse()
        .map_err(|_| format!("invalid price '{}'", price))?;
    Ok((weight, price))
}
