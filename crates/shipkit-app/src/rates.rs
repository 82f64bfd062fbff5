//! Weight-bracket rate table
//!
//! A local stand-in for a carrier rate call: each bracket prices every package
//! up to its weight ceiling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shipkit_domain::{RateLookup, WEIGHT_EPSILON};
use shipkit_types::{Money, RateError};

/// Price for packages up to `max_weight`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBracket {
    pub max_weight: f64,
    pub price: Decimal,
}

/// Rate table as stored in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTableConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub brackets: Vec<RateBracket>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for RateTableConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            brackets: Vec::new(),
        }
    }
}

/// Validated, sorted rate table
#[derive(Debug, Clone)]
pub struct RateTable {
    currency: String,
    brackets: Vec<RateBracket>,
}

impl RateTable {
    pub fn new(config: &RateTableConfig) -> Result<Self, RateError> {
        if config.brackets.is_empty() {
            return Err(RateError::InvalidTable(
                "no weight brackets configured".to_string(),
            ));
        }
        if config.currency.trim().is_empty() {
            return Err(RateError::InvalidTable("currency is empty".to_string()));
        }

        let mut brackets = config.brackets.clone();
        for bracket in &brackets {
            if !bracket.max_weight.is_finite() || bracket.max_weight <= 0.0 {
                return Err(RateError::InvalidTable(format!(
                    "bracket ceiling must be positive, got {}",
                    bracket.max_weight
                )));
            }
            if bracket.price.is_sign_negative() {
                return Err(RateError::InvalidTable(format!(
                    "bracket up to {} has a negative price",
                    bracket.max_weight
                )));
            }
        }
        brackets.sort_by(|a, b| a.max_weight.total_cmp(&b.max_weight));
        if let Some(pair) = brackets.windows(2).find(|w| w[0].max_weight == w[1].max_weight) {
            return Err(RateError::InvalidTable(format!(
                "duplicate bracket ceiling {}",
                pair[0].max_weight
            )));
        }

        Ok(Self {
            currency: config.currency.clone(),
            brackets,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Heaviest package the table can price
    pub fn max_weight(&self) -> f64 {
        self.brackets.last().map(|b| b.max_weight).unwrap_or(0.0)
    }
}

impl RateLookup for RateTable {
    fn price_for(&self, weight: f64) -> Result<Money, RateError> {
        self.brackets
            .iter()
            .find(|bracket| weight <= bracket.max_weight + WEIGHT_EPSILON)
            .map(|bracket| Money::new(bracket.price, self.currency.clone()))
            .ok_or(RateError::NoRate { weight })
    }
}
