//! Per-box capacity limits and fill thresholds

use serde::{Deserialize, Serialize};
use shipkit_types::PackingError;

/// Tolerance for weight comparisons against a box ceiling
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Carrier ceiling for a single package (FedEx and UPS commercial max)
pub const DEFAULT_MAX_WEIGHT: f64 = 150.0;
pub const DEFAULT_VARIATION_THRESHOLD: f64 = 0.10;
pub const DEFAULT_WEIGHT_THRESHOLD: f64 = 0.50;
pub const DEFAULT_QUANTITY_THRESHOLD: f64 = 0.50;

/// Capacity and fill thresholds for a packing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingLimits {
    /// Heaviest box allowed
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,

    /// Most units per box. `None` means the whole shipment fits by count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,

    /// Item variety (line items / units) below which like items are packed directly
    #[serde(default = "default_variation_threshold")]
    pub variation_threshold: f64,

    /// Fill ratio by weight a chunk must exceed to close as its own box
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: f64,

    /// Fill ratio by count a chunk must exceed to close as its own box
    #[serde(default = "default_quantity_threshold")]
    pub quantity_threshold: f64,
}

fn default_max_weight() -> f64 {
    DEFAULT_MAX_WEIGHT
}

fn default_variation_threshold() -> f64 {
    DEFAULT_VARIATION_THRESHOLD
}

fn default_weight_threshold() -> f64 {
    DEFAULT_WEIGHT_THRESHOLD
}

fn default_quantity_threshold() -> f64 {
    DEFAULT_QUANTITY_THRESHOLD
}

impl Default for PackingLimits {
    fn default() -> Self {
        Self {
            max_weight: default_max_weight(),
            max_quantity: None,
            variation_threshold: default_variation_threshold(),
            weight_threshold: default_weight_threshold(),
            quantity_threshold: default_quantity_threshold(),
        }
    }
}

impl PackingLimits {
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = Some(max_quantity);
        self
    }

    pub fn with_thresholds(mut self, variation: f64, weight: f64, quantity: f64) -> Self {
        self.variation_threshold = variation;
        self.weight_threshold = weight;
        self.quantity_threshold = quantity;
        self
    }

    /// Check ranges independent of the shipment contents
    pub fn validate(&self) -> Result<(), PackingError> {
        if !self.max_weight.is_finite() || self.max_weight <= 0.0 {
            return Err(PackingError::Validation(format!(
                "max_weight must be a positive number, got {}",
                self.max_weight
            )));
        }
        if self.max_quantity == Some(0) {
            return Err(PackingError::Configuration(
                "max_quantity must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("variation_threshold", self.variation_threshold),
            ("weight_threshold", self.weight_threshold),
            ("quantity_threshold", self.quantity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PackingError::Configuration(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Resolve the per-box ceilings for a shipment of `total_quantity` units
    pub fn capacity_for(&self, total_quantity: u32) -> BoxCapacity {
        BoxCapacity {
            max_weight: self.max_weight,
            max_quantity: self.max_quantity.unwrap_or(total_quantity).max(1),
        }
    }
}

/// Concrete ceilings a single box must respect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCapacity {
    pub max_weight: f64,
    pub max_quantity: u32,
}

impl BoxCapacity {
    /// How many units of `unit_weight` fit under the weight ceiling
    pub fn units_by_weight(&self, unit_weight: f64) -> u32 {
        let raw = (self.max_weight / unit_weight + WEIGHT_EPSILON).floor();
        let mut units = raw.min(f64::from(u32::MAX)) as u32;
        while units > 0 && f64::from(units) * unit_weight > self.max_weight + WEIGHT_EPSILON {
            units -= 1;
        }
        units
    }

    /// Theoretical lower bound on box count for the given totals
    pub fn min_boxes(&self, total_weight: f64, total_quantity: u32) -> u32 {
        let by_weight = (total_weight / self.max_weight - WEIGHT_EPSILON).ceil().max(0.0);
        let by_quantity = total_quantity.div_ceil(self.max_quantity);
        (by_weight.min(f64::from(u32::MAX)) as u32)
            .max(by_quantity)
            .max(1)
    }

    /// Box weight to report for a filled box
    ///
    /// Fills are accepted up to `WEIGHT_EPSILON` over the ceiling to absorb
    /// summation drift; the reported weight never exceeds `max_weight`.
    pub fn settle_weight(&self, weight: f64) -> f64 {
        weight.min(self.max_weight)
    }
}
