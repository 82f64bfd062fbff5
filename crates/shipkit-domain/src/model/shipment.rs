//! Shipment description handed to the planner

use serde::{Deserialize, Serialize};
use shipkit_types::PackingError;

use super::limits::{BoxCapacity, PackingLimits};
use super::line_item::LineItem;

/// A shipment to split into boxes
///
/// Either `items` is non-empty (itemized mode) or `weight_each` and `quantity`
/// describe identical units (uniform mode). A non-empty item list wins when
/// both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_each: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(flatten)]
    pub limits: PackingLimits,
}

/// Validated view of what is being shipped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contents<'a> {
    Uniform { weight_each: f64, quantity: u32 },
    Itemized(&'a [LineItem]),
}

/// A request that passed validation, with its totals resolved
#[derive(Debug, Clone, Copy)]
pub struct ValidShipment<'a> {
    pub contents: Contents<'a>,
    pub total_quantity: u32,
    pub total_weight: f64,
    pub capacity: BoxCapacity,
    pub limits: &'a PackingLimits,
}

impl ShipmentRequest {
    pub fn uniform(weight_each: f64, quantity: u32) -> Self {
        Self {
            weight_each: Some(weight_each),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn itemized(items: Vec<LineItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, limits: PackingLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn is_itemized(&self) -> bool {
        !self.items.is_empty()
    }

    /// Reject malformed requests before any packing work starts
    pub fn validate(&self) -> Result<ValidShipment<'_>, PackingError> {
        self.limits.validate()?;
        let max_weight = self.limits.max_weight;

        if self.is_itemized() {
            let mut total_quantity: u32 = 0;
            let mut total_weight = 0.0;
            for item in &self.items {
                check_unit_weight(&item.id, item.unit_weight, max_weight)?;
                if item.quantity == 0 {
                    return Err(PackingError::Validation(format!(
                        "item '{}' has quantity 0",
                        item.id
                    )));
                }
                total_quantity = total_quantity.checked_add(item.quantity).ok_or_else(|| {
                    PackingError::Validation("total quantity exceeds u32::MAX".to_string())
                })?;
                total_weight += item.total_weight();
            }
            return Ok(ValidShipment {
                contents: Contents::Itemized(&self.items),
                total_quantity,
                total_weight,
                capacity: self.limits.capacity_for(total_quantity),
                limits: &self.limits,
            });
        }

        let (weight_each, quantity) = match (self.weight_each, self.quantity) {
            (Some(weight_each), Some(quantity)) => (weight_each, quantity),
            (None, _) => {
                return Err(PackingError::Validation(
                    "shipment has no items and weight_each is not set".to_string(),
                ))
            }
            (_, None) => {
                return Err(PackingError::Validation(
                    "shipment has no items and quantity is not set".to_string(),
                ))
            }
        };
        check_unit_weight("weight_each", weight_each, max_weight)?;
        if quantity == 0 {
            return Err(PackingError::Validation("quantity must be at least 1".to_string()));
        }
        Ok(ValidShipment {
            contents: Contents::Uniform { weight_each, quantity },
            total_quantity: quantity,
            total_weight: weight_each * f64::from(quantity),
            capacity: self.limits.capacity_for(quantity),
            limits: &self.limits,
        })
    }
}

fn check_unit_weight(label: &str, unit_weight: f64, max_weight: f64) -> Result<(), PackingError> {
    if !unit_weight.is_finite() || unit_weight <= 0.0 {
        return Err(PackingError::Validation(format!(
            "'{}' must have a positive unit weight, got {}",
            label, unit_weight
        )));
    }
    if unit_weight > max_weight {
        return Err(PackingError::Validation(format!(
            "'{}' weighs {} per unit, more than the box limit of {}",
            label, unit_weight, max_weight
        )));
    }
    Ok(())
}
