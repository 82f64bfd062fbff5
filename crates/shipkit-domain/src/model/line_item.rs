use serde::{Deserialize, Serialize};

/// One product line of an itemized shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// SKU or other caller-side identifier
    pub id: String,
    /// Weight of a single unit
    pub unit_weight: f64,
    /// Number of units
    pub quantity: u32,
}

impl LineItem {
    pub fn new(id: impl Into<String>, unit_weight: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            unit_weight,
            quantity,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.unit_weight * f64::from(self.quantity)
    }
}
