//! Planner output

use serde::{Deserialize, Serialize};

/// One closed box in a packing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingBox {
    pub weight: f64,
    pub quantity: u32,
    /// Set when every unit in the box comes from the same line item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl ShippingBox {
    pub fn new(weight: f64, quantity: u32) -> Self {
        Self {
            weight,
            quantity,
            item_id: None,
        }
    }

    pub fn for_item(weight: f64, quantity: u32, item_id: impl Into<String>) -> Self {
        Self {
            weight,
            quantity,
            item_id: Some(item_id.into()),
        }
    }
}

/// Which packing path produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// Identical units split into even boxes plus a remainder
    Uniform,
    /// Like items packed directly, small chunks pooled
    Consolidated,
    /// Every unit poured through the leftover pool
    Pooled,
}

impl std::fmt::Display for PackingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackingStrategy::Uniform => write!(f, "uniform"),
            PackingStrategy::Consolidated => write!(f, "consolidated"),
            PackingStrategy::Pooled => write!(f, "pooled"),
        }
    }
}

/// Ordered boxes for one shipment, in packing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    pub strategy: PackingStrategy,
    /// Lower bound on box count from total weight and quantity
    pub min_boxes: u32,
    pub boxes: Vec<ShippingBox>,
}

impl PackingResult {
    pub fn new(strategy: PackingStrategy, min_boxes: u32, boxes: Vec<ShippingBox>) -> Self {
        Self {
            strategy,
            min_boxes,
            boxes,
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShippingBox> {
        self.boxes.iter()
    }

    pub fn total_weight(&self) -> f64 {
        self.boxes.iter().map(|b| b.weight).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.boxes.iter().map(|b| u64::from(b.quantity)).sum()
    }

    /// How many boxes the plan uses beyond the theoretical minimum
    pub fn box_count_over_theoretical_minimum(&self) -> usize {
        self.boxes.len().saturating_sub(self.min_boxes as usize)
    }
}

impl<'a> IntoIterator for &'a PackingResult {
    type Item = &'a ShippingBox;
    type IntoIter = std::slice::Iter<'a, ShippingBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
