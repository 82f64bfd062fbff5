//! Direct packing of like items for low-variety shipments
//!
//! Mirrors how people pack: fill a box with one product whenever a useful
//! amount of it fits, and set small odd lots aside for mixed boxes.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{BoxCapacity, LineItem, PackingLimits, ShippingBox};

/// Units set aside for the leftover bin filler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftoverChunk {
    pub item_id: String,
    pub unit_weight: f64,
    pub quantity: u32,
}

impl From<&LineItem> for LeftoverChunk {
    fn from(item: &LineItem) -> Self {
        Self {
            item_id: item.id.clone(),
            unit_weight: item.unit_weight,
            quantity: item.quantity,
        }
    }
}

/// Boxes closed directly plus the chunks deferred to the leftover pool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consolidation {
    pub boxes: Vec<ShippingBox>,
    pub leftovers: Vec<LeftoverChunk>,
}

/// Ratio of line items to units; low values mean lots of repetition
pub fn variation(item_count: usize, total_quantity: u32) -> f64 {
    if total_quantity == 0 {
        return f64::INFINITY;
    }
    item_count as f64 / f64::from(total_quantity)
}

/// Pack each item into single-item boxes, deferring chunks too small to stand alone
///
/// Items are processed in the given order and never mutated; remaining stock is
/// tracked locally.
pub fn consolidate(items: &[LineItem], capacity: &BoxCapacity, limits: &PackingLimits) -> Consolidation {
    let mut result = Consolidation::default();

    for item in items {
        let fits_by_weight = capacity.units_by_weight(item.unit_weight);
        let mut remaining = item.quantity;

        while remaining > 0 {
            let take = fits_by_weight.min(capacity.max_quantity).min(remaining).max(1);
            let chunk_weight = capacity.settle_weight(f64::from(take) * item.unit_weight);
            remaining -= take;

            let weight_fill = chunk_weight / capacity.max_weight;
            let quantity_fill = f64::from(take) / f64::from(capacity.max_quantity);
            if weight_fill <= limits.weight_threshold && quantity_fill <= limits.quantity_threshold {
                trace!(item = %item.id, take, weight_fill, quantity_fill, "deferring chunk");
                result.leftovers.push(LeftoverChunk {
                    item_id: item.id.clone(),
                    unit_weight: item.unit_weight,
                    quantity: take,
                });
            } else {
                result
                    .boxes
                    .push(ShippingBox::for_item(chunk_weight, take, item.id.clone()));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(max_weight: f64, max_quantity: u32) -> BoxCapacity {
        BoxCapacity {
            max_weight,
            max_quantity,
        }
    }

    #[test]
    fn test_variation() {
        assert!((variation(1, 100) - 0.01).abs() < 1e-12);
        assert!((variation(50, 60) - 50.0 / 60.0).abs() < 1e-12);
        assert!(variation(3, 0).is_infinite());
    }

    #[test]
    fn test_full_chunks_become_boxes() {
        let items = vec![LineItem::new("A", 10.0, 40), LineItem::new("B", 3.0, 60)];
        let result = consolidate(&items, &capacity(150.0, 100), &PackingLimits::default());

        // A: 15 + 15 closed, last 10 (100 lb, 67% full by weight) also closes
        // B: 50 fit by weight, then 10 left (30 lb, 10 units) deferred
        assert_eq!(
            result.boxes,
            vec![
                ShippingBox::for_item(150.0, 15, "A"),
                ShippingBox::for_item(150.0, 15, "A"),
                ShippingBox::for_item(100.0, 10, "A"),
                ShippingBox::for_item(150.0, 50, "B"),
            ]
        );
        assert_eq!(
            result.leftovers,
            vec![LeftoverChunk {
                item_id: "B".to_string(),
                unit_weight: 3.0,
                quantity: 10,
            }]
        );
    }

    #[test]
    fn test_count_ceiling_bounds_chunk() {
        let items = vec![LineItem::new("A", 1.0, 25)];
        let result = consolidate(&items, &capacity(150.0, 10), &PackingLimits::default());
        assert_eq!(result.boxes.len(), 2);
        assert!(result.boxes.iter().all(|b| b.quantity == 10));
        // 5 of 10 units is exactly at the 0.5 quantity threshold
        assert_eq!(result.leftovers.len(), 1);
        assert_eq!(result.leftovers[0].quantity, 5);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![LineItem::new("A", 10.0, 40)];
        let before = items.clone();
        let _ = consolidate(&items, &capacity(150.0, 100), &PackingLimits::default());
        assert_eq!(items, before);
    }
}
