//! Mixed-box filling for units that were not packed directly

use tracing::trace;

use super::item_consolidator::LeftoverChunk;
use crate::model::{BoxCapacity, ShippingBox, WEIGHT_EPSILON};

/// State of the open box's remaining room after tentatively adding a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Room {
    /// Both weight and count still have room
    Open,
    /// One ceiling reached exactly, neither exceeded
    Exhausted,
    /// The unit does not fit
    Overshoot,
}

#[derive(Debug, Default)]
struct OpenBox {
    weight: f64,
    quantity: u32,
    item_id: Option<String>,
    mixed: bool,
}

impl OpenBox {
    fn add(&mut self, unit_weight: f64, item_id: &str) {
        if self.quantity == 0 {
            self.item_id = Some(item_id.to_string());
        } else if self.item_id.as_deref() != Some(item_id) {
            self.mixed = true;
        }
        self.weight += unit_weight;
        self.quantity += 1;
    }

    fn into_box(self, capacity: &BoxCapacity) -> ShippingBox {
        ShippingBox {
            weight: capacity.settle_weight(self.weight),
            quantity: self.quantity,
            item_id: if self.mixed { None } else { self.item_id },
        }
    }
}

/// Accumulates pooled units into boxes, one unit at a time
#[derive(Debug)]
pub struct LeftoverBinFiller {
    capacity: BoxCapacity,
    room_weight: f64,
    room_quantity: u32,
    current: OpenBox,
    boxes: Vec<ShippingBox>,
}

impl LeftoverBinFiller {
    pub fn new(capacity: BoxCapacity) -> Self {
        Self {
            capacity,
            room_weight: capacity.max_weight,
            room_quantity: capacity.max_quantity,
            current: OpenBox::default(),
            boxes: Vec::new(),
        }
    }

    pub fn push_chunk(&mut self, chunk: &LeftoverChunk) {
        for _ in 0..chunk.quantity {
            self.push_unit(chunk.unit_weight, &chunk.item_id);
        }
    }

    /// Place one unit, closing the open box when it fills or cannot take the unit
    pub fn push_unit(&mut self, unit_weight: f64, item_id: &str) {
        let mut room = self.room_after(unit_weight);
        if room == Room::Overshoot {
            trace!(
                weight = self.current.weight,
                quantity = self.current.quantity,
                "unit of {} does not fit, closing box",
                unit_weight
            );
            self.close_current();
            room = self.room_after(unit_weight);
        }

        self.current.add(unit_weight, item_id);
        self.room_weight -= unit_weight;
        self.room_quantity = self.room_quantity.saturating_sub(1);

        if room != Room::Open {
            self.close_current();
        }
    }

    /// Emit the partial final box, if any, and return every box in order
    pub fn finish(mut self) -> Vec<ShippingBox> {
        self.close_current();
        self.boxes
    }

    fn room_after(&self, unit_weight: f64) -> Room {
        let room_weight = self.room_weight - unit_weight;
        let room_quantity = i64::from(self.room_quantity) - 1;
        if room_weight < -WEIGHT_EPSILON || room_quantity < 0 {
            Room::Overshoot
        } else if room_weight > WEIGHT_EPSILON && room_quantity > 0 {
            Room::Open
        } else {
            Room::Exhausted
        }
    }

    fn close_current(&mut self) {
        let open = std::mem::take(&mut self.current);
        if open.quantity > 0 {
            self.boxes.push(open.into_box(&self.capacity));
        }
        self.room_weight = self.capacity.max_weight;
        self.room_quantity = self.capacity.max_quantity;
    }
}

/// Consolidate the leftover pool into boxes
pub fn fill_leftovers(pool: &[LeftoverChunk], capacity: &BoxCapacity) -> Vec<ShippingBox> {
    let mut filler = LeftoverBinFiller::new(*capacity);
    for chunk in pool {
        filler.push_chunk(chunk);
    }
    filler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(item_id: &str, unit_weight: f64, quantity: u32) -> LeftoverChunk {
        LeftoverChunk {
            item_id: item_id.to_string(),
            unit_weight,
            quantity,
        }
    }

    fn capacity(max_weight: f64, max_quantity: u32) -> BoxCapacity {
        BoxCapacity {
            max_weight,
            max_quantity,
        }
    }

    #[test]
    fn test_exact_weight_closes_box() {
        let boxes = fill_leftovers(&[chunk("A", 50.0, 4)], &capacity(100.0, 10));
        assert_eq!(
            boxes,
            vec![
                ShippingBox::for_item(100.0, 2, "A"),
                ShippingBox::for_item(100.0, 2, "A"),
            ]
        );
    }

    #[test]
    fn test_exact_count_closes_box() {
        let boxes = fill_leftovers(&[chunk("A", 1.0, 7)], &capacity(100.0, 3));
        let quantities: Vec<u32> = boxes.iter().map(|b| b.quantity).collect();
        assert_eq!(quantities, vec![3, 3, 1]);
    }

    #[test]
    fn test_overshoot_retries_unit_in_fresh_box() {
        // 60 + 60 would exceed 100, so each 60 starts a new box; 30 joins the last
        let boxes = fill_leftovers(
            &[chunk("A", 60.0, 2), chunk("B", 30.0, 1)],
            &capacity(100.0, 10),
        );
        assert_eq!(
            boxes,
            vec![
                ShippingBox::for_item(60.0, 1, "A"),
                ShippingBox::new(90.0, 2),
            ]
        );
    }

    #[test]
    fn test_partial_final_box_is_emitted() {
        let boxes = fill_leftovers(&[chunk("A", 5.0, 3)], &capacity(150.0, 10));
        assert_eq!(boxes, vec![ShippingBox::for_item(15.0, 3, "A")]);
    }

    #[test]
    fn test_empty_pool() {
        assert!(fill_leftovers(&[], &capacity(150.0, 10)).is_empty());
    }

    #[test]
    fn test_fractional_weights_close_on_exact_fill() {
        // 0.1 summed ten times drifts below 1.0; the tolerance still closes the box
        let boxes = fill_leftovers(&[chunk("A", 0.1, 20)], &capacity(1.0, 100));
        assert_eq!(boxes.len(), 2);
        assert!(boxes.iter().all(|b| b.quantity == 10));
    }

    #[test]
    fn test_drift_over_ceiling_is_reported_at_ceiling() {
        // 0.1 + 0.2 sums to 0.30000000000000004
        let boxes = fill_leftovers(&[chunk("A", 0.1, 1), chunk("B", 0.2, 1)], &capacity(0.3, 10));
        assert_eq!(boxes, vec![ShippingBox::new(0.3, 2)]);
        assert!(boxes[0].weight <= 0.3);
    }
}
