//! Packing for shipments of identical units

use tracing::trace;

use crate::model::{BoxCapacity, ShippingBox};

/// Which ceiling decides how many units go into a full box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitingDimension {
    Weight,
    Count,
}

impl LimitingDimension {
    pub fn for_totals(total_weight: f64, total_quantity: u32, capacity: &BoxCapacity) -> Self {
        let by_weight = total_weight / capacity.max_weight;
        let by_count = f64::from(total_quantity) / f64::from(capacity.max_quantity);
        if by_weight > by_count {
            LimitingDimension::Weight
        } else {
            LimitingDimension::Count
        }
    }
}

/// Split `total_quantity` units of `weight_each` into full boxes and one remainder box
///
/// Callers must have checked that a single unit fits under `capacity.max_weight`.
pub fn pack_uniform(weight_each: f64, total_quantity: u32, capacity: &BoxCapacity) -> Vec<ShippingBox> {
    let total_weight = weight_each * f64::from(total_quantity);
    let dimension = LimitingDimension::for_totals(total_weight, total_quantity, capacity);
    let box_quantity = match dimension {
        LimitingDimension::Weight => capacity.units_by_weight(weight_each),
        // ratios can tie within rounding, so still respect the weight ceiling
        LimitingDimension::Count => capacity
            .max_quantity
            .min(capacity.units_by_weight(weight_each)),
    }
    .max(1);

    let box_count = total_quantity.div_ceil(box_quantity).max(1);
    let full_boxes = box_count - 1;
    trace!(
        ?dimension,
        box_quantity,
        box_count,
        "packing {} units of {}",
        total_quantity,
        weight_each
    );

    let mut boxes = Vec::with_capacity(box_count as usize);
    let full_weight = capacity.settle_weight(f64::from(box_quantity) * weight_each);
    for _ in 0..full_boxes {
        boxes.push(ShippingBox::new(full_weight, box_quantity));
    }

    let excess_quantity = total_quantity - box_quantity * full_boxes;
    if excess_quantity > 0 || full_boxes == 0 {
        boxes.push(ShippingBox::new(
            capacity.settle_weight(f64::from(excess_quantity) * weight_each),
            excess_quantity,
        ));
    }
    boxes
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
    fn test_weight_limited_with_remainder() {
        // 35 x 10 = 350 over a 150 ceiling: 15 + 15 + 5
        let boxes = pack_uniform(10.0, 35, &capacity(150.0, 1000));
        assert_eq!(
            boxes,
            vec![
                ShippingBox::new(150.0, 15),
                ShippingBox::new(150.0, 15),
                ShippingBox::new(50.0, 5),
            ]
        );
    }

    #[test]
    fn test_count_limited() {
        let boxes = pack_uniform(1.0, 25, &capacity(150.0, 10));
        let quantities: Vec<u32> = boxes.iter().map(|b| b.quantity).collect();
        assert_eq!(quantities, vec![10, 10, 5]);
        assert!((boxes[2].weight - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_box_shipment() {
        let boxes = pack_uniform(2.0, 7, &capacity(150.0, 7));
        assert_eq!(boxes, vec![ShippingBox::new(14.0, 7)]);
    }

    #[test]
    fn test_even_split_keeps_last_full_box() {
        // 30 x 10 = 300: two full boxes, nothing dropped
        let boxes = pack_uniform(10.0, 30, &capacity(150.0, 30));
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes.iter().map(|b| b.quantity).sum::<u32>(), 30);
        assert_eq!(boxes[1], ShippingBox::new(150.0, 15));
    }

    #[test]
    fn test_weight_not_dividing_ceiling_never_overshoots() {
        // 40 does not divide 150; three per box
        let boxes = pack_uniform(40.0, 7, &capacity(150.0, 7));
        assert_eq!(boxes.iter().map(|b| b.quantity).collect::<Vec<_>>(), vec![3, 3, 1]);
        assert!(boxes.iter().all(|b| b.weight <= 150.0));
    }

    #[test]
    fn test_limiting_dimension() {
        let cap = capacity(150.0, 10);
        assert_eq!(LimitingDimension::for_totals(350.0, 35, &cap), LimitingDimension::Count);
        assert_eq!(LimitingDimension::for_totals(900.0, 9, &cap), LimitingDimension::Weight);
    }
}
