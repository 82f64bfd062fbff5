//! Packing planner facade
//!
//! Chooses between uniform packing and the itemized path (direct packing of
//! like items followed by mixed leftover boxes).
//!
//! The itemized path may use more boxes than [`PackingResult::min_boxes`]:
//! keeping like items together is preferred over the smallest box count.

use tracing::{debug, instrument};

use shipkit_types::PackingError;

use super::item_consolidator::{consolidate, variation, LeftoverChunk};
use super::leftover_filler::fill_leftovers;
use super::uniform_packer::pack_uniform;
use crate::model::{Contents, LineItem, PackingResult, PackingStrategy, ShipmentRequest};

/// Stateless entry point for packing shipments
#[derive(Debug, Clone, Copy, Default)]
pub struct PackingPlanner;

impl PackingPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Split a shipment into an ordered list of boxes
    #[instrument(skip_all, fields(itemized = request.is_itemized()))]
    pub fn plan(&self, request: &ShipmentRequest) -> Result<PackingResult, PackingError> {
        let shipment = request.validate()?;
        let capacity = shipment.capacity;
        let min_boxes = capacity.min_boxes(shipment.total_weight, shipment.total_quantity);
        debug!(
            total_quantity = shipment.total_quantity,
            total_weight = shipment.total_weight,
            max_weight = capacity.max_weight,
            max_quantity = capacity.max_quantity,
            min_boxes,
            "planning shipment"
        );

        let (strategy, boxes) = match shipment.contents {
            Contents::Uniform { weight_each, quantity } => (
                PackingStrategy::Uniform,
                pack_uniform(weight_each, quantity, &capacity),
            ),
            Contents::Itemized(items) => {
                if let Some(weight_each) = shared_unit_weight(items) {
                    debug!(weight_each, "all items share one weight, packing uniformly");
                    (
                        PackingStrategy::Uniform,
                        pack_uniform(weight_each, shipment.total_quantity, &capacity),
                    )
                } else {
                    let variety = variation(items.len(), shipment.total_quantity);
                    if variety < shipment.limits.variation_threshold {
                        debug!(variety, "low variation, packing like items together");
                        let consolidation = consolidate(items, &capacity, shipment.limits);
                        let mut boxes = consolidation.boxes;
                        boxes.extend(fill_leftovers(&consolidation.leftovers, &capacity));
                        (PackingStrategy::Consolidated, boxes)
                    } else {
                        debug!(variety, "high variation, pooling every unit");
                        let pool: Vec<LeftoverChunk> = items.iter().map(LeftoverChunk::from).collect();
                        (PackingStrategy::Pooled, fill_leftovers(&pool, &capacity))
                    }
                }
            }
        };

        let result = PackingResult::new(strategy, min_boxes, boxes);
        debug!(
            %strategy,
            boxes = result.len(),
            over_minimum = result.box_count_over_theoretical_minimum(),
            "packing complete"
        );
        Ok(result)
    }
}

/// Plan a shipment with the default planner
pub fn plan(request: &ShipmentRequest) -> Result<PackingResult, PackingError> {
    PackingPlanner::new().plan(request)
}

fn shared_unit_weight(items: &[LineItem]) -> Option<f64> {
    let first = items.first()?.unit_weight;
    items
        .iter()
        .all(|item| item.unit_weight == first)
        .then_some(first)
}
