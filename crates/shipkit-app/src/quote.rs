//! Multi-package pricing
//!
//! Plans the shipment, then prices each box through a [`RateLookup`] in
//! packing order and totals the result.

use serde::{Deserialize, Serialize};
use shipkit_domain::{plan, PackingResult, PackingStrategy, RateLookup, ShipmentRequest};
use shipkit_types::{Error, Money, Result};
use tracing::{debug, info};

/// Price of one box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageQuote {
    pub weight: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub price: Money,
}

/// Priced packing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentQuote {
    pub strategy: PackingStrategy,
    pub min_boxes: u32,
    pub num_packages: usize,
    pub packages: Vec<PackageQuote>,
    pub total: Money,
}

/// Price every box of an existing plan, one lookup per box
pub fn quote_plan(result: &PackingResult, rates: &dyn RateLookup) -> Result<ShipmentQuote> {
    let mut packages = Vec::with_capacity(result.len());
    let mut total: Option<Money> = None;

    for shipping_box in result {
        let price = rates.price_for(shipping_box.weight)?;
        debug!(weight = shipping_box.weight, price = %price, "priced package");
        total = Some(match total {
            Some(running) => running.checked_add(&price)?,
            None => price.clone(),
        });
        packages.push(PackageQuote {
            weight: shipping_box.weight,
            quantity: shipping_box.quantity,
            item_id: shipping_box.item_id.clone(),
            price,
        });
    }

    let total = total.ok_or_else(|| Error::InvalidInput("packing plan has no boxes".to_string()))?;
    info!(packages = packages.len(), total = %total, "quoted shipment");
    Ok(ShipmentQuote {
        strategy: result.strategy,
        min_boxes: result.min_boxes,
        num_packages: packages.len(),
        packages,
        total,
    })
}

/// Plan a shipment and price the resulting boxes
pub fn quote_shipment(request: &ShipmentRequest, rates: &dyn RateLookup) -> Result<ShipmentQuote> {
    let result = plan(request)?;
    quote_plan(&result, rates)
}
