//! Shipment loaders
//!
//! Accepted inputs:
//! - JSON or TOML shipment documents (uniform fields or an `items` array,
//!   plus optional limit overrides)
//! - CSV item lists with an `id,unit_weight,quantity` header

use serde::{Deserialize, Serialize};
use shipkit_domain::{LineItem, PackingLimits, ShipmentRequest};
use shipkit_types::{Error, Result};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Optional per-shipment replacements for configured limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_threshold: Option<f64>,
}

impl LimitOverrides {
    /// Later layers win: values set here replace those in `limits`
    pub fn apply(&self, limits: &mut PackingLimits) {
        if let Some(max_weight) = self.max_weight {
            limits.max_weight = max_weight;
        }
        if let Some(max_quantity) = self.max_quantity {
            limits.max_quantity = Some(max_quantity);
        }
        if let Some(value) = self.variation_threshold {
            limits.variation_threshold = value;
        }
        if let Some(value) = self.weight_threshold {
            limits.weight_threshold = value;
        }
        if let Some(value) = self.quantity_threshold {
            limits.quantity_threshold = value;
        }
    }
}

/// Shipment file contents before config defaults are applied
///
/// Keys that match neither a shipment field nor a limit override land in
/// `unrecognized` so a misspelled limit is reported instead of silently
/// falling back to the configured default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShipmentDocument {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub weight_each: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(flatten)]
    pub overrides: LimitOverrides,
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl ShipmentDocument {
    pub fn into_request(self, defaults: &PackingLimits) -> ShipmentRequest {
        for key in self.unrecognized.keys() {
            warn!(key = %key, "ignoring unrecognized shipment field");
        }

        let mut limits = defaults.clone();
        self.overrides.apply(&mut limits);
        ShipmentRequest {
            items: self.items,
            weight_each: self.weight_each,
            quantity: self.quantity,
            limits,
        }
    }
}

/// Load a shipment file, choosing the parser from its extension
pub fn load_shipment(path: &Path, defaults: &PackingLimits) -> Result<ShipmentRequest> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let document: ShipmentDocument = match extension.as_str() {
        "json" => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        "toml" => toml::from_str(&std::fs::read_to_string(path)?)?,
        "csv" => ShipmentDocument {
            items: load_items_csv(path)?,
            ..Default::default()
        },
        _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };

    let request = document.into_request(defaults);
    debug!(
        path = %path.display(),
        items = request.items.len(),
        "loaded shipment"
    );
    Ok(request)
}

/// Load line items from a CSV file with an `id,unit_weight,quantity` header
pub fn load_items_csv(path: &Path) -> Result<Vec<LineItem>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    read_items_csv(file)
}

pub fn read_items_csv<R: Read>(reader: R) -> Result<Vec<LineItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut items = Vec::new();
    for record in csv_reader.deserialize() {
        let item: LineItem = record?;
        items.push(item);
    }
    if items.is_empty() {
        return Err(Error::InvalidInput("item list is empty".to_string()));
    }
    Ok(items)
}
