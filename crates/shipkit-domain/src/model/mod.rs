//! Domain model types

pub mod limits;
pub mod line_item;
pub mod result;
pub mod shipment;

pub use limits::{BoxCapacity, PackingLimits, WEIGHT_EPSILON};
pub use line_item::LineItem;
pub use result::{PackingResult, PackingStrategy, ShippingBox};
pub use shipment::{Contents, ShipmentRequest, ValidShipment};
