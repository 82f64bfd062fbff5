//! Shipment model and multi-box packing planner
//!
//! The planner splits a shipment into boxes that respect per-box weight and
//! count limits. Pricing each box is left to a [`RateLookup`] implementation
//! supplied by the caller.

pub mod model;
pub mod rate;
pub mod service;

pub use model::{
    BoxCapacity, Contents, LineItem, PackingLimits, PackingResult, PackingStrategy,
    ShipmentRequest, ShippingBox, ValidShipment, WEIGHT_EPSILON,
};
pub use rate::RateLookup;
pub use service::{plan, PackingPlanner};
