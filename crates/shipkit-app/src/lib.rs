//! Application service layer - config, shipment input, rating, reports

pub mod config;
pub mod input;
pub mod quote;
pub mod rates;
pub mod report;
