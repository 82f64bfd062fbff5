//! Rate lookup seam
//!
//! The planner never prices boxes itself. Callers pass each box weight to a
//! carrier integration (or a local table) through this trait.

use shipkit_types::{Money, RateError};

/// Prices a single package by weight
pub trait RateLookup {
    fn price_for(&self, weight: f64) -> Result<Money, RateError>;
}

impl<F> RateLookup for F
where
    F: Fn(f64) -> Result<Money, RateError>,
{
    fn price_for(&self, weight: f64) -> Result<Money, RateError> {
        self(weight)
    }
}
