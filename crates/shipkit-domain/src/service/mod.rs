//! Domain services

pub mod item_consolidator;
pub mod leftover_filler;
pub mod planner;
pub mod uniform_packer;

pub use item_consolidator::{consolidate, variation, Consolidation, LeftoverChunk};
pub use leftover_filler::{fill_leftovers, LeftoverBinFiller};
pub use planner::{plan, PackingPlanner};
pub use uniform_packer::{pack_uniform, LimitingDimension};
