//! Allocation buckets and their pie-chart projection.

mod allocation_model;
mod allocation_projection;

pub use allocation_model::*;
pub use allocation_projection::*;
