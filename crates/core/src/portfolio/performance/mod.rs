//! Performance timeline and trailing returns.

mod performance_model;
mod performance_projection;

pub use performance_model::*;
pub use performance_projection::*;
