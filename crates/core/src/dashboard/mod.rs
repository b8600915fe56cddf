//! Dashboard orchestration: fetch cycle, snapshot adoption and load state.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod snapshot_validator;


pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;
pub use snapshot_validator::validate_snapshot;
