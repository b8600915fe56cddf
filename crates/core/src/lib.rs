//! Wealthdash Core - portfolio dashboard records, projections and orchestration.
//!
//! This crate turns the pre-aggregated records served by the portfolio API into
//! presentation-ready data: the filterable holdings table, allocation pies,
//! the performance chart with trailing returns, and the summary cards. It is
//! transport-agnostic; the `client` crate implements [`PortfolioApiTrait`] over HTTP.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod portfolio;
pub mod utils;

// Re-export the dashboard entry points
pub use dashboard::{
    DashboardService, DashboardServiceTrait, DashboardState, LoadStatus, PortfolioApiTrait,
    Snapshot,
};

// Re-export record and projection types
pub use portfolio::allocation::*;
pub use portfolio::holdings::*;
pub use portfolio::performance::*;
pub use portfolio::summary::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
