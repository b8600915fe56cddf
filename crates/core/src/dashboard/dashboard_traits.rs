use async_trait::async_trait;

use super::{DashboardState, LoadStatus};
use crate::errors::Result;
use crate::portfolio::allocation::AllocationResponse;
use crate::portfolio::holdings::Holding;
use crate::portfolio::performance::PerformanceResponse;
use crate::portfolio::summary::Summary;

/// Source of the four dashboard resources, one call per endpoint.
#[async_trait]
pub trait PortfolioApiTrait: Send + Sync {
    async fn get_holdings(&self) -> Result<Vec<Holding>>;
    async fn get_allocation(&self) -> Result<AllocationResponse>;
    async fn get_summary(&self) -> Result<Summary>;
    async fn get_performance(&self) -> Result<PerformanceResponse>;
}

#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Runs one fetch cycle and returns the status it left behind.
    async fn refresh(&self) -> LoadStatus;

    /// Current state; cheap to call, the snapshot is shared.
    async fn state(&self) -> DashboardState;
}
