//! Runs dashboard fetch cycles and owns the adopted snapshot.
//!
//! A cycle fetches the four resources concurrently and adopts them only if all
//! four succeed and pass validation. Cycles may overlap: each takes a generation
//! number when it starts and only the most recently started cycle may commit.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};
use tokio::sync::RwLock;

use super::{
    validate_snapshot, DashboardServiceTrait, DashboardState, LoadStatus, PortfolioApiTrait,
    Snapshot,
};
use crate::constants::FETCH_FAILED_MESSAGE;
use crate::errors::Result;

#[derive(Default)]
struct CycleState {
    state: DashboardState,
    generation: u64,
}

pub struct DashboardService {
    api: Arc<dyn PortfolioApiTrait>,
    inner: RwLock<CycleState>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn PortfolioApiTrait>) -> Self {
        Self {
            api,
            inner: RwLock::new(CycleState::default()),
        }
    }

    /// Fetches all four resources; the first failure fails the whole batch.
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let (holdings, allocation, summary, performance) = futures::try_join!(
            self.api.get_holdings(),
            self.api.get_allocation(),
            self.api.get_summary(),
            self.api.get_performance()
        )?;

        let snapshot = Snapshot {
            holdings,
            allocation,
            summary,
            performance,
        };
        validate_snapshot(&snapshot)?;
        Ok(snapshot)
    }

    async fn begin_cycle(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state.status = LoadStatus::Loading;
        inner.state.error = None;
        debug!("Dashboard fetch cycle {} started", inner.generation);
        inner.generation
    }

    async fn finish_cycle(&self, generation: u64, outcome: Result<Snapshot>) -> LoadStatus {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            debug!(
                "Discarding dashboard fetch cycle {} superseded by cycle {}",
                generation, inner.generation
            );
            return inner.state.status;
        }

        match outcome {
            Ok(snapshot) => {
                info!(
                    "Adopted portfolio snapshot with {} holdings (cycle {})",
                    snapshot.holdings.len(),
                    generation
                );
                inner.state.snapshot = Some(Arc::new(snapshot));
                inner.state.status = LoadStatus::Ready;
            }
            Err(e) => {
                error!("Dashboard fetch cycle {} failed: {}", generation, e);
                inner.state.status = LoadStatus::Failed;
                inner.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        inner.state.status
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn refresh(&self) -> LoadStatus {
        let generation = self.begin_cycle().await;
        let outcome = self.fetch_snapshot().await;
        self.finish_cycle(generation, outcome).await
    }

    async fn state(&self) -> DashboardState {
        self.inner.read().await.state.clone()
    }
}
