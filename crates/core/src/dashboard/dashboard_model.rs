use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::{project_allocation, AllocationCharts, AllocationResponse};
use crate::portfolio::holdings::{Holding, HoldingsTableState, HoldingsView};
use crate::portfolio::performance::{project_performance, PerformanceResponse, PerformanceView};
use crate::portfolio::summary::{project_insights, InsightsView, Summary, SummaryCard};

/// The four resources of one successful fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub holdings: Vec<Holding>,
    pub allocation: AllocationResponse,
    pub summary: Summary,
    pub performance: PerformanceResponse,
}

impl Snapshot {
    pub fn holdings_view<'a>(&'a self, table: &HoldingsTableState) -> HoldingsView<'a> {
        table.view(&self.holdings)
    }

    pub fn allocation_charts(&self) -> AllocationCharts {
        project_allocation(&self.allocation)
    }

    pub fn performance_view(&self) -> PerformanceView {
        project_performance(&self.performance)
    }

    pub fn summary_card(&self) -> SummaryCard {
        SummaryCard::new(&self.summary, self.holdings.len())
    }

    pub fn insights(&self) -> InsightsView {
        project_insights(&self.summary, &self.holdings)
    }

    pub fn top_performer(&self) -> Option<&Holding> {
        self.summary
            .top_performer
            .as_ref()
            .and_then(|r| r.resolve(&self.holdings))
    }

    pub fn worst_performer(&self) -> Option<&Holding> {
        self.summary
            .worst_performer
            .as_ref()
            .and_then(|r| r.resolve(&self.holdings))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What consumers observe: the last adopted snapshot plus the cycle status.
///
/// `snapshot` survives failed cycles; `error` is set only while `Failed`.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub status: LoadStatus,
    pub snapshot: Option<Arc<Snapshot>>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// True once any snapshot was adopted, so an empty table means "no rows"
    /// rather than "not loaded yet".
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}
