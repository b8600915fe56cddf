//! Allocation models as served by `GET /allocation`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate for one named group (a sector or a market-cap tier).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBucket {
    /// Total value of the group
    pub value: Decimal,
    /// Share of the portfolio (0-100)
    pub percentage: Decimal,
}

/// Bucket label to bucket. Iteration order carries no meaning.
pub type AllocationBuckets = HashMap<String, AllocationBucket>;

/// Both allocation dimensions of one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    #[serde(default)]
    pub by_sector: AllocationBuckets,
    #[serde(default)]
    pub by_market_cap: AllocationBuckets,
}

/// The two independently projected dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllocationDimension {
    Sector,
    MarketCap,
}

impl AllocationDimension {
    pub fn title(self) -> &'static str {
        match self {
            AllocationDimension::Sector => "Sector Distribution",
            AllocationDimension::MarketCap => "Market Cap Distribution",
        }
    }

    pub fn buckets(self, allocation: &AllocationResponse) -> &AllocationBuckets {
        match self {
            AllocationDimension::Sector => &allocation.by_sector,
            AllocationDimension::MarketCap => &allocation.by_market_cap,
        }
    }
}
