//! Projects allocation buckets into ordered, colored pie series.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{AllocationBucket, AllocationBuckets, AllocationDimension, AllocationResponse};
use crate::constants::{ALLOCATION_PALETTE, PERCENTAGE_SUM_TOLERANCE, WIDE_VIEWPORT_MIN_WIDTH};
use crate::utils::format_utils::{format_money, format_percent};

/// One pie slice in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub label: String,
    pub value: Decimal,
    pub percentage: Decimal,
    /// Position in the palette, derived from the display position
    pub color_index: usize,
    pub color: &'static str,
}

impl AllocationSlice {
    /// Tooltip text, e.g. `IT: ₹2,000 (66.67%)`.
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {} ({}%)",
            self.label,
            format_money(self.value),
            format_percent(self.percentage)
        )
    }
}

/// Ordered slices of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSeries {
    pub dimension: AllocationDimension,
    pub title: &'static str,
    pub slices: Vec<AllocationSlice>,
}

impl AllocationSeries {
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn colors(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.color).collect()
    }

    pub fn total_percentage(&self) -> Decimal {
        self.slices.iter().map(|s| s.percentage).sum()
    }

    /// True when the shares add up to 100 within rounding slack.
    pub fn is_complete(&self) -> bool {
        (self.total_percentage() - Decimal::ONE_HUNDRED).abs() <= PERCENTAGE_SUM_TOLERANCE
    }

    pub fn slice(&self, label: &str) -> Option<&AllocationSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// Sorts buckets by value descending, label ascending on ties, and colors them
/// by position.
pub fn project_buckets(
    dimension: AllocationDimension,
    buckets: &AllocationBuckets,
) -> AllocationSeries {
    let mut ordered: Vec<(&String, &AllocationBucket)> = buckets.iter().collect();
    ordered.sort_by(|(a_label, a), (b_label, b)| match b.value.cmp(&a.value) {
        Ordering::Equal => a_label.cmp(b_label),
        other => other,
    });

    let slices = ordered
        .into_iter()
        .enumerate()
        .map(|(position, (label, bucket))| {
            let color_index = position % ALLOCATION_PALETTE.len();
            AllocationSlice {
                label: label.clone(),
                value: bucket.value,
                percentage: bucket.percentage,
                color_index,
                color: ALLOCATION_PALETTE[color_index],
            }
        })
        .collect();

    AllocationSeries {
        dimension,
        title: dimension.title(),
        slices,
    }
}

/// Both pies of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCharts {
    pub by_sector: AllocationSeries,
    pub by_market_cap: AllocationSeries,
}

pub fn project_allocation(allocation: &AllocationResponse) -> AllocationCharts {
    AllocationCharts {
        by_sector: project_buckets(AllocationDimension::Sector, &allocation.by_sector),
        by_market_cap: project_buckets(AllocationDimension::MarketCap, &allocation.by_market_cap),
    }
}

/// Where the renderer places a pie legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    Right,
    Bottom,
}

impl LegendPosition {
    pub fn for_viewport_width(width_px: u32) -> Self {
        if width_px >= WIDE_VIEWPORT_MIN_WIDTH {
            LegendPosition::Right
        } else {
            LegendPosition::Bottom
        }
    }
}
