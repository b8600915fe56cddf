use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One date of the performance timeline. All three values refer to `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// ISO date label (`YYYY-MM-DD`), the ordering key
    pub date: String,
    pub portfolio: Decimal,
    pub nifty50: Decimal,
    pub gold: Decimal,
}

/// Series name to horizon key (`1month`, ...) to percent change.
pub type Returns = HashMap<String, HashMap<String, Decimal>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResponse {
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
    #[serde(default)]
    pub returns: Returns,
}

/// The three tracked series: the portfolio and its two benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceSeriesKind {
    Portfolio,
    Nifty50,
    Gold,
}

impl PerformanceSeriesKind {
    pub const ALL: [PerformanceSeriesKind; 3] = [
        PerformanceSeriesKind::Portfolio,
        PerformanceSeriesKind::Nifty50,
        PerformanceSeriesKind::Gold,
    ];

    /// Key used in the returns mapping.
    pub fn key(self) -> &'static str {
        match self {
            PerformanceSeriesKind::Portfolio => "portfolio",
            PerformanceSeriesKind::Nifty50 => "nifty50",
            PerformanceSeriesKind::Gold => "gold",
        }
    }

    /// Legend label on the line chart.
    pub fn label(self) -> &'static str {
        match self {
            PerformanceSeriesKind::Portfolio => "Portfolio",
            PerformanceSeriesKind::Nifty50 => "Nifty50",
            PerformanceSeriesKind::Gold => "Gold",
        }
    }

    /// Shorter label used in the returns summary.
    pub fn short_label(self) -> &'static str {
        match self {
            PerformanceSeriesKind::Nifty50 => "Nifty",
            other => other.label(),
        }
    }

    pub fn line_color(self) -> &'static str {
        match self {
            PerformanceSeriesKind::Portfolio => "#10b981",
            PerformanceSeriesKind::Nifty50 => "#3b82f6",
            PerformanceSeriesKind::Gold => "#f59e0b",
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            PerformanceSeriesKind::Portfolio => "rgba(16,185,129,0.08)",
            PerformanceSeriesKind::Nifty50 => "rgba(59,130,246,0.06)",
            PerformanceSeriesKind::Gold => "rgba(245,158,11,0.06)",
        }
    }
}

/// Fixed trailing-return lookback horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    OneMonth,
    ThreeMonths,
    OneYear,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneMonth, Horizon::ThreeMonths, Horizon::OneYear];

    /// Key used in the returns mapping.
    pub fn key(self) -> &'static str {
        match self {
            Horizon::OneMonth => "1month",
            Horizon::ThreeMonths => "3months",
            Horizon::OneYear => "1year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::OneMonth => "1 Month",
            Horizon::ThreeMonths => "3 Months",
            Horizon::OneYear => "1 Year",
        }
    }
}
