//! Line-chart series and trailing-return lookups for the performance panel.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Horizon, PerformanceResponse, PerformanceSeriesKind, Returns, TimelinePoint};
use crate::constants::UNAVAILABLE_MARKER;
use crate::errors::{Error, Result};

/// Date labels plus one value sequence per series, all of the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSeries {
    labels: Vec<String>,
    portfolio: Vec<Decimal>,
    nifty50: Vec<Decimal>,
    gold: Vec<Decimal>,
}

impl PerformanceSeries {
    /// Splits co-indexed timeline points into aligned sequences.
    pub fn from_timeline(timeline: &[TimelinePoint]) -> Self {
        Self {
            labels: timeline.iter().map(|p| p.date.clone()).collect(),
            portfolio: timeline.iter().map(|p| p.portfolio).collect(),
            nifty50: timeline.iter().map(|p| p.nifty50).collect(),
            gold: timeline.iter().map(|p| p.gold).collect(),
        }
    }

    /// Builds the series from separate sequences; every length must match.
    pub fn from_parallel(
        labels: Vec<String>,
        portfolio: Vec<Decimal>,
        nifty50: Vec<Decimal>,
        gold: Vec<Decimal>,
    ) -> Result<Self> {
        let n = labels.len();
        if portfolio.len() != n || nifty50.len() != n || gold.len() != n {
            return Err(Error::SeriesLengthMismatch {
                labels: n,
                portfolio: portfolio.len(),
                nifty50: nifty50.len(),
                gold: gold.len(),
            });
        }
        Ok(Self {
            labels,
            portfolio,
            nifty50,
            gold,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self, kind: PerformanceSeriesKind) -> &[Decimal] {
        match kind {
            PerformanceSeriesKind::Portfolio => &self.portfolio,
            PerformanceSeriesKind::Nifty50 => &self.nifty50,
            PerformanceSeriesKind::Gold => &self.gold,
        }
    }

    /// One dataset per series in legend order.
    pub fn datasets(&self) -> Vec<LineDataset<'_>> {
        PerformanceSeriesKind::ALL
            .iter()
            .map(|&kind| LineDataset {
                kind,
                label: kind.label(),
                border_color: kind.line_color(),
                background_color: kind.fill_color(),
                data: self.values(kind),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset<'a> {
    pub kind: PerformanceSeriesKind,
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub data: &'a [Decimal],
}

/// A trailing return, or the marker for one the server did not send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingReturn {
    Available(Decimal),
    Unavailable,
}

impl TrailingReturn {
    pub fn value(self) -> Option<Decimal> {
        match self {
            TrailingReturn::Available(value) => Some(value),
            TrailingReturn::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, TrailingReturn::Available(_))
    }
}

impl fmt::Display for TrailingReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailingReturn::Available(value) => write!(f, "{}%", value.normalize()),
            TrailingReturn::Unavailable => f.write_str(UNAVAILABLE_MARKER),
        }
    }
}

impl Serialize for TrailingReturn {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            TrailingReturn::Available(value) => serializer.serialize_some(value),
            TrailingReturn::Unavailable => serializer.serialize_none(),
        }
    }
}

/// Looks up one trailing return; a missing series or horizon is `Unavailable`.
pub fn trailing_return(
    returns: &Returns,
    kind: PerformanceSeriesKind,
    horizon: Horizon,
) -> TrailingReturn {
    returns
        .get(kind.key())
        .and_then(|by_horizon| by_horizon.get(horizon.key()))
        .map_or(TrailingReturn::Unavailable, |value| {
            TrailingReturn::Available(*value)
        })
}

/// Returns of all three series for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonReturns {
    pub horizon: Horizon,
    pub label: &'static str,
    pub portfolio: TrailingReturn,
    pub nifty50: TrailingReturn,
    pub gold: TrailingReturn,
}

impl HorizonReturns {
    pub fn get(&self, kind: PerformanceSeriesKind) -> TrailingReturn {
        match kind {
            PerformanceSeriesKind::Portfolio => self.portfolio,
            PerformanceSeriesKind::Nifty50 => self.nifty50,
            PerformanceSeriesKind::Gold => self.gold,
        }
    }

    /// `Portfolio: 2.3%`, `Nifty: -`, ...
    pub fn lines(&self) -> Vec<String> {
        PerformanceSeriesKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}", kind.short_label(), self.get(kind)))
            .collect()
    }
}

pub fn returns_summary(returns: &Returns) -> Vec<HorizonReturns> {
    Horizon::ALL
        .iter()
        .map(|&horizon| HorizonReturns {
            horizon,
            label: horizon.label(),
            portfolio: trailing_return(returns, PerformanceSeriesKind::Portfolio, horizon),
            nifty50: trailing_return(returns, PerformanceSeriesKind::Nifty50, horizon),
            gold: trailing_return(returns, PerformanceSeriesKind::Gold, horizon),
        })
        .collect()
}

/// Everything the performance panel renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceView {
    pub series: PerformanceSeries,
    pub returns: Vec<HorizonReturns>,
}

pub fn project_performance(performance: &PerformanceResponse) -> PerformanceView {
    PerformanceView {
        series: PerformanceSeries::from_timeline(&performance.timeline),
        returns: returns_summary(&performance.returns),
    }
}
