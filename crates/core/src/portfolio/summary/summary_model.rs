use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// Server-side risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Lookup key for a holding named by the summary.
///
/// The server embeds the whole holding; only its identity is kept so the
/// reference always resolves against the current holdings snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerRef {
    pub symbol: String,
    pub name: String,
}

impl PerformerRef {
    pub fn resolve<'a>(&self, holdings: &'a [Holding]) -> Option<&'a Holding> {
        holdings.iter().find(|h| h.symbol == self.symbol)
    }
}

/// Aggregates served by `GET /summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub diversification_score: Decimal,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_performer: Option<PerformerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_performer: Option<PerformerRef>,
}
