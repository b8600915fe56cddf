use serde::Serialize;

use super::{PerformerRef, RiskLevel, Summary};
use crate::portfolio::holdings::{GainTone, Holding};
use crate::utils::format_utils::{format_money, format_percent};

const NOT_AVAILABLE: &str = "N/A";

/// Headline card: total value and overall gain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub total_value: String,
    pub total_gain_loss: String,
    pub gain_tone: GainTone,
    pub performance_percent: String,
    pub holdings_count: usize,
}

impl SummaryCard {
    pub fn new(summary: &Summary, holdings_count: usize) -> Self {
        Self {
            total_value: format_money(summary.total_value),
            total_gain_loss: format_money(summary.total_gain_loss),
            gain_tone: GainTone::of(summary.total_gain_loss),
            performance_percent: format!("{}%", format_percent(summary.total_gain_loss_percent)),
            holdings_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerDetail {
    /// `SYMBOL — Name`
    pub headline: String,
    pub gain_loss_percent: String,
    pub value: String,
    pub tone: GainTone,
}

/// Best or worst performer card. `detail` is `None` when the summary names no
/// holding or the named holding is not in the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerCard {
    pub title: &'static str,
    pub detail: Option<PerformerDetail>,
}

impl PerformerCard {
    fn build(title: &'static str, reference: Option<&PerformerRef>, holdings: &[Holding]) -> Self {
        let detail = reference
            .and_then(|r| r.resolve(holdings))
            .map(|holding| PerformerDetail {
                headline: format!("{} — {}", holding.symbol, holding.name),
                gain_loss_percent: format!("{}%", format_percent(holding.gain_loss_percent)),
                value: format!("Value: {}", format_money(holding.value)),
                tone: GainTone::of(holding.gain_loss_percent),
            });
        Self { title, detail }
    }

    pub fn headline(&self) -> &str {
        self.detail
            .as_ref()
            .map_or(NOT_AVAILABLE, |d| d.headline.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInsights {
    pub holdings_count: usize,
    pub diversification_score: String,
    pub risk_level: RiskLevel,
}

/// Top performers and insights panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsView {
    pub best: PerformerCard,
    pub worst: PerformerCard,
    pub insights: PortfolioInsights,
}

pub fn project_insights(summary: &Summary, holdings: &[Holding]) -> InsightsView {
    InsightsView {
        best: PerformerCard::build("Best Performer", summary.top_performer.as_ref(), holdings),
        worst: PerformerCard::build("Worst Performer", summary.worst_performer.as_ref(), holdings),
        insights: PortfolioInsights {
            holdings_count: holdings.len(),
            diversification_score: summary.diversification_score.normalize().to_string(),
            risk_level: summary.risk_level,
        },
    }
}
