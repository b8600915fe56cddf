use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::format_utils::{format_money, format_percent};

/// A single position as served by `GET /holdings`.
///
/// `value` is `quantity * current_price` computed by the server; it is never
/// recomputed here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub avg_price: Decimal,
    pub current_price: Decimal,
    pub sector: String,
    pub market_cap: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    pub value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

impl Holding {
    /// True when any of symbol, name or sector contains `needle`.
    /// `needle` must already be trimmed and lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.symbol.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.sector.to_lowercase().contains(needle)
    }
}

/// Sign of a gain figure, used to color it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GainTone {
    Positive,
    Negative,
}

impl GainTone {
    /// Zero counts as a gain.
    pub fn of(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            GainTone::Negative
        } else {
            GainTone::Positive
        }
    }
}

/// Display cells for one table row.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    pub quantity: String,
    pub avg_price: String,
    pub current_price: String,
    pub value: String,
    pub gain_loss_percent: String,
    pub tone: GainTone,
}

impl From<&Holding> for HoldingRow {
    fn from(holding: &Holding) -> Self {
        Self {
            symbol: holding.symbol.clone(),
            name: holding.name.clone(),
            quantity: holding.quantity.normalize().to_string(),
            avg_price: format_money(holding.avg_price),
            current_price: format_money(holding.current_price),
            value: format_money(holding.value),
            gain_loss_percent: format!("{}%", format_percent(holding.gain_loss_percent)),
            tone: GainTone::of(holding.gain_loss_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{
            "symbol": "RELIANCE",
            "name": "Reliance Industries Ltd",
            "quantity": 50,
            "avgPrice": 2450.5,
            "currentPrice": 2680.75,
            "sector": "Energy",
            "marketCap": "Large",
            "exchange": "NSE",
            "value": 134037.5,
            "gainLoss": 11512.5,
            "gainLossPercent": 9.4
        }"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.symbol, "RELIANCE");
        assert_eq!(holding.quantity, dec!(50));
        assert_eq!(holding.avg_price, dec!(2450.5));
        assert_eq!(holding.exchange.as_deref(), Some("NSE"));
        assert_eq!(holding.gain_loss_percent, dec!(9.4));
    }

    #[test]
    fn test_exchange_is_optional() {
        let json = r#"{"symbol":"TCS","name":"Tata Consultancy","quantity":10,
            "avgPrice":3200,"currentPrice":3500,"sector":"IT","marketCap":"Large",
            "value":35000,"gainLoss":3000,"gainLossPercent":9.38}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.exchange, None);
    }

    #[test]
    fn test_row_formatting() {
        let holding = Holding {
            symbol: "INFY".to_string(),
            name: "Infosys".to_string(),
            quantity: dec!(75),
            avg_price: dec!(1500),
            current_price: dec!(1420.456),
            sector: "IT".to_string(),
            market_cap: "Large".to_string(),
            exchange: None,
            value: dec!(106534.2),
            gain_loss: dec!(-5965.8),
            gain_loss_percent: dec!(-5.3029),
        };
        let row = HoldingRow::from(&holding);
        assert_eq!(row.quantity, "75");
        assert_eq!(row.current_price, "₹1,420.46");
        assert_eq!(row.value, "₹1,06,534.2");
        assert_eq!(row.gain_loss_percent, "-5.30%");
        assert_eq!(row.tone, GainTone::Negative);
    }

    #[test]
    fn test_zero_gain_is_positive_tone() {
        assert_eq!(GainTone::of(dec!(0)), GainTone::Positive);
        assert_eq!(GainTone::of(dec!(-0.01)), GainTone::Negative);
    }
}
