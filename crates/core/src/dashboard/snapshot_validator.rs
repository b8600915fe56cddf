//! Shape checks applied to a fetched batch before it is adopted.

use std::collections::HashSet;

use log::warn;
use rust_decimal::Decimal;

use super::Snapshot;
use crate::constants::PERCENTAGE_SUM_TOLERANCE;
use crate::errors::ValidationError;
use crate::portfolio::allocation::{AllocationDimension, AllocationResponse};
use crate::portfolio::holdings::Holding;
use crate::portfolio::performance::TimelinePoint;
use crate::utils::time_utils::{first_out_of_order, parse_timeline_date};

pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), ValidationError> {
    let result = validate_holdings(&snapshot.holdings)
        .and_then(|_| validate_allocation(&snapshot.allocation))
        .and_then(|_| validate_timeline(&snapshot.performance.timeline));
    if let Err(e) = &result {
        warn!("Rejecting portfolio snapshot: {}", e);
    }
    result
}

fn validate_holdings(holdings: &[Holding]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(holdings.len());
    for (position, holding) in holdings.iter().enumerate() {
        if holding.symbol.trim().is_empty() {
            return Err(ValidationError::EmptySymbol(position));
        }
        if !seen.insert(holding.symbol.as_str()) {
            return Err(ValidationError::DuplicateSymbol(holding.symbol.clone()));
        }
        if holding.quantity.is_sign_negative() && !holding.quantity.is_zero() {
            return Err(ValidationError::NegativeQuantity {
                symbol: holding.symbol.clone(),
                quantity: holding.quantity.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_allocation(allocation: &AllocationResponse) -> Result<(), ValidationError> {
    let max_percentage = Decimal::ONE_HUNDRED + PERCENTAGE_SUM_TOLERANCE;

    for dimension in [AllocationDimension::Sector, AllocationDimension::MarketCap] {
        for (label, bucket) in dimension.buckets(allocation) {
            let reason = if bucket.value < Decimal::ZERO {
                Some(format!("negative value {}", bucket.value))
            } else if bucket.percentage < Decimal::ZERO || bucket.percentage > max_percentage {
                Some(format!("percentage {} outside 0-100", bucket.percentage))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ValidationError::BucketOutOfRange {
                    dimension: dimension.title().to_string(),
                    label: label.clone(),
                    reason,
                });
            }
        }
    }
    Ok(())
}

fn validate_timeline(timeline: &[TimelinePoint]) -> Result<(), ValidationError> {
    let dates = timeline
        .iter()
        .map(|p| {
            parse_timeline_date(&p.date)
                .ok_or_else(|| ValidationError::InvalidTimelineDate(p.date.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match first_out_of_order(&dates) {
        Some((previous, current)) => Err(ValidationError::UnorderedTimeline {
            previous: timeline[previous].date.clone(),
            current: timeline[current].date.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::allocation::AllocationBucket;
    use crate::portfolio::performance::PerformanceResponse;
    use crate::portfolio::summary::{RiskLevel, Summary};
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, quantity: Decimal) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            quantity,
            avg_price: dec!(10),
            current_price: dec!(10),
            sector: "IT".to_string(),
            market_cap: "Mid".to_string(),
            exchange: None,
            value: quantity * dec!(10),
            gain_loss: Decimal::ZERO,
            gain_loss_percent: Decimal::ZERO,
        }
    }

    fn point(date: &str) -> TimelinePoint {
        TimelinePoint {
            date: date.to_string(),
            portfolio: dec!(1),
            nifty50: dec!(1),
            gold: dec!(1),
        }
    }

    fn snapshot(holdings: Vec<Holding>, timeline: Vec<TimelinePoint>) -> Snapshot {
        Snapshot {
            holdings,
            allocation: AllocationResponse::default(),
            summary: Summary {
                total_value: Decimal::ZERO,
                total_invested: Decimal::ZERO,
                total_gain_loss: Decimal::ZERO,
                total_gain_loss_percent: Decimal::ZERO,
                diversification_score: Decimal::ZERO,
                risk_level: RiskLevel::Moderate,
                top_performer: None,
                worst_performer: None,
            },
            performance: PerformanceResponse {
                timeline,
                returns: Default::default(),
            },
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        let s = snapshot(
            vec![holding("TCS", dec!(10)), holding("INFY", dec!(0))],
            vec![point("2024-01-01"), point("2024-03-01"), point("2024-06-01")],
        );
        assert_eq!(validate_snapshot(&s), Ok(()));
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        assert_eq!(validate_snapshot(&snapshot(vec![], vec![])), Ok(()));
    }

    #[test]
    fn test_duplicate_and_empty_symbols() {
        let s = snapshot(vec![holding("TCS", dec!(1)), holding("TCS", dec!(2))], vec![]);
        assert_eq!(
            validate_snapshot(&s),
            Err(ValidationError::DuplicateSymbol("TCS".to_string()))
        );

        let s = snapshot(vec![holding("TCS", dec!(1)), holding(" ", dec!(2))], vec![]);
        assert_eq!(validate_snapshot(&s), Err(ValidationError::EmptySymbol(1)));
    }

    #[test]
    fn test_negative_quantity() {
        let s = snapshot(vec![holding("TCS", dec!(-1))], vec![]);
        assert!(matches!(
            validate_snapshot(&s),
            Err(ValidationError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_bucket_ranges() {
        let mut s = snapshot(vec![], vec![]);
        s.allocation.by_market_cap.insert(
            "Large".to_string(),
            AllocationBucket {
                value: dec!(10),
                percentage: dec!(100.4),
            },
        );
        assert_eq!(validate_snapshot(&s), Ok(()));

        s.allocation.by_sector.insert(
            "IT".to_string(),
            AllocationBucket {
                value: dec!(10),
                percentage: dec!(120),
            },
        );
        match validate_snapshot(&s) {
            Err(ValidationError::BucketOutOfRange { dimension, label, .. }) => {
                assert_eq!(dimension, "Sector Distribution");
                assert_eq!(label, "IT");
            }
            other => panic!("expected bucket error, got {:?}", other),
        }
    }

    #[test]
    fn test_timeline_dates() {
        let s = snapshot(vec![], vec![point("2024-01-01"), point("March 2024")]);
        assert_eq!(
            validate_snapshot(&s),
            Err(ValidationError::InvalidTimelineDate("March 2024".to_string()))
        );

        let s = snapshot(vec![], vec![point("2024-06-01"), point("2024-01-01")]);
        assert_eq!(
            validate_snapshot(&s),
            Err(ValidationError::UnorderedTimeline {
                previous: "2024-06-01".to_string(),
                current: "2024-01-01".to_string(),
            })
        );
    }
}
