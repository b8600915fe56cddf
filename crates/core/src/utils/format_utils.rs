//! Number formatting shared by every presentation projection.
//!
//! Amounts use Indian digit grouping (`12,34,567.8`): the last three integer
//! digits form one group, everything before them is grouped in pairs.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION};

/// Formats `value` with Indian grouping and at most `max_fraction_digits`
/// fractional digits. Trailing fractional zeros are dropped.
pub fn format_grouped(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `₹` followed by the grouped amount, at most two fractional digits.
pub fn format_money(value: Decimal) -> String {
    format!(
        "{}{}",
        CURRENCY_SYMBOL,
        format_grouped(value, DISPLAY_DECIMAL_PRECISION)
    )
}

/// Whole-rupee label for chart axis ticks.
pub fn format_axis_tick(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(value, 0))
}

/// Percentage with exactly two fractional digits, without the `%` sign.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
