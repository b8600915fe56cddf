//! Filterable, sortable projection of the holdings snapshot.
//!
//! Every sort key is bound to a typed comparator when it is selected, so the
//! comparison never inspects field types at runtime. Ordering is stable with a
//! fixed tiebreak (symbol ascending, then name ascending) in both directions, which
//! makes repeated renders of the same inputs produce the same row order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::{Holding, HoldingRow};

const EMPTY_VIEW_MESSAGE: &str = "No results";

/// Orderable holding fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Symbol,
    Name,
    Sector,
    Quantity,
    AvgPrice,
    CurrentPrice,
    Value,
    GainLoss,
    GainLossPercent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

type Comparator = fn(&Holding, &Holding) -> Ordering;

impl SortKey {
    /// Comparator ordering two holdings ascending by this key.
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Symbol => |a: &Holding, b: &Holding| collate(&a.symbol, &b.symbol),
            SortKey::Name => |a: &Holding, b: &Holding| collate(&a.name, &b.name),
            SortKey::Sector => |a: &Holding, b: &Holding| collate(&a.sector, &b.sector),
            SortKey::Quantity => |a: &Holding, b: &Holding| a.quantity.cmp(&b.quantity),
            SortKey::AvgPrice => |a: &Holding, b: &Holding| a.avg_price.cmp(&b.avg_price),
            SortKey::CurrentPrice => {
                |a: &Holding, b: &Holding| a.current_price.cmp(&b.current_price)
            }
            SortKey::Value => |a: &Holding, b: &Holding| a.value.cmp(&b.value),
            SortKey::GainLoss => |a: &Holding, b: &Holding| a.gain_loss.cmp(&b.gain_loss),
            SortKey::GainLossPercent => {
                |a: &Holding, b: &Holding| a.gain_loss_percent.cmp(&b.gain_loss_percent)
            }
        }
    }

    /// Columns of the holdings table, left to right.
    pub const COLUMNS: [SortKey; 7] = [
        SortKey::Symbol,
        SortKey::Name,
        SortKey::Quantity,
        SortKey::AvgPrice,
        SortKey::CurrentPrice,
        SortKey::Value,
        SortKey::GainLossPercent,
    ];

    pub fn is_numeric(self) -> bool {
        !matches!(self, SortKey::Symbol | SortKey::Name | SortKey::Sector)
    }

    /// Column header shown for this key.
    pub fn header(self) -> &'static str {
        match self {
            SortKey::Symbol => "Symbol",
            SortKey::Name => "Name",
            SortKey::Sector => "Sector",
            SortKey::Quantity => "Qty",
            SortKey::AvgPrice => "Avg",
            SortKey::CurrentPrice => "LTP",
            SortKey::Value => "Value",
            SortKey::GainLoss => "Gain",
            SortKey::GainLossPercent => "Gain %",
        }
    }
}

/// Letters with accents removed and case folded: `Écorp` becomes `ecorp`.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Text collation close to a default locale compare. Base letters decide first,
/// then accents (unaccented first), then case (lowercase first).
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| b.cmp(a))
}

fn tiebreak(a: &Holding, b: &Holding) -> Ordering {
    a.symbol.cmp(&b.symbol).then_with(|| a.name.cmp(&b.name))
}

/// Filter and sort `holdings` without copying any of them.
pub fn filter_and_sort<'a>(
    holdings: &'a [Holding],
    query: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Holding> {
    let needle = query.trim().to_lowercase();
    let compare = key.comparator();

    let mut rows: Vec<&Holding> = holdings
        .iter()
        .filter(|h| h.matches_query(&needle))
        .collect();

    rows.sort_by(|a, b| {
        let primary = match direction {
            SortDirection::Ascending => compare(a, b),
            SortDirection::Descending => compare(b, a),
        };
        primary.then_with(|| tiebreak(a, b))
    });
    rows
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ColumnAlign {
    Left,
    Right,
}

/// One header cell. `sort` is set only on the active column.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub key: SortKey,
    pub header: &'static str,
    pub align: ColumnAlign,
    pub sort: Option<SortDirection>,
}

/// Query and ordering state of the holdings table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsTableState {
    pub query: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for HoldingsTableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::Value,
            direction: SortDirection::Descending,
        }
    }
}

impl HoldingsTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicking a header: same key flips direction, a new key starts descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if key == self.sort_key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Header row; numeric columns are right-aligned.
    pub fn columns(&self) -> Vec<TableColumn> {
        SortKey::COLUMNS
            .iter()
            .map(|&key| TableColumn {
                key,
                header: key.header(),
                align: if key.is_numeric() {
                    ColumnAlign::Right
                } else {
                    ColumnAlign::Left
                },
                sort: (key == self.sort_key).then_some(self.direction),
            })
            .collect()
    }

    pub fn view<'a>(&self, holdings: &'a [Holding]) -> HoldingsView<'a> {
        HoldingsView {
            rows: filter_and_sort(holdings, &self.query, self.sort_key, self.direction),
        }
    }
}

/// Ordered, filtered rows ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingsView<'a> {
    pub rows: Vec<&'a Holding>,
}

impl<'a> HoldingsView<'a> {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn symbols(&self) -> Vec<&'a str> {
        self.rows.iter().map(|h| h.symbol.as_str()).collect()
    }

    pub fn caption(&self) -> String {
        format!("Showing {} holdings", self.count())
    }

    /// Placeholder for a loaded snapshot where nothing matches.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_VIEW_MESSAGE)
    }

    pub fn display_rows(&self) -> Vec<HoldingRow> {
        self.rows.iter().map(|h| HoldingRow::from(*h)).collect()
    }
}
