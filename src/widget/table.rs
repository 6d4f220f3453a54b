//! Tabular widgets
//!
//! Shared by the generic `table` widget and stat card detail tables.

use crate::plan::{display_value, Record};

use super::stat_card::Trend;

/// Column names rendered as a trend icon inside detail tables
const TREND_COLUMNS: [&str; 2] = ["trend", "Tendencia"];

/// One rendered table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Directional icon (nothing for an absent or unknown trend)
    Trend(Option<Trend>),
}

impl Cell {
    /// Plain-text form of the cell
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Trend(Some(trend)) => trend.as_str(),
            Cell::Trend(None) => "",
        }
    }
}

/// A table of uniform records
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Generic table: every cell rendered as text
    pub fn from_records(records: &[&Record], explicit: Option<&[String]>) -> Self {
        Self::build(records, explicit, false)
    }

    /// Detail table: trend columns render as icons
    pub fn details(records: &[&Record], explicit: Option<&[String]>) -> Self {
        Self::build(records, explicit, true)
    }

    fn build(records: &[&Record], explicit: Option<&[String]>, trend_icons: bool) -> Self {
        let columns = resolve_columns(explicit, records);

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        let value = record.get(column);
                        if trend_icons && is_trend_column(column) {
                            Cell::Trend(Trend::from_value(value))
                        } else {
                            Cell::Text(display_value(value))
                        }
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Explicit columns when given and non-empty, else the first record's keys
pub fn resolve_columns(explicit: Option<&[String]>, records: &[&Record]) -> Vec<String> {
    match explicit {
        Some(columns) if !columns.is_empty() => columns.to_vec(),
        _ => records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default(),
    }
}

fn is_trend_column(column: &str) -> bool {
    TREND_COLUMNS.contains(&column)
}
