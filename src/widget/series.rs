//! Series charts
//!
//! Area, bar and line charts share one shape: x categories from the record
//! field named by `dataKey`, one plotted series per series entry.

use crate::plan::{display_value, numeric_value, Record, SeriesSpec};

use super::palette::series_color;

/// How a series chart is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Area => "area",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// One plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Record field the values come from
    pub key: String,
    pub label: String,
    /// Color token
    pub color: String,
    /// One value per category; `None` marks a gap
    pub values: Vec<Option<f64>>,
}

/// Rendered form of an `area` / `bar` / `line` widget
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub kind: ChartKind,
    pub categories: Vec<String>,
    pub series: Vec<PlotSeries>,
}

impl SeriesChart {
    /// Build from non-empty records.
    ///
    /// Without a category key categories are 1-based positions. Without
    /// series entries every numeric field of the first record (other than the
    /// category key) becomes a series.
    pub fn from_records(
        kind: ChartKind,
        data_key: Option<&str>,
        specs: &[SeriesSpec],
        records: &[&Record],
    ) -> Self {
        let categories = records
            .iter()
            .enumerate()
            .map(|(idx, record)| match data_key {
                Some(key) => display_value(record.get(key)),
                None => (idx + 1).to_string(),
            })
            .collect();

        let specs = if specs.is_empty() {
            inferred_series(data_key, records)
        } else {
            specs.to_vec()
        };

        let series = specs
            .iter()
            .enumerate()
            .map(|(idx, spec)| PlotSeries {
                key: spec.name.clone(),
                label: spec.display_label().to_string(),
                color: spec
                    .color
                    .clone()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| series_color(idx).to_string()),
                values: records
                    .iter()
                    .map(|record| numeric_value(record.get(&spec.name)))
                    .collect(),
            })
            .collect();

        Self {
            kind,
            categories,
            series,
        }
    }

    /// True when no series has a single plottable point
    pub fn is_blank(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.values.iter().all(Option::is_none))
    }

    /// Smallest and largest plotted value across every series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

fn inferred_series(data_key: Option<&str>, records: &[&Record]) -> Vec<SeriesSpec> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    first
        .iter()
        .filter(|(key, _)| Some(key.as_str()) != data_key)
        .filter(|(_, value)| value.is_number())
        .map(|(key, _)| SeriesSpec::new(key.clone()))
        .collect()
}
