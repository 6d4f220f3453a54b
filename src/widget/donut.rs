//! Donut chart
//!
//! Categorical proportions. Segments without an explicit color are colored
//! from their status name.

use serde_json::Value;

use crate::plan::{display_value, numeric_value, Record};

use super::palette::status_hue;

/// One slice of the donut
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub value: f64,
    /// Color token
    pub color: String,
}

/// Rendered form of a `donut` widget
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub segments: Vec<DonutSegment>,
}

impl DonutChart {
    /// One segment per record. Non-numeric or negative values count as zero.
    pub fn from_records(records: &[&Record]) -> Self {
        let segments = records
            .iter()
            .map(|record| {
                let name = record.get("name").and_then(Value::as_str);
                let color = record
                    .get("color")
                    .and_then(Value::as_str)
                    .filter(|c| !c.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| status_hue(name).token().to_string());

                DonutSegment {
                    name: display_value(record.get("name")),
                    value: numeric_value(record.get("value")).unwrap_or(0.0).max(0.0),
                    color,
                }
            })
            .collect();

        Self { segments }
    }

    /// Sum of all segment values
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole taken by segment `idx` (0 when the total is 0)
    pub fn share(&self, idx: usize) -> f64 {
        let total = self.total();
        match self.segments.get(idx) {
            Some(segment) if total > 0.0 => segment.value / total,
            _ => 0.0,
        }
    }
}
