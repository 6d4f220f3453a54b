//! Stat Card
//!
//! A single headline value with a trend badge and an optional, collapsible
//! details table.

use serde_json::Value;

use crate::plan::{display_value, Record, WidgetDescriptor};

use super::palette::Hue;
use super::table::DataTable;

/// Direction of a stat card's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Parse `"up"` / `"down"` case-insensitively; anything else is no trend
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "up" => Some(Trend::Up),
            "down" => Some(Trend::Down),
            _ => None,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_str).and_then(Self::parse)
    }

    pub fn hue(&self) -> Hue {
        match self {
            Trend::Up => Hue::Success,
            Trend::Down => Hue::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Show/hide state of a details section.
///
/// Each card owns its own toggle; flipping it never touches the table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsToggle {
    open: bool,
}

impl DetailsToggle {
    pub fn new(default_open: bool) -> Self {
        Self { open: default_open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip visibility, as the card's details switch does on the page
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Secondary table attached to a stat card
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub table: DataTable,
    pub toggle: DetailsToggle,
}

/// Rendered form of a `statCard` widget
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub description: Option<String>,
    pub value: String,
    pub trend: Option<Trend>,
    /// Raw trend text shown inside the badge
    pub trend_label: Option<String>,
    /// Badge color token: explicit color, else derived from the trend
    pub badge_color: String,
    pub details: Option<Details>,
}

impl StatCard {
    /// Build from a descriptor whose primary records are non-empty
    pub fn build(descriptor: &WidgetDescriptor, primary: &Record, print_mode: bool) -> Self {
        let trend_value = primary.get("trend");
        let trend = Trend::from_value(trend_value);

        let trend_label = Some(display_value(trend_value)).filter(|s| !s.trim().is_empty());

        let explicit_color = primary
            .get("color")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let badge_color = match (explicit_color, trend) {
            (Some(color), _) => color.to_string(),
            (None, Some(trend)) => trend.hue().token().to_string(),
            (None, None) => Hue::Neutral.token().to_string(),
        };

        let value = match display_value(primary.get("value")) {
            v if v.is_empty() => "—".to_string(),
            v => v,
        };

        let detail_records = descriptor.detail_records();
        let details = if detail_records.is_empty() {
            None
        } else {
            Some(Details {
                table: DataTable::details(&detail_records, descriptor.details_columns.as_deref()),
                toggle: DetailsToggle::new(print_mode),
            })
        };

        Self {
            description: descriptor.description.clone().filter(|d| !d.is_empty()),
            value,
            trend,
            trend_label,
            badge_color,
            details,
        }
    }

    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }
}
