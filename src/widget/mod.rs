//! Widget Dispatcher
//!
//! Maps one [`WidgetDescriptor`] to exactly one [`Widget`] from its
//! `component_type` discriminant. Dispatch is pure: no I/O and the
//! descriptor is never modified.
//!
//! Anomalies stay local to the widget:
//! - an explicit `error` field becomes an error notice
//! - an unknown or missing type becomes an "unrecognized type" notice
//! - absent or empty data becomes a "no data" placeholder

pub mod donut;
pub mod palette;
pub mod series;
pub mod stat_card;
pub mod table;

pub use donut::{DonutChart, DonutSegment};
pub use palette::{resolve_color, series_color, status_hue, Hue};
pub use series::{ChartKind, PlotSeries, SeriesChart};
pub use stat_card::{Details, DetailsToggle, StatCard, Trend};
pub use table::{Cell, DataTable};

use crate::plan::WidgetDescriptor;

/// Tag a producer uses to mark a widget it failed to build
pub const ERROR_TAG: &str = "error";

/// Message shown for an `error`-tagged widget that carries no message
pub const GENERIC_WIDGET_ERROR: &str = "The report service could not build this widget";

/// Known `component_type` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    StatCard,
    Table,
    Donut,
    Area,
    Bar,
    Line,
}

impl ComponentType {
    /// Parse a wire tag; tags are case-sensitive
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "statCard" => Some(Self::StatCard),
            "table" => Some(Self::Table),
            "donut" => Some(Self::Donut),
            "area" => Some(Self::Area),
            "bar" => Some(Self::Bar),
            "line" => Some(Self::Line),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::StatCard => "statCard",
            Self::Table => "table",
            Self::Donut => "donut",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }

    fn chart_kind(&self) -> Option<ChartKind> {
        match self {
            Self::Area => Some(ChartKind::Area),
            Self::Bar => Some(ChartKind::Bar),
            Self::Line => Some(ChartKind::Line),
            _ => None,
        }
    }
}

/// Options threaded from the page address down to widgets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Expand collapsible sections by default (static/export rendering)
    pub print_mode: bool,
}

impl RenderOptions {
    pub fn print() -> Self {
        Self { print_mode: true }
    }
}

/// Inline notice replacing a widget's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The descriptor carried an explicit error
    Error(String),
    /// Unrecognized `component_type` (`None` when the field is missing)
    UnknownType(Option<String>),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Error(message) => message.clone(),
            Notice::UnknownType(Some(tag)) => format!("Unrecognized component type: {}", tag),
            Notice::UnknownType(None) => "Unrecognized component type: (missing)".to_string(),
        }
    }
}

/// The single visual representation derived from a descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Notice(Notice),
    NoData,
    StatCard(StatCard),
    Table(DataTable),
    Donut(DonutChart),
    Series(SeriesChart),
}

impl Widget {
    /// Short label of the outcome, used for logs and inspection
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Notice(Notice::Error(_)) => "error",
            Widget::Notice(Notice::UnknownType(_)) => "unknown",
            Widget::NoData => "no-data",
            Widget::StatCard(_) => "statCard",
            Widget::Table(_) => "table",
            Widget::Donut(_) => "donut",
            Widget::Series(chart) => chart.kind.as_str(),
        }
    }

    /// One-line description of what was rendered
    pub fn summary(&self) -> String {
        match self {
            Widget::Notice(notice) => notice.message(),
            Widget::NoData => "no data".to_string(),
            Widget::StatCard(card) => match &card.details {
                Some(details) => format!(
                    "value {} ({} detail rows)",
                    card.value,
                    details.table.row_count()
                ),
                None => format!("value {}", card.value),
            },
            Widget::Table(table) => {
                format!("{} rows x {} columns", table.row_count(), table.column_count())
            }
            Widget::Donut(chart) => format!(
                "{} segments, total {}",
                chart.segments.len(),
                chart.total()
            ),
            Widget::Series(chart) => format!(
                "{} series over {} categories",
                chart.series.len(),
                chart.categories.len()
            ),
        }
    }
}

/// Derive the widget for one descriptor
pub fn dispatch(descriptor: &WidgetDescriptor, options: &RenderOptions) -> Widget {
    if let Some(message) = &descriptor.error {
        return Widget::Notice(Notice::Error(message.clone()));
    }

    let tag = descriptor.component_type.as_deref();
    if tag == Some(ERROR_TAG) {
        return Widget::Notice(Notice::Error(GENERIC_WIDGET_ERROR.to_string()));
    }

    let Some(component) = tag.and_then(ComponentType::from_tag) else {
        tracing::debug!(
            widget_id = %descriptor.widget_id,
            component_type = ?tag,
            "Unrecognized component type"
        );
        return Widget::Notice(Notice::UnknownType(tag.map(str::to_string)));
    };

    let records = descriptor.records();
    let Some(first) = records.first() else {
        return Widget::NoData;
    };

    match component {
        ComponentType::StatCard => {
            Widget::StatCard(StatCard::build(descriptor, first, options.print_mode))
        }
        ComponentType::Table => Widget::Table(DataTable::from_records(
            &records,
            descriptor.columns.as_deref(),
        )),
        ComponentType::Donut => Widget::Donut(DonutChart::from_records(&records)),
        ComponentType::Area | ComponentType::Bar | ComponentType::Line => {
            let kind = component.chart_kind().unwrap_or(ChartKind::Line);
            let chart = SeriesChart::from_records(
                kind,
                descriptor.data_key.as_deref(),
                &descriptor.series,
                &records,
            );
            if chart.series.is_empty() || chart.is_blank() {
                Widget::NoData
            } else {
                Widget::Series(chart)
            }
        }
    }
}
