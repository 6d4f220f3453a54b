//! Plan data types
//!
//! Wire types for the dashboard plan document. Per-widget payloads are kept as
//! loose JSON so a malformed widget degrades to its own placeholder instead of
//! rejecting the whole plan.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One data record (a JSON object, keys in document order)
pub type Record = Map<String, Value>;

/// Full grid width in columns
pub const GRID_COLUMNS: u8 = 12;

/// Top-level dashboard document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPlan {
    /// Page title
    #[serde(default)]
    pub global_title: String,
    /// Page subtitle
    #[serde(default)]
    pub global_subtitle: String,
    /// Ordered widget descriptors
    #[serde(default, deserialize_with = "widgets_per_entry")]
    pub dashboard_plan: Vec<WidgetDescriptor>,
}

impl DashboardPlan {
    /// Parse a plan from a JSON string
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Number of widgets in the plan
    pub fn widget_count(&self) -> usize {
        self.dashboard_plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashboard_plan.is_empty()
    }
}

/// Layout hint for a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Width in grid columns on medium and larger viewports
    #[serde(default = "default_span", deserialize_with = "lenient_span")]
    pub span: u8,
}

fn default_span() -> u8 {
    GRID_COLUMNS
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            span: default_span(),
        }
    }
}

impl Layout {
    /// Span clamped to `1..=12`
    pub fn effective_span(&self) -> u8 {
        self.span.clamp(1, GRID_COLUMNS)
    }

    /// Layout from a raw `span` value; non-numbers fall back to full width
    pub fn from_span_value(value: &Value) -> Self {
        let span = match numeric_value(Some(value)) {
            Some(span) => span.round().clamp(1.0, f64::from(GRID_COLUMNS)) as u8,
            None => GRID_COLUMNS,
        };
        Self { span }
    }
}

/// One plotted series of a chart widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Record field holding this series' values
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub name: String,
    /// Optional display color (`"indigo.6"`, `"#ff9800"`, ...)
    #[serde(default)]
    pub color: Option<String>,
    /// Optional legend label, defaults to `name`
    #[serde(default)]
    pub label: Option<String>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Legend label for this series
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// One entry of the dashboard plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable identifier (string or number on the wire)
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub widget_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Discriminant selecting the renderer
    #[serde(default)]
    pub component_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,

    /// Primary payload
    #[serde(default)]
    pub data: Option<Value>,

    /// Category field for chart widgets
    #[serde(default, rename = "dataKey", alias = "data_key")]
    pub data_key: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub series: Vec<SeriesSpec>,

    /// Explicit column order for tables
    #[serde(default, deserialize_with = "column_list")]
    pub columns: Option<Vec<String>>,

    /// Secondary dataset for stat cards
    #[serde(default)]
    pub details_data: Option<Value>,

    #[serde(default, deserialize_with = "column_list")]
    pub details_columns: Option<Vec<String>>,

    /// Explicit error reported by the plan producer
    #[serde(default)]
    pub error: Option<String>,
}

impl WidgetDescriptor {
    /// Create a descriptor with an id and a component type
    pub fn new(widget_id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            component_type: Some(component_type.into()),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn span(mut self, span: u8) -> Self {
        self.layout = Layout { span };
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    pub fn series(mut self, series: Vec<SeriesSpec>) -> Self {
        self.series = series;
        self
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details_data = Some(details);
        self
    }

    pub fn details_columns(mut self, columns: &[&str]) -> Self {
        self.details_columns = Some(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Convert one raw plan entry. An entry that does not fit the descriptor
    /// shape keeps its id, title, type and span and carries the decode error,
    /// so it renders as an error notice in its own card.
    pub fn from_entry(entry: &Value) -> Self {
        match WidgetDescriptor::deserialize(entry) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                let widget_id = display_value(entry.get("widget_id"));
                tracing::warn!(widget_id = %widget_id, "Invalid widget descriptor: {}", e);

                Self {
                    widget_id,
                    title: entry
                        .get("title")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    component_type: entry
                        .get("component_type")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    layout: entry
                        .get("layout")
                        .and_then(|layout| layout.get("span"))
                        .map(Layout::from_span_value)
                        .unwrap_or_default(),
                    error: Some(format!("Invalid widget: {}", e)),
                    ..Default::default()
                }
            }
        }
    }

    /// Object records of the primary payload; non-array payloads yield nothing
    pub fn records(&self) -> Vec<&Record> {
        records_of(self.data.as_ref())
    }

    /// Object records of the details payload
    pub fn detail_records(&self) -> Vec<&Record> {
        records_of(self.details_data.as_ref())
    }
}

fn records_of(value: Option<&Value>) -> Vec<&Record> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn scalar_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_span<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Layout::from_span_value(&value).span)
}

/// Column names from an array; scalars are stringified, anything else is no list
fn column_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| display_value(Some(item)))
                .collect(),
        ),
        _ => None,
    })
}

fn widgets_per_entry<'de, D>(deserializer: D) -> Result<Vec<WidgetDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.iter().map(WidgetDescriptor::from_entry).collect())
}

/// Render a JSON scalar the way a table cell shows it
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read a JSON value as a number, accepting numeric strings
pub fn numeric_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_plan() {
        let plan = DashboardPlan::from_json(
            r#"{"global_title": "KOF", "global_subtitle": "Resumen", "dashboard_plan": []}"#,
        )
        .unwrap();

        assert_eq!(plan.global_title, "KOF");
        assert_eq!(plan.global_subtitle, "Resumen");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let plan = DashboardPlan::from_json("{}").unwrap();
        assert_eq!(plan.global_title, "");
        assert_eq!(plan.widget_count(), 0);
    }

    #[test]
    fn test_numeric_widget_id() {
        let plan = DashboardPlan::from_json(
            r#"{"dashboard_plan": [{"widget_id": 7, "component_type": "table"}]}"#,
        )
        .unwrap();

        assert_eq!(plan.dashboard_plan[0].widget_id, "7");
    }

    #[test]
    fn test_chart_fields() {
        let widget: WidgetDescriptor = serde_json::from_value(json!({
            "widget_id": "w1",
            "component_type": "area",
            "layout": {"span": 8},
            "dataKey": "month",
            "series": [{"name": "sales", "color": "indigo.6"}],
            "data": [{"month": "Jan", "sales": 10}]
        }))
        .unwrap();

        assert_eq!(widget.data_key.as_deref(), Some("month"));
        assert_eq!(widget.series[0].color.as_deref(), Some("indigo.6"));
        assert_eq!(widget.layout.effective_span(), 8);
        assert_eq!(widget.records().len(), 1);
    }

    #[test]
    fn test_span_is_clamped() {
        assert_eq!(Layout { span: 0 }.effective_span(), 1);
        assert_eq!(Layout { span: 40 }.effective_span(), 12);
        assert_eq!(Layout::default().effective_span(), 12);
    }

    fn plan_with_sibling(bad: Value) -> DashboardPlan {
        let input = json!({
            "global_title": "KOF",
            "dashboard_plan": [
                {"widget_id": "ok", "component_type": "table", "data": [{"a": 1}]},
                bad
            ]
        });
        DashboardPlan::from_json(&input.to_string()).unwrap()
    }

    #[test]
    fn test_out_of_range_spans_are_clamped_on_read() {
        let spans = [
            (json!(300), 12),
            (json!(-1), 1),
            (json!(0), 1),
            (json!(6.5), 7),
            (json!("4"), 4),
            (json!(null), 12),
            (json!("wide"), 12),
            (json!([3]), 12),
        ];

        for (span, expected) in spans {
            let plan = plan_with_sibling(json!({
                "widget_id": "w", "component_type": "bar", "layout": {"span": span.clone()}
            }));
            assert_eq!(plan.widget_count(), 2);
            assert_eq!(plan.dashboard_plan[1].layout.span, expected, "span {}", span);
            assert!(plan.dashboard_plan[1].error.is_none());
        }
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let plan = plan_with_sibling(json!({
            "widget_id": "w",
            "component_type": "line",
            "title": null,
            "layout": null,
            "series": null,
            "columns": null,
            "details_columns": null
        }));

        let widget = &plan.dashboard_plan[1];
        assert_eq!(plan.dashboard_plan[0].widget_id, "ok");
        assert_eq!(widget.title, "");
        assert_eq!(widget.layout, Layout::default());
        assert!(widget.series.is_empty());
        assert!(widget.columns.is_none());
        assert!(widget.details_columns.is_none());
        assert!(widget.error.is_none());
    }

    #[test]
    fn test_loose_column_lists() {
        let widget = WidgetDescriptor::from_entry(&json!({
            "component_type": "table",
            "columns": ["a", 2, null],
            "details_columns": "a,b"
        }));

        assert_eq!(widget.columns, Some(vec!["a".to_string(), "2".to_string()]));
        assert!(widget.details_columns.is_none());
    }

    #[test]
    fn test_series_without_name() {
        let widget = WidgetDescriptor::from_entry(&json!({
            "component_type": "bar",
            "series": [{"color": "red"}, {"name": 7}]
        }));

        assert_eq!(widget.series[0].name, "");
        assert_eq!(widget.series[0].color.as_deref(), Some("red"));
        assert_eq!(widget.series[1].name, "7");
    }

    #[test]
    fn test_undecodable_entry_becomes_widget_error() {
        let plan = plan_with_sibling(json!({
            "widget_id": 9,
            "title": "Ventas",
            "component_type": "bar",
            "layout": {"span": 4},
            "description": {"nested": true}
        }));

        assert_eq!(plan.widget_count(), 2);
        assert!(plan.dashboard_plan[0].error.is_none());
        assert_eq!(plan.dashboard_plan[0].records().len(), 1);

        let widget = &plan.dashboard_plan[1];
        assert_eq!(widget.widget_id, "9");
        assert_eq!(widget.title, "Ventas");
        assert_eq!(widget.component_type.as_deref(), Some("bar"));
        assert_eq!(widget.layout.span, 4);
        assert!(widget.error.as_deref().unwrap().starts_with("Invalid widget: "));
    }

    #[test]
    fn test_non_object_entry_becomes_widget_error() {
        let plan = plan_with_sibling(json!("oops"));
        assert_eq!(plan.widget_count(), 2);
        assert!(plan.dashboard_plan[1].error.is_some());
        assert_eq!(plan.dashboard_plan[1].layout, Layout::default());
    }

    #[test]
    fn test_null_widget_list_is_empty() {
        let plan = DashboardPlan::from_json(r#"{"dashboard_plan": null}"#).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_malformed_data_yields_no_records() {
        let widget = WidgetDescriptor::new("w", "table").data(json!("not a list"));
        assert!(widget.records().is_empty());

        let widget = WidgetDescriptor::new("w", "table").data(json!([1, {"a": 1}, "x"]));
        assert_eq!(widget.records().len(), 1);
    }

    #[test]
    fn test_record_keys_keep_document_order() {
        let widget = WidgetDescriptor::new("w", "table")
            .data(json!([{"zeta": 1, "alpha": 2, "mid": 3}]));
        let keys: Vec<&String> = widget.records()[0].keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_display_and_numeric_values() {
        assert_eq!(display_value(Some(&json!("abc"))), "abc");
        assert_eq!(display_value(Some(&json!(12.5))), "12.5");
        assert_eq!(display_value(Some(&json!(null))), "");
        assert_eq!(display_value(None), "");

        assert_eq!(numeric_value(Some(&json!(3))), Some(3.0));
        assert_eq!(numeric_value(Some(&json!(" 4.5 "))), Some(4.5));
        assert_eq!(numeric_value(Some(&json!("n/a"))), None);
        assert_eq!(numeric_value(Some(&json!(true))), None);
    }
}
