//! Widget markup
//!
//! One card per descriptor. Whatever a widget dispatches to, the result is
//! confined to its own card.

use maud::{html, Markup};

use crate::plan::WidgetDescriptor;
use crate::widget::{
    dispatch, resolve_color, Cell, DataTable, Notice, RenderOptions, StatCard, Trend, Widget,
};

use super::chart::{donut_chart, series_chart};

/// Grid cell + card for one descriptor
pub fn widget_card(descriptor: &WidgetDescriptor, options: &RenderOptions) -> Markup {
    let widget = dispatch(descriptor, options);
    let span = descriptor.layout.effective_span();

    html! {
        div class=(format!("col span-{}", span)) data-widget-id=(descriptor.widget_id)
            data-widget-kind=(widget.kind()) {
            div.card {
                @if !descriptor.title.is_empty() {
                    h5.card-title { (descriptor.title) }
                }
                (widget_body(&widget))
            }
        }
    }
}

/// Body of a card for an already dispatched widget
pub fn widget_body(widget: &Widget) -> Markup {
    match widget {
        Widget::Notice(notice @ Notice::Error(_)) => html! {
            div.alert.alert-error role="alert" {
                strong { "Error" }
                p { (notice.message()) }
            }
        },
        Widget::Notice(notice @ Notice::UnknownType(_)) => html! {
            div.alert.alert-muted { (notice.message()) }
        },
        Widget::NoData => html! {
            p.no-data { "No data" }
        },
        Widget::StatCard(card) => stat_card(card),
        Widget::Table(table) => html! {
            div.table-wrap { (data_table(table, "data-table bordered")) }
        },
        Widget::Donut(chart) => donut_chart(chart),
        Widget::Series(chart) => series_chart(chart),
    }
}

fn stat_card(card: &StatCard) -> Markup {
    let color = resolve_color(&card.badge_color);

    html! {
        div.stat {
            div.stat-row {
                span.stat-value { (card.value) }
                @if card.trend.is_some() || card.trend_label.is_some() {
                    span.badge style=(format!("color: {0}; border-color: {0}", color)) {
                        @if let Some(trend) = card.trend {
                            (trend_arrow(trend))
                        }
                        @if let Some(label) = &card.trend_label {
                            " " (label)
                        }
                    }
                }
            }
            @if let Some(description) = &card.description {
                p.stat-description { (description) }
            }
            @if let Some(details) = &card.details {
                hr;
                details.stat-details open[details.toggle.is_open()] {
                    summary { "Details" }
                    (data_table(&details.table, "data-table compact striped"))
                }
            }
        }
    }
}

fn data_table(table: &DataTable, class: &str) -> Markup {
    html! {
        table class=(class) {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell_content(cell)) }
                        }
                    }
                }
            }
        }
    }
}

fn cell_content(cell: &Cell) -> Markup {
    match cell {
        Cell::Text(text) => html! { (text) },
        Cell::Trend(Some(trend)) => trend_icon(*trend),
        Cell::Trend(None) => html! {},
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↗",
        Trend::Down => "↘",
    }
}

fn trend_icon(trend: Trend) -> Markup {
    html! {
        span class=(format!("trend trend-{}", trend.as_str())) title=(trend.as_str()) {
            (trend_arrow(trend))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_html(descriptor: &WidgetDescriptor, options: &RenderOptions) -> String {
        widget_card(descriptor, options).into_string()
    }

    #[test]
    fn test_error_notice_markup() {
        let html = card_html(
            &WidgetDescriptor::new("w1", "table")
                .title("Ventas")
                .data(json!([{"a": 1}]))
                .error("Consulta fallida"),
            &RenderOptions::default(),
        );

        assert!(html.contains("alert-error"));
        assert!(html.contains("Consulta fallida"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_unknown_type_markup() {
        let html = card_html(&WidgetDescriptor::new("w1", "radar"), &RenderOptions::default());
        assert!(html.contains("Unrecognized component type: radar"));
    }

    #[test]
    fn test_no_data_markup() {
        let html = card_html(&WidgetDescriptor::new("w1", "donut"), &RenderOptions::default());
        assert!(html.contains("No data"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_span_class() {
        let html = card_html(
            &WidgetDescriptor::new("w1", "table").span(4).data(json!([{"a": 1}])),
            &RenderOptions::default(),
        );
        assert!(html.contains("col span-4"));
        assert!(html.contains(r#"data-widget-id="w1""#));
    }

    #[test]
    fn test_table_markup() {
        let html = card_html(
            &WidgetDescriptor::new("w1", "table").data(json!([
                {"cliente": "A", "reportes": 3},
                {"cliente": "B", "reportes": 5}
            ])),
            &RenderOptions::default(),
        );

        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_stat_card_details_collapsed_by_default() {
        let descriptor = WidgetDescriptor::new("w1", "statCard")
            .data(json!([{"value": "94%", "trend": "up"}]))
            .details(json!([{"region": "Norte", "trend": "down"}]));

        let html = card_html(&descriptor, &RenderOptions::default());
        assert!(html.contains("94%"));
        assert!(html.contains("<details class=\"stat-details\">"));
        assert!(html.contains("trend-down"));

        let printed = card_html(&descriptor, &RenderOptions::print());
        assert!(printed.contains("<details class=\"stat-details\" open>"));
    }

    #[test]
    fn test_stat_card_without_trend_has_no_badge() {
        let html = card_html(
            &WidgetDescriptor::new("w1", "statCard").data(json!([{"value": 12}])),
            &RenderOptions::default(),
        );
        assert!(html.contains("12"));
        assert!(!html.contains("badge"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_descriptor_text_is_escaped() {
        let html = card_html(
            &WidgetDescriptor::new("w1", "table")
                .title("<script>alert(1)</script>")
                .data(json!([{"a": "<b>bold</b>"}])),
            &RenderOptions::default(),
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
