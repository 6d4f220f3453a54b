//! Chart rendering
//!
//! Series and donut charts as inline SVG. Geometry is kept in small pure
//! functions so it can be tested without parsing markup.

use maud::{html, Markup};
use std::f64::consts::PI;

use crate::widget::{resolve_color, ChartKind, DonutChart, SeriesChart};

use super::format_number;

/// Drawing area of a series chart, in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 280.0,
            margin_left: 56.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 36.0,
        }
    }
}

impl Plot {
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    pub fn bottom(&self) -> f64 {
        self.margin_top + self.inner_height()
    }

    /// Center x of category `idx` out of `count` equal bands
    pub fn x_center(&self, idx: usize, count: usize) -> f64 {
        let band = self.inner_width() / count.max(1) as f64;
        self.margin_left + band * (idx as f64 + 0.5)
    }

    /// Left edge and width of the bar for `series_idx` inside category `idx`
    pub fn bar(
        &self,
        idx: usize,
        count: usize,
        series_idx: usize,
        series_count: usize,
    ) -> (f64, f64) {
        let band = self.inner_width() / count.max(1) as f64;
        let group = band * 0.8;
        let width = group / series_count.max(1) as f64;
        let left = self.margin_left + band * idx as f64 + (band - group) / 2.0;
        (left + width * series_idx as f64, width)
    }

    /// y coordinate of `value` on the `[lo, hi]` axis
    pub fn y(&self, value: f64, lo: f64, hi: f64) -> f64 {
        let span = if hi > lo { hi - lo } else { 1.0 };
        self.margin_top + (hi - value) / span * self.inner_height()
    }
}

/// Y axis bounds with 10% headroom; bars and areas always include zero
pub fn value_axis(range: Option<(f64, f64)>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = range.unwrap_or((0.0, 1.0));

    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let span = hi - lo;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };
    if !(include_zero && lo == 0.0) {
        lo -= padding;
    }
    if !(include_zero && hi == 0.0) {
        hi += padding;
    }

    (lo, hi)
}

/// Polyline point lists, one per unbroken run of values
pub fn line_runs(plot: &Plot, values: &[Option<f64>], lo: f64, hi: f64) -> Vec<String> {
    let count = values.len();
    let mut runs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push(point(plot.x_center(idx, count), plot.y(*v, lo, hi))),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current).join(" ")),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current.join(" "));
    }

    runs
}

/// Closed area path across every present value (gaps are bridged)
pub fn area_path(plot: &Plot, values: &[Option<f64>], lo: f64, hi: f64) -> Option<String> {
    let count = values.len();
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(idx, v)| v.map(|v| (plot.x_center(idx, count), plot.y(v, lo, hi))))
        .collect();

    let (first, last) = (points.first()?, points.last()?);
    let baseline = plot.y(0.0_f64.max(lo).min(hi), lo, hi);

    let mut path = format!("M {} ", point(first.0, baseline));
    for (x, y) in &points {
        path.push_str(&format!("L {} ", point(*x, *y)));
    }
    path.push_str(&format!("L {} Z", point(last.0, baseline)));

    Some(path)
}

/// Annular sector between two fractions of a full turn, starting at 12 o'clock
pub fn donut_arc(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    if end - start >= 0.9999 {
        // A single arc cannot close on itself; draw two halves
        let mid = start + (end - start) / 2.0;
        return format!(
            "{} {}",
            donut_arc(cx, cy, outer, inner, start, mid),
            donut_arc(cx, cy, outer, inner, mid, end)
        );
    }

    let polar = |r: f64, frac: f64| {
        let angle = frac * 2.0 * PI - PI / 2.0;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let large = if end - start > 0.5 { 1 } else { 0 };

    let (ox1, oy1) = polar(outer, start);
    let (ox2, oy2) = polar(outer, end);
    let (ix2, iy2) = polar(inner, end);
    let (ix1, iy1) = polar(inner, start);

    format!(
        "M {} A {} {} 0 {} 1 {} L {} A {} {} 0 {} 0 {} Z",
        point(ox1, oy1),
        fmt(outer),
        fmt(outer),
        large,
        point(ox2, oy2),
        point(ix2, iy2),
        fmt(inner),
        fmt(inner),
        large,
        point(ix1, iy1),
    )
}

fn point(x: f64, y: f64) -> String {
    format!("{},{}", fmt(x), fmt(y))
}

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

/// Area, bar or line chart
pub fn series_chart(chart: &SeriesChart) -> Markup {
    let plot = Plot::default();
    let include_zero = matches!(chart.kind, ChartKind::Bar | ChartKind::Area);
    let (lo, hi) = value_axis(chart.value_range(), include_zero);
    let count = chart.categories.len();

    html! {
        div.chart {
            svg.series-chart viewBox=(format!("0 0 {} {}", plot.width, plot.height))
                role="img" aria-label=(format!("{} chart", chart.kind.as_str())) {
                // Horizontal grid lines with value labels
                @for i in 0..=5 {
                    @let y = plot.margin_top + (i as f64 / 5.0) * plot.inner_height();
                    @let value = hi - (i as f64 / 5.0) * (hi - lo);
                    line.grid x1=(fmt(plot.margin_left)) y1=(fmt(y))
                        x2=(fmt(plot.width - plot.margin_right)) y2=(fmt(y)) {}
                    text.axis-label x=(fmt(plot.margin_left - 6.0)) y=(fmt(y + 4.0))
                        text-anchor="end" { (format_number(value)) }
                }

                @for (idx, category) in chart.categories.iter().enumerate() {
                    text.axis-label x=(fmt(plot.x_center(idx, count))) y=(fmt(plot.height - 12.0))
                        text-anchor="middle" { (category) }
                }

                @for (series_idx, series) in chart.series.iter().enumerate() {
                    @let color = resolve_color(&series.color);
                    @match chart.kind {
                        ChartKind::Bar => {
                            @for (idx, value) in series.values.iter().enumerate() {
                                @if let Some(v) = value {
                                    @let series_count = chart.series.len();
                                    @let (x, w) = plot.bar(idx, count, series_idx, series_count);
                                    @let (y0, y1) = (plot.y(0.0, lo, hi), plot.y(*v, lo, hi));
                                    rect x=(fmt(x)) y=(fmt(y0.min(y1))) width=(fmt(w))
                                        height=(fmt((y0 - y1).abs())) fill=(color) {
                                        title { (series.label) ": " (format_number(*v)) }
                                    }
                                }
                            }
                        }
                        ChartKind::Area => {
                            @if let Some(d) = area_path(&plot, &series.values, lo, hi) {
                                path d=(d) fill=(color) fill-opacity="0.2" stroke="none" {}
                            }
                            // Area charts connect across gaps
                            polyline points=(bridged_points(&plot, &series.values, lo, hi))
                                fill="none" stroke=(color) stroke-width="2" {}
                        }
                        ChartKind::Line => {
                            @for run in line_runs(&plot, &series.values, lo, hi) {
                                polyline points=(run) fill="none" stroke=(color) stroke-width="2" {}
                            }
                            @for (idx, value) in series.values.iter().enumerate() {
                                @if let Some(v) = value {
                                    circle cx=(fmt(plot.x_center(idx, count)))
                                        cy=(fmt(plot.y(*v, lo, hi))) r="3" fill=(color) {
                                        title { (series.label) ": " (format_number(*v)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            (legend(chart.series.iter().map(|s| (s.label.as_str(), s.color.as_str()))))
        }
    }
}

fn bridged_points(plot: &Plot, values: &[Option<f64>], lo: f64, hi: f64) -> String {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .filter_map(|(idx, v)| v.map(|v| point(plot.x_center(idx, count), plot.y(v, lo, hi))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Donut chart with a "Total" center label
pub fn donut_chart(chart: &DonutChart) -> Markup {
    let (cx, cy, outer, inner) = (120.0, 120.0, 100.0, 64.0);
    let total = chart.total();

    let mut start = 0.0;
    let mut arcs = Vec::new();
    for (idx, segment) in chart.segments.iter().enumerate() {
        let share = chart.share(idx);
        if share > 0.0 {
            arcs.push((
                donut_arc(cx, cy, outer, inner, start, start + share),
                resolve_color(&segment.color),
                segment,
            ));
        }
        start += share;
    }

    html! {
        div.chart.donut {
            svg.donut-chart viewBox="0 0 240 240" role="img" aria-label="donut chart" {
                @if arcs.is_empty() {
                    circle.donut-empty cx=(fmt(cx)) cy=(fmt(cy)) r=(fmt((outer + inner) / 2.0))
                        fill="none" stroke-width=(fmt(outer - inner)) {}
                }
                @for (d, color, segment) in &arcs {
                    path d=(d) fill=(color) stroke="#fff" stroke-width="2" {
                        title { (segment.name) ": " (format_number(segment.value)) }
                    }
                }
                text.donut-label x=(fmt(cx)) y=(fmt(cy - 6.0)) text-anchor="middle" { "Total" }
                text.donut-total x=(fmt(cx)) y=(fmt(cy + 16.0)) text-anchor="middle" {
                    (format_number(total))
                }
            }
            ul.legend {
                @for (idx, segment) in chart.segments.iter().enumerate() {
                    li {
                        @let swatch = format!("background: {}", resolve_color(&segment.color));
                        span.swatch style=(swatch) {}
                        (segment.name) " "
                        span.dimmed {
                            (format_number(segment.value))
                            " (" (format!("{:.1}", chart.share(idx) * 100.0)) "%)"
                        }
                    }
                }
            }
        }
    }
}

fn legend<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> Markup {
    html! {
        ul.legend {
            @for (label, color) in entries {
                li {
                    span.swatch style=(format!("background: {}", resolve_color(color))) {}
                    (label)
                }
            }
        }
    }
}
