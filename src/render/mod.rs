//! HTML rendering
//!
//! Server-side markup for the dashboard page: the page shell, one card per
//! widget and inline SVG charts. Built on `maud`, so every string coming
//! from a plan is escaped.

pub mod chart;
pub mod page;
pub mod style;
pub mod widgets;

pub use page::{
    dismiss_overlay, loading_overlay, page_body, page_close, page_open, render_document,
};
pub use widgets::{widget_body, widget_card};

/// Format a number for labels: integers without decimals, others with up
/// to two
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(18.5), "18.5");
        assert_eq!(format_number(2.0 / 3.0), "0.67");
        assert_eq!(format_number(0.001), "0");
        assert_eq!(format_number(f64::NAN), "");
    }
}
