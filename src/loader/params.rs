//! Page address parameters
//!
//! `report_id` selects the plan to fetch; `print_mode=true` asks widgets for
//! their expanded presentation.

use serde::Deserialize;

use crate::widget::RenderOptions;

/// Parameters read from the page address
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportParams {
    #[serde(default)]
    pub report_id: Option<String>,

    #[serde(default)]
    pub print_mode: Option<String>,
}

impl ReportParams {
    /// Parameters for one report
    pub fn for_report(report_id: impl Into<String>) -> Self {
        Self {
            report_id: Some(report_id.into()),
            print_mode: None,
        }
    }

    pub fn with_print_mode(mut self, enabled: bool) -> Self {
        self.print_mode = enabled.then(|| "true".to_string());
        self
    }

    /// Report identifier; blank values count as absent
    pub fn report_id(&self) -> Option<&str> {
        self.report_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Print mode is on only for the literal value `"true"`
    pub fn is_print_mode(&self) -> bool {
        self.print_mode.as_deref() == Some("true")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            print_mode: self.is_print_mode(),
        }
    }

    /// Parse a query string (`report_id=..&print_mode=..`, leading `?` optional).
    /// The first occurrence of a key wins.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);

            match key.as_str() {
                "report_id" if params.report_id.is_none() => params.report_id = Some(value),
                "print_mode" if params.print_mode.is_none() => params.print_mode = Some(value),
                _ => {}
            }
        }

        params
    }

    /// Parse the query part of a full page address
    pub fn from_address(address: &str) -> Self {
        let without_fragment = address.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::from_query(query),
            None => Self::default(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}
