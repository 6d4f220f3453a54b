//! Page shell
//!
//! The document is emitted in pieces so a handler can flush the loading
//! overlay before the plan arrives: [`page_open`], [`loading_overlay`], then
//! once the load settles [`dismiss_overlay`], [`page_body`] and
//! [`page_close`]. [`render_document`] produces the same page in one go.

use maud::{html, Markup, PreEscaped};

use crate::loader::LoadState;
use crate::plan::DashboardPlan;
use crate::widget::RenderOptions;

use super::style::STYLESHEET;
use super::widgets::widget_card;

/// Title used until a plan provides one
pub const DEFAULT_TITLE: &str = "Dashboard";

/// Id of the loading overlay element
pub const OVERLAY_ID: &str = "loading-overlay";

/// Doctype, head and the opening `<body>` tag
pub fn page_open(title: &str, options: &RenderOptions) -> String {
    let head = html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        style { (PreEscaped(STYLESHEET)) }
    };

    let body_class = if options.print_mode { "print" } else { "screen" };
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>{}</head><body class=\"{}\">",
        head.into_string(),
        body_class
    )
}

/// Closing tags matching [`page_open`]
pub fn page_close() -> &'static str {
    "</body></html>"
}

/// Full-page overlay shown while the plan is pending
pub fn loading_overlay() -> Markup {
    html! {
        div id=(OVERLAY_ID) role="status" aria-live="polite" {
            div.spinner {}
        }
    }
}

/// Script removing the overlay once the load has settled
pub fn dismiss_overlay() -> Markup {
    html! {
        script {
            (PreEscaped(format!(
                "(function(){{var o=document.getElementById('{}');if(o){{o.remove();}}}})();",
                OVERLAY_ID
            )))
        }
    }
}

/// Main content for a load state
pub fn page_body(state: &LoadState, options: &RenderOptions) -> Markup {
    match state {
        LoadState::Pending => loading_overlay(),
        LoadState::Failed(message) => html! {
            main.load-failed {
                div.alert.alert-error role="alert" {
                    strong { "Error" }
                    p { "Failed to load dashboard: " (message) }
                }
            }
        },
        LoadState::Ready(plan) => dashboard(plan, options),
    }
}

fn dashboard(plan: &DashboardPlan, options: &RenderOptions) -> Markup {
    html! {
        main.dashboard {
            header.page-header {
                h1 { (plan.global_title) }
                @if !plan.global_subtitle.is_empty() {
                    p { (plan.global_subtitle) }
                }
            }
            div.widget-grid {
                @for descriptor in &plan.dashboard_plan {
                    (widget_card(descriptor, options))
                }
            }
            @if options.print_mode {
                footer.page-footer {
                    "Generated " (chrono::Local::now().format("%Y-%m-%d %H:%M").to_string())
                }
            }
        }
    }
}

/// Page title for a load state
pub fn page_title(state: &LoadState) -> &str {
    state
        .plan()
        .map(|plan| plan.global_title.as_str())
        .filter(|title| !title.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

/// Whole document for a settled (or pending) state
pub fn render_document(state: &LoadState, options: &RenderOptions) -> String {
    let mut document = page_open(page_title(state), options);
    document.push_str(&page_body(state, options).into_string());
    document.push_str(page_close());
    document
}
