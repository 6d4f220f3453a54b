//! Data Transfer Objects
//!
//! JSON bodies returned by the API and the inspection tooling.

use serde::{Deserialize, Serialize};

use crate::plan::WidgetDescriptor;
use crate::widget::{dispatch, RenderOptions};

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Application version
    pub version: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Where plans are fetched from
    pub source: String,
    /// Widgets in the fallback plan
    pub fixture_widgets: usize,
}

// ============================================
// INSPECTION DTOs
// ============================================

/// How one descriptor dispatches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSummary {
    pub widget_id: String,
    pub component_type: Option<String>,
    pub span: u8,
    /// Dispatch outcome (`statCard`, `no-data`, `error`, ...)
    pub outcome: String,
    pub detail: String,
}

impl WidgetSummary {
    pub fn from_descriptor(descriptor: &WidgetDescriptor, options: &RenderOptions) -> Self {
        let widget = dispatch(descriptor, options);

        Self {
            widget_id: descriptor.widget_id.clone(),
            component_type: descriptor.component_type.clone(),
            span: descriptor.layout.effective_span(),
            outcome: widget.kind().to_string(),
            detail: widget.summary(),
        }
    }
}
