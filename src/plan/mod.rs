//! Dashboard Plan
//!
//! The JSON document describing one dashboard display: titles plus an
//! ordered list of widget descriptors. Plans are read-only once loaded.

mod fixture;
mod types;

pub use fixture::{bundled_plan, fallback_plan, plan_from_file};
pub use types::{
    display_value, numeric_value, DashboardPlan, Layout, Record, SeriesSpec, WidgetDescriptor,
    GRID_COLUMNS,
};
