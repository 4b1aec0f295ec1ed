//! Pure derived-view services over the launch dataset.
//!
//! Everything here is a pure function of the immutable [`crate::Dataset`]
//! plus the current user inputs (site selection, payload range). The HTTP
//! layer calls these on every request; they can equally be driven from tests
//! without any server running.

pub mod catalog;

pub mod charts;

pub mod outcomes;

pub mod payload;

pub use catalog::{build_site_options, distinct_sites, SiteOption, SiteSelection};
pub use charts::{
    build_outcome_pie, build_payload_scatter, ChartSpec, PieChart, PieSlice, ScatterChart,
    ScatterPoint,
};
pub use outcomes::{aggregate_outcomes, OutcomeCount};
pub use payload::{filter_by_payload, PayloadRange};
