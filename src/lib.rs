//! # Launchboard Backend
//!
//! Backend for an interactive dashboard over a fixed table of rocket launch
//! records. A frontend renders a launch-site dropdown, a payload-mass range
//! slider and two charts; on every input change it re-requests the derived
//! chart specifications from this backend via the REST API.
//!
//! ## Features
//!
//! - **Data Loading**: Parse launch records from CSV into an immutable
//!   in-memory dataset
//! - **Site Catalog**: Distinct launch sites plus the "All Sites" option for
//!   the dropdown
//! - **Aggregation**: Launch-outcome counts, per site or success-vs-failure
//! - **Filtering**: Payload-mass range and site filtering over the dataset
//! - **Chart Specs**: Declarative, renderer-agnostic pie and scatter chart
//!   descriptions for the frontend
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`dataset`]: Launch records, the immutable dataset and the CSV loader
//! - [`services`]: Pure filtering, aggregation and chart-spec builders
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Server configuration from environment variables
//!
//! Every derived view is a pure function of the immutable dataset plus the
//! current inputs, so request handling needs no locking and no mutable state.

pub mod config;

pub mod dataset;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use dataset::{Dataset, DatasetError, LaunchRecord, Outcome, PayloadBounds};
pub use services::{
    aggregate_outcomes, build_outcome_pie, build_payload_scatter, build_site_options,
    distinct_sites, filter_by_payload, ChartSpec, OutcomeCount, PayloadRange, SiteOption,
    SiteSelection,
};
