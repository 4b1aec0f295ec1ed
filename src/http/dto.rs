//! Data Transfer Objects for the HTTP API.
//!
//! The chart and catalog types already derive Serialize/Deserialize in the
//! service layer and are re-exported here; this module adds the
//! request/response envelopes specific to the REST surface.

use serde::{Deserialize, Serialize};

use crate::dataset::PayloadBounds;

// Re-export existing DTOs that are already serializable
pub use crate::services::{
    // Charts
    ChartSpec,
    OutcomeCount,
    PieChart,
    PieSlice,
    ScatterChart,
    ScatterPoint,
    // Site catalog
    SiteOption,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}

/// Dropdown options response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteOptionsResponse {
    /// Dropdown entries, "All Sites" first
    pub options: Vec<SiteOption>,
    /// Total number of entries including the sentinel
    pub total: usize,
}

/// Slider bounds response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRangeResponse {
    /// Smallest payload mass observed in the dataset
    pub min_payload: f64,
    /// Largest payload mass observed in the dataset
    pub max_payload: f64,
}

impl From<PayloadBounds> for PayloadRangeResponse {
    fn from(bounds: PayloadBounds) -> Self {
        Self {
            min_payload: bounds.min,
            max_payload: bounds.max,
        }
    }
}

/// Query parameters for the outcome pie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Site selection wire value ("ALL" when omitted)
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the payload scatter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Site selection wire value ("ALL" when omitted)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (dataset minimum when omitted)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound (dataset maximum when omitted)
    #[serde(default)]
    pub high: Option<f64>,
}
