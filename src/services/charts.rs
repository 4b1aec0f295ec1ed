//! Declarative chart specifications for the presentation surface.
//!
//! The frontend owns rendering; it receives these specs as JSON and feeds
//! them to its plotting library. An empty input produces an empty chart
//! (zero slices/points), which the frontend must render without failure.

use serde::{Deserialize, Serialize};

use crate::dataset::LaunchRecord;
use crate::services::catalog::SiteSelection;
use crate::services::outcomes::OutcomeCount;

/// Title of the all-sites proportion chart.
pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches by Site";
/// Title of the payload scatter chart.
pub const SCATTER_TITLE: &str = "Payload vs. Launch Success";
/// X-axis label of the payload scatter chart.
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
/// Y-axis label of the payload scatter chart.
pub const SCATTER_Y_LABEL: &str = "Launch Outcome (1=Success, 0=Failure)";

/// A renderer-agnostic chart description, tagged by chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kilograms
    pub x: f64,
    /// Outcome value (1 = success, 0 = failure)
    pub y: u8,
    /// Color category, the booster version category
    pub category: String,
}

/// Build the outcome proportion pie: one slice per aggregated count. The
/// title reflects whether the counts are per-site success totals or a
/// success-vs-failure split for one site.
pub fn build_outcome_pie(counts: Vec<OutcomeCount>, selection: &SiteSelection) -> ChartSpec {
    let title = match selection {
        SiteSelection::All => ALL_SITES_PIE_TITLE.to_string(),
        SiteSelection::Site(site) => {
            format!("Success vs Failure Launches for site {}", site)
        }
    };
    let slices = counts
        .into_iter()
        .map(|c| PieSlice {
            label: c.label,
            value: c.count,
        })
        .collect();
    ChartSpec::Pie(PieChart { title, slices })
}

/// Build the payload-vs-outcome scatter: one point per filtered record,
/// colored by booster category.
pub fn build_payload_scatter(records: &[&LaunchRecord]) -> ChartSpec {
    let points = records
        .iter()
        .map(|record| ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.value(),
            category: record.booster_category.clone(),
        })
        .collect();
    ChartSpec::Scatter(ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        points,
    })
}
