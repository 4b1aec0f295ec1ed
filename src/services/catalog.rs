//! Site catalog: distinct launch sites and the dropdown options.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, LaunchRecord};

/// Wire value of the "all sites" sentinel.
pub const ALL_SITES_VALUE: &str = "ALL";
/// Display label of the "all sites" sentinel.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The currently selected site filter, including the "all sites" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse the wire value: `"ALL"` selects every site, anything else names
    /// a specific site. A name absent from the dataset is not an error; it
    /// simply matches no records.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record passes this site filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES_VALUE),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    /// Display label
    pub label: String,
    /// Wire value sent back as the site selection
    pub value: String,
}

/// Distinct launch sites in first-seen dataset order.
pub fn distinct_sites(dataset: &Dataset) -> Vec<String> {
    let mut sites: Vec<String> = Vec::new();
    for record in dataset.records() {
        if !sites.contains(&record.launch_site) {
            sites.push(record.launch_site.clone());
        }
    }
    sites
}

/// Dropdown options: the "All Sites" sentinel followed by one entry per
/// distinct site. An empty site list yields only the sentinel.
pub fn build_site_options(sites: &[String]) -> Vec<SiteOption> {
    let mut options = Vec::with_capacity(sites.len() + 1);
    options.push(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    });
    for site in sites {
        options.push(SiteOption {
            label: site.clone(),
            value: site.clone(),
        });
    }
    options
}
