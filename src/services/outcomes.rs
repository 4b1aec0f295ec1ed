//! Outcome aggregation for the proportion chart.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::services::catalog::SiteSelection;

/// Label for successful launches in the per-site view.
pub const SUCCESS_LABEL: &str = "Success";
/// Label for failed launches in the per-site view.
pub const FAILURE_LABEL: &str = "Failure";

/// One aggregated count: a category label (site name, or
/// "Success"/"Failure") and how many it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub label: String,
    pub count: u64,
}

/// Aggregate launch outcomes under the given site selection.
///
/// For [`SiteSelection::All`], groups all records by launch site and sums
/// the 0/1 outcome values: one entry per site, in first-seen order, whose
/// count is the number of *successes* at that site (not total launches —
/// the dashboard's all-sites pie is defined this way). Sites with zero
/// successes are still present with count 0.
///
/// For a specific site, counts successes and failures among that site's
/// records, omitting a label with zero occurrences. A site name absent from
/// the dataset yields an empty result.
pub fn aggregate_outcomes(dataset: &Dataset, selection: &SiteSelection) -> Vec<OutcomeCount> {
    match selection {
        SiteSelection::All => {
            let mut counts: Vec<OutcomeCount> = Vec::new();
            for record in dataset.records() {
                let value = u64::from(record.outcome.value());
                match counts.iter_mut().find(|c| c.label == record.launch_site) {
                    Some(entry) => entry.count += value,
                    None => counts.push(OutcomeCount {
                        label: record.launch_site.clone(),
                        count: value,
                    }),
                }
            }
            counts
        }
        SiteSelection::Site(_) => {
            let mut successes = 0u64;
            let mut failures = 0u64;
            for record in dataset.records().iter().filter(|r| selection.matches(r)) {
                if record.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }

            let mut counts = Vec::new();
            if successes > 0 {
                counts.push(OutcomeCount {
                    label: SUCCESS_LABEL.to_string(),
                    count: successes,
                });
            }
            if failures > 0 {
                counts.push(OutcomeCount {
                    label: FAILURE_LABEL.to_string(),
                    count: failures,
                });
            }
            counts
        }
    }
}
