//! Launch records and the immutable in-memory dataset.
//!
//! The dataset is loaded once at startup and shared read-only (via `Arc`)
//! for the process lifetime. All derived views in [`crate::services`] are
//! pure functions over it; nothing here is ever mutated after construction.

pub mod error;
pub mod loader;

pub use error::DatasetError;
pub use loader::{load_csv, read_records};

use serde::{Deserialize, Serialize};

/// Binary launch outcome, serialized as `1` (success) / `0` (failure) to
/// match the `class` column of the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric value of the outcome (1 = success, 0 = failure), used for
    /// scatter-plot y values and success sums.
    pub fn value(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

/// One observed launch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name, e.g. "CCAFS LC-40"
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative
    pub payload_mass_kg: f64,
    /// Booster version category, e.g. "v1.0", "FT", "B4"
    pub booster_category: String,
    /// Launch outcome
    pub outcome: Outcome,
}

/// Inclusive payload-mass bounds observed in a dataset, used by the frontend
/// to bound the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Immutable, ordered collection of launch records.
///
/// Payload bounds are computed once at construction. An empty dataset is
/// legal and has bounds `(0, 0)`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let bounds = if records.is_empty() {
            PayloadBounds { min: 0.0, max: 0.0 }
        } else {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for record in &records {
                min = min.min(record.payload_mass_kg);
                max = max.max(record.payload_mass_kg);
            }
            PayloadBounds { min, max }
        };
        Self { records, bounds }
    }

    /// All records in load order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Payload-mass bounds observed at load time.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
