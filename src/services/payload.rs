//! Payload-mass range filtering.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, LaunchRecord, PayloadBounds};
use crate::services::catalog::SiteSelection;

/// Inclusive payload-mass bounds chosen on the range slider.
///
/// `low > high` is permitted and matches nothing; the slider never produces
/// it but a caller can, and permissive slider semantics return an empty
/// result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether a mass falls inside the range, inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    /// Clamp both endpoints into the dataset bounds. An inverted range
    /// (`low > high`) is returned unchanged so that it keeps matching
    /// nothing; clamping it could collapse both endpoints onto the same
    /// bound and make it match records sitting exactly on that bound.
    pub fn clamp_to(&self, bounds: PayloadBounds) -> PayloadRange {
        if self.low > self.high {
            return *self;
        }
        PayloadRange {
            low: self.low.clamp(bounds.min, bounds.max),
            high: self.high.clamp(bounds.min, bounds.max),
        }
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        PayloadRange::new(bounds.min, bounds.max)
    }
}

/// Records whose payload mass falls inside `range` and which pass the site
/// filter, in dataset order. Borrows from the dataset; nothing is cloned or
/// mutated.
pub fn filter_by_payload<'a>(
    dataset: &'a Dataset,
    range: &PayloadRange,
    selection: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg) && selection.matches(record))
        .collect()
}
