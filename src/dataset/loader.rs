//! CSV loader for the launch dataset.
//!
//! Columns are matched by header name, so column order does not matter and
//! extra columns (flight numbers, raw booster versions, index columns) are
//! ignored. Rows that violate the record invariants are load errors rather
//! than being skipped: a malformed dataset is fatal at startup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Dataset, DatasetError, LaunchRecord, Outcome};

/// Required column headers in the source CSV.
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_OUTCOME: &str = "class";

/// Load the dataset from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    read_records(file)
}

/// Read launch records from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DatasetError::MissingColumn(name))
    };
    let site_idx = column(COL_LAUNCH_SITE)?;
    let mass_idx = column(COL_PAYLOAD_MASS)?;
    let category_idx = column(COL_BOOSTER_CATEGORY)?;
    let outcome_idx = column(COL_OUTCOME)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let field = |idx: usize| {
            row.get(idx).ok_or_else(|| DatasetError::InvalidRecord {
                line,
                reason: "row has fewer fields than the header".to_string(),
            })
        };

        let launch_site = field(site_idx)?.trim().to_string();
        let mass_raw = field(mass_idx)?.trim();
        let booster_category = field(category_idx)?.trim().to_string();
        let outcome_raw = field(outcome_idx)?.trim();

        let payload_mass_kg: f64 =
            mass_raw
                .parse()
                .map_err(|_| DatasetError::InvalidRecord {
                    line,
                    reason: format!("payload mass '{}' is not a number", mass_raw),
                })?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidRecord {
                line,
                reason: format!("payload mass {} is negative or not finite", payload_mass_kg),
            });
        }

        let outcome_value: u8 =
            outcome_raw
                .parse()
                .map_err(|_| DatasetError::InvalidRecord {
                    line,
                    reason: format!("outcome '{}' is not 0 or 1", outcome_raw),
                })?;
        let outcome = Outcome::try_from(outcome_value)
            .map_err(|reason| DatasetError::InvalidRecord { line, reason })?;

        records.push(LaunchRecord {
            launch_site,
            payload_mass_kg,
            booster_category,
            outcome,
        });
    }

    Ok(Dataset::new(records))
}
