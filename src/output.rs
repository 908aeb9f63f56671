//! The module responsible for writing output data to disk.
use crate::exposure::{ExposureRow, Exposures};
use crate::units::Money;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The root folder in which output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "gdp2asset_results";

/// The output file name for exposures
const EXPOSURES_FILE_NAME: &str = "exposures.csv";

/// Get the output directory for a dataset located at `data_dir`.
pub fn get_output_dir(data_dir: &Path) -> Result<PathBuf> {
    // Canonicalise in case the user has specified "."
    let data_dir = data_dir
        .canonicalize()
        .context("Could not resolve path to dataset")?;

    let dataset_name = data_dir
        .file_name()
        .context("Dataset cannot be in root folder")?
        .to_str()
        .context("Invalid chars in dataset dir name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, dataset_name].iter().collect())
}

/// Create a new output directory, with parents.
pub fn create_output_directory(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        // already exists
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    Ok(())
}

/// Represents an exposure point in the exposures output CSV file.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ExposureOutputRow {
    ref_year: u32,
    value: Money,
    latitude: f64,
    longitude: f64,
    region_id: u32,
    income_group: u32,
}

impl ExposureOutputRow {
    /// Create a new [`ExposureOutputRow`]
    fn new(ref_year: u32, row: &ExposureRow) -> Self {
        Self {
            ref_year,
            value: row.value,
            latitude: row.latitude,
            longitude: row.longitude,
            region_id: row.region_id,
            income_group: row.income_group,
        }
    }
}

/// Write an exposure table to a CSV file in the given output directory.
///
/// # Returns
///
/// The path of the file written, or an error.
pub fn write_exposures(output_dir: &Path, exposures: &Exposures) -> Result<PathBuf> {
    let file_path = output_dir.join(EXPOSURES_FILE_NAME);
    let mut writer = csv::Writer::from_path(&file_path)
        .with_context(|| format!("Could not create {}", file_path.display()))?;
    for row in &exposures.rows {
        writer.serialize(ExposureOutputRow::new(exposures.ref_year, row))?;
    }
    writer.flush()?;

    Ok(file_path)
}
