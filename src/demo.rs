//! The embedded demo dataset and code for loading it.
//!
//! The demo dataset is a small extract of a global gridded exposure product: the Liechtenstein
//! cells for the year 2000 plus a few neighbouring German cells, together with a country
//! reference table. It is embedded in the binary so the library can be exercised without any
//! external data files.
use crate::country::CountryTable;
use crate::gdp::GdpGrid;
use crate::input::{country::read_countries, gdp::read_gdp_grid};
use anyhow::{Context, Result, ensure};
use include_dir::{Dir, DirEntry, include_dir};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The directory containing the demo dataset files.
const DEMO_DIR: Dir = include_dir!("demos");

/// Extract the demo dataset files to a new directory.
///
/// # Arguments
///
/// * `dest` - The destination directory, which must not already exist
pub fn extract(dest: &Path) -> Result<()> {
    ensure!(
        !dest.exists(),
        "Destination directory {} already exists",
        dest.display()
    );

    fs::create_dir_all(dest)?;
    for entry in DEMO_DIR.entries() {
        match entry {
            DirEntry::Dir(_) => panic!("Subdirectories in demo data not supported"),
            DirEntry::File(f) => {
                let file_name = f.path().file_name().unwrap();
                fs::write(dest.join(file_name), f.contents())?;
            }
        }
    }

    Ok(())
}

/// Load the demo dataset.
///
/// The embedded files are extracted to a temporary directory and read back through the regular
/// input routines.
///
/// # Returns
///
/// The demo country reference table and gridded dataset, or an error.
pub fn load() -> Result<(CountryTable, GdpGrid)> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory.")?;
    let data_dir = temp_dir.path().join("demo");
    extract(&data_dir)?;

    let table = read_countries(&data_dir)?;
    let grid = read_gdp_grid(&data_dir, &table.ids())?;

    Ok((table, grid))
}
