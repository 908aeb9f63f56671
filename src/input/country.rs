//! Code for reading the country reference table from a CSV file.
use super::*;
use crate::country::CountryTable;
use anyhow::{Context, Result};
use std::path::Path;

const COUNTRIES_FILE_NAME: &str = "countries.csv";

/// Read the country reference table from the specified data directory.
///
/// # Arguments
///
/// * `data_dir` - Folder containing the dataset files
///
/// # Returns
///
/// A [`CountryTable`] with the parsed reference data or an error
pub fn read_countries(data_dir: &Path) -> Result<CountryTable> {
    let file_path = data_dir.join(COUNTRIES_FILE_NAME);
    let countries = read_csv_id_file(&file_path)?;
    CountryTable::new(countries).with_context(|| input_err_msg(&file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::tempdir;

    /// Create an example countries file in dir_path
    fn create_countries_file(dir_path: &Path, contents: &str) {
        let file_path = dir_path.join(COUNTRIES_FILE_NAME);
        let mut file = File::create(file_path).unwrap();
        writeln!(file, "{contents}").unwrap();
    }

    #[test]
    fn test_read_countries() {
        let dir = tempdir().unwrap();
        create_countries_file(
            dir.path(),
            "id,name,numeric_id,region_id,income_group
LIE,Liechtenstein,118,3,11
MLT,Malta,124,0,2",
        );
        let table = read_countries(dir.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("LIE").unwrap().name, "Liechtenstein");
        assert_eq!(table.classify(124).unwrap(), (0, 2));
    }

    #[test]
    fn test_read_countries_duplicate_iso3() {
        let dir = tempdir().unwrap();
        create_countries_file(
            dir.path(),
            "id,name,numeric_id,region_id,income_group
LIE,Liechtenstein,118,3,11
LIE,Liechtenstein,119,3,11",
        );
        assert!(read_countries(dir.path()).is_err());
    }

    #[test]
    fn test_read_countries_duplicate_numeric_id() {
        let dir = tempdir().unwrap();
        create_countries_file(
            dir.path(),
            "id,name,numeric_id,region_id,income_group
LIE,Liechtenstein,118,3,11
MLT,Malta,118,0,2",
        );
        assert!(read_countries(dir.path()).is_err());
    }
}
