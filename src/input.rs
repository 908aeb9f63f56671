//! Common routines for reading input data from CSV and TOML files.
use crate::id::{HasID, IDLike};
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod country;
pub mod gdp;

/// Format an error message to include the file path.
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read a series of type `T`s from a CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// An iterator over the deserialized records, or an error if the file is missing, malformed or
/// empty.
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<impl Iterator<Item = T>> {
    let reader = csv::Reader::from_path(file_path).with_context(|| input_err_msg(file_path))?;
    let records: Vec<T> = reader
        .into_deserialize()
        .try_collect()
        .with_context(|| input_err_msg(file_path))?;
    ensure!(
        !records.is_empty(),
        "CSV file {} cannot be empty",
        file_path.display()
    );

    Ok(records.into_iter())
}

/// Read a CSV file of records with IDs into a map keyed by ID.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// An [`IndexMap`] of records keyed by ID, in file order, or an error if the file is invalid or
/// contains duplicate IDs.
pub fn read_csv_id_file<T, ID>(file_path: &Path) -> Result<IndexMap<ID, T>>
where
    T: HasID<ID> + DeserializeOwned,
    ID: IDLike,
{
    let mut map = IndexMap::new();
    for record in read_csv::<T>(file_path)? {
        let id = record.get_id().clone();
        ensure!(
            map.insert(id.clone(), record).is_none(),
            "Duplicate ID {id} in {}",
            file_path.display()
        );
    }

    Ok(map)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// The deserialized TOML data or an error if the file is invalid.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;

    Ok(toml_data)
}
