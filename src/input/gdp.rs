//! Code for reading the gridded GDP dataset from a CSV file.
use super::*;
use crate::country::CountryID;
use crate::gdp::{Coordinate, GdpGrid, GridCell};
use crate::id::IDCollection;
use crate::units::Money;
use anyhow::{Context, Result, ensure};
use indexmap::IndexSet;
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

const GDP_CELLS_FILE_NAME: &str = "gdp_cells.csv";

/// A grid cell record retrieved from a CSV file
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct GdpCellRaw {
    country_id: String,
    year: u32,
    latitude: f64,
    longitude: f64,
    value: Money,
}

/// Read the gridded GDP dataset from the specified data directory.
///
/// # Arguments
///
/// * `data_dir` - Folder containing the dataset files
/// * `country_ids` - All possible country IDs
///
/// # Returns
///
/// A [`GdpGrid`] with the parsed dataset or an error
pub fn read_gdp_grid(data_dir: &Path, country_ids: &IndexSet<CountryID>) -> Result<GdpGrid> {
    let file_path = data_dir.join(GDP_CELLS_FILE_NAME);
    let gdp_csv = read_csv(&file_path)?;
    read_gdp_grid_from_iter(gdp_csv, country_ids).with_context(|| input_err_msg(&file_path))
}

/// Process grid cells from an iterator.
///
/// # Arguments
///
/// * `iter` - Iterator of `GdpCellRaw`s
/// * `country_ids` - All possible country IDs
///
/// # Returns
///
/// A [`GdpGrid`] or an error.
fn read_gdp_grid_from_iter<I>(iter: I, country_ids: &IndexSet<CountryID>) -> Result<GdpGrid>
where
    I: Iterator<Item = GdpCellRaw>,
{
    let cells: Vec<_> = iter
        .map(|cell| -> Result<_> {
            let country_id = country_ids.get_id_by_str(&cell.country_id)?;

            ensure!(
                cell.value.is_finite() && cell.value >= Money::ZERO,
                "Invalid cell value {} for {country_id}",
                cell.value
            );
            ensure!(
                (-90.0..=90.0).contains(&cell.latitude),
                "Latitude {} out of range for {country_id}",
                cell.latitude
            );
            ensure!(
                (-180.0..=180.0).contains(&cell.longitude),
                "Longitude {} out of range for {country_id}",
                cell.longitude
            );

            let year = cell.year;
            let cell = GridCell {
                coordinate: Coordinate {
                    latitude: cell.latitude,
                    longitude: cell.longitude,
                },
                value: cell.value,
            };
            Ok((country_id, year, cell))
        })
        .try_collect()?;

    GdpGrid::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use rstest::{fixture, rstest};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[fixture]
    fn country_ids() -> IndexSet<CountryID> {
        ["LIE".into(), "CHE".into()].into_iter().collect()
    }

    fn raw_cell(country_id: &str, latitude: f64, longitude: f64, value: f64) -> GdpCellRaw {
        GdpCellRaw {
            country_id: country_id.to_string(),
            year: 2000,
            latitude,
            longitude,
            value: Money(value),
        }
    }

    #[rstest]
    fn test_read_gdp_grid(country_ids: IndexSet<CountryID>) {
        let dir = tempdir().unwrap();
        {
            let file_path = dir.path().join(GDP_CELLS_FILE_NAME);
            let mut file = File::create(file_path).unwrap();
            writeln!(
                file,
                "country_id,year,latitude,longitude,value
LIE,2000,47.0622474,9.5206968,174032107.65846416
LIE,2000,47.0622474,9.5623634,20386409.991937194"
            )
            .unwrap();
        }

        let grid = read_gdp_grid(dir.path(), &country_ids).unwrap();
        let cells = grid.country_cells(&"LIE".into(), 2000).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].value, Money(174032107.65846416));
    }

    #[rstest]
    fn test_unknown_country(country_ids: IndexSet<CountryID>) {
        let cells = [raw_cell("OYY", 47.0, 9.5, 1.0)].into_iter();
        assert_error!(
            read_gdp_grid_from_iter(cells, &country_ids),
            "Unknown ID OYY found"
        );
    }

    #[rstest]
    #[case(raw_cell("LIE", 47.0, 9.5, -1.0), "Invalid cell value -1 for LIE")]
    #[case(raw_cell("LIE", 47.0, 9.5, f64::NAN), "Invalid cell value NaN for LIE")]
    #[case(raw_cell("LIE", 91.0, 9.5, 1.0), "Latitude 91 out of range for LIE")]
    #[case(raw_cell("LIE", 47.0, 181.0, 1.0), "Longitude 181 out of range for LIE")]
    fn test_invalid_cells(
        country_ids: IndexSet<CountryID>,
        #[case] cell: GdpCellRaw,
        #[case] error_msg: &str,
    ) {
        assert_error!(
            read_gdp_grid_from_iter([cell].into_iter(), &country_ids),
            error_msg
        );
    }
}
