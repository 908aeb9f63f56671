//! Asset-value exposures built from gridded GDP data.
//!
//! An exposure is the set of assets subject to potential loss: one point per grid cell, carrying
//! the asset value at that location plus the country's region and income-group classifications.
use crate::country::CountryTable;
use crate::gdp::{Coordinate, GdpGrid};
use crate::units::Money;
use anyhow::Result;
use ::log::info;
use serde::{Deserialize, Serialize};

/// One exposure point: an asset value at a grid-cell location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureRow {
    /// Asset value attributed to this location
    pub value: Money,
    /// Latitude of the grid cell in degrees north
    pub latitude: f64,
    /// Longitude of the grid cell in degrees east
    pub longitude: f64,
    /// Region classification of the country owning the cell
    pub region_id: u32,
    /// Income group classification of the country owning the cell
    pub income_group: u32,
}

/// A set of exposure points for a reference year.
#[derive(Debug, PartialEq)]
pub struct Exposures {
    /// The reference year the asset values correspond to
    pub ref_year: u32,
    /// One row per grid cell per country
    pub rows: Vec<ExposureRow>,
}

impl Exposures {
    /// Build exposures for the given countries at a reference year.
    ///
    /// # Arguments
    ///
    /// * `countries` - ISO3 codes of the countries to include
    /// * `ref_year` - The reference year for asset values
    /// * `grid` - The gridded GDP dataset
    /// * `table` - The country reference table
    ///
    /// # Returns
    ///
    /// Exposures covering all requested countries, or an error if any country code or the
    /// reference year is unknown.
    pub fn from_countries(
        countries: &[&str],
        ref_year: u32,
        grid: &GdpGrid,
        table: &CountryTable,
    ) -> Result<Exposures> {
        let mut rows = Vec::new();
        for iso3 in countries {
            let country_rows = set_one_country(iso3, ref_year, grid, table)?;
            info!(
                "Added {} exposure points for {iso3} in {ref_year}",
                country_rows.len()
            );
            rows.extend(country_rows);
        }

        Ok(Exposures { ref_year, rows })
    }

    /// Total asset value across all exposure points.
    pub fn total_value(&self) -> Money {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// The coordinates of all exposure points, in row order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.rows
            .iter()
            .map(|row| Coordinate {
                latitude: row.latitude,
                longitude: row.longitude,
            })
            .collect()
    }
}

/// Build the exposure rows for a single country and year.
///
/// Rows are ordered by latitude then longitude and all carry the country's region ID and income
/// group from the reference table.
///
/// # Returns
///
/// A [`Vec`] of [`ExposureRow`]s, or an error if the country code is unknown or the dataset has
/// no cells for the (country, year) pair.
pub fn set_one_country(
    iso3: &str,
    year: u32,
    grid: &GdpGrid,
    table: &CountryTable,
) -> Result<Vec<ExposureRow>> {
    let country = table.get(iso3)?;
    let cells = grid.country_cells(&country.id, year)?;

    Ok(cells
        .iter()
        .map(|cell| ExposureRow {
            value: cell.value,
            latitude: cell.coordinate.latitude,
            longitude: cell.coordinate.longitude,
            region_id: country.region_id,
            income_group: country.income_group,
        })
        .collect())
}
