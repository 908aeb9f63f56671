//! Gridded GDP-derived asset values, keyed by country and year.
//!
//! The grid stores one value per cell centre. Lookups by arbitrary coordinate match the nearest
//! cell; there is no interpolation between cells.
use crate::country::CountryID;
use crate::units::Money;
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use ::log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coordinate distance (degrees) beyond which a nearest-cell match is considered suspect.
///
/// Slightly above the 2.5 arcmin step of the datasets we read, so only coordinates falling
/// outside the grid entirely trigger a warning.
const NEAREST_CELL_WARN_DISTANCE: f64 = 0.05;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude in degrees north
    pub latitude: f64,
    /// Longitude in degrees east
    pub longitude: f64,
}

impl Coordinate {
    /// Squared angular distance to another coordinate.
    ///
    /// Treats the coordinates as planar, which is fine for choosing the nearest cell of a
    /// fine-grained grid away from the antimeridian.
    fn distance_squared(&self, other: &Coordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        dlat * dlat + dlon * dlon
    }
}

/// A single cell of the gridded dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// The cell centre
    pub coordinate: Coordinate,
    /// The asset value attributed to the cell
    pub value: Money,
}

/// Gridded asset values for all countries and years in a dataset.
///
/// Cells are grouped by year and, within a year, by country. Each country's cells are ordered by
/// latitude, then longitude.
#[derive(Debug, Default, PartialEq)]
pub struct GdpGrid {
    cells: HashMap<u32, IndexMap<CountryID, Vec<GridCell>>>,
}

impl GdpGrid {
    /// Build a grid from (country, year, cell) triples.
    ///
    /// # Returns
    ///
    /// A [`GdpGrid`] with each country's cells sorted by latitude then longitude, or an error if
    /// the input is empty or contains duplicate cells.
    pub fn from_cells<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (CountryID, u32, GridCell)>,
    {
        let mut cells: HashMap<u32, IndexMap<CountryID, Vec<GridCell>>> = HashMap::new();
        for (country_id, year, cell) in iter {
            cells
                .entry(year)
                .or_default()
                .entry(country_id)
                .or_default()
                .push(cell);
        }
        ensure!(!cells.is_empty(), "GDP dataset contains no cells");

        for (country_id, country_cells) in cells.values_mut().flatten() {
            country_cells.sort_by(|a, b| {
                a.coordinate
                    .latitude
                    .total_cmp(&b.coordinate.latitude)
                    .then(a.coordinate.longitude.total_cmp(&b.coordinate.longitude))
            });
            ensure!(
                country_cells
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.coordinate != b.coordinate),
                "Duplicate grid cell for {country_id}"
            );
        }

        Ok(Self { cells })
    }

    /// The years covered by the dataset, in ascending order.
    pub fn years(&self) -> Vec<u32> {
        self.cells.keys().copied().sorted().collect()
    }

    /// All cells for the given year, grouped by country.
    fn year_cells(&self, year: u32) -> Result<&IndexMap<CountryID, Vec<GridCell>>> {
        self.cells
            .get(&year)
            .with_context(|| format!("Year {year} not found in GDP dataset"))
    }

    /// All cells for the given country and year, ordered by latitude then longitude.
    pub fn country_cells(&self, iso3: &CountryID, year: u32) -> Result<&[GridCell]> {
        let cells = self
            .year_cells(year)?
            .get(iso3)
            .with_context(|| format!("No GDP cells for {iso3} in year {year}"))?;

        Ok(cells)
    }

    /// Look up the asset value at each of the given coordinates for a year.
    ///
    /// Each coordinate is matched to the nearest grid cell across all countries. A coordinate
    /// falling farther than one grid step from any cell still matches, with a warning.
    ///
    /// # Returns
    ///
    /// One value per coordinate, or an error if the year is not in the dataset.
    pub fn values_at(&self, coordinates: &[Coordinate], year: u32) -> Result<Vec<Money>> {
        let year_cells = self.year_cells(year)?;

        coordinates
            .iter()
            .map(|coordinate| {
                let (cell, distance_squared) = year_cells
                    .values()
                    .flatten()
                    .map(|cell| (cell, coordinate.distance_squared(&cell.coordinate)))
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .with_context(|| format!("Year {year} has no cells in GDP dataset"))?;

                if distance_squared.sqrt() > NEAREST_CELL_WARN_DISTANCE {
                    warn!(
                        "Coordinate ({}, {}) is {:.4} degrees from the nearest grid cell",
                        coordinate.latitude,
                        coordinate.longitude,
                        distance_squared.sqrt()
                    );
                }

                Ok(cell.value)
            })
            .try_collect()
    }
}
