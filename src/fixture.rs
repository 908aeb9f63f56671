//! Fixtures for tests

use crate::country::{Country, CountryMap, CountryTable};
use crate::gdp::{Coordinate, GdpGrid, GridCell};
use crate::units::Money;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn country_table() -> CountryTable {
    let country = |iso3: &str, name: &str, numeric_id| Country {
        id: iso3.into(),
        name: name.to_string(),
        numeric_id,
        region_id: 3,
        income_group: 11,
    };
    let countries = CountryMap::from([
        ("CHE".into(), country("CHE", "Switzerland", 41)),
        ("DEU".into(), country("DEU", "Germany", 58)),
        ("LIE".into(), country("LIE", "Liechtenstein", 118)),
    ]);

    CountryTable::new(countries).unwrap()
}

#[fixture]
pub fn gdp_grid() -> GdpGrid {
    let cell = |latitude, longitude, value| GridCell {
        coordinate: Coordinate {
            latitude,
            longitude,
        },
        value: Money(value),
    };
    let cells = [
        ("CHE".into(), 2000, cell(46.0, 8.0, 1e6)),
        ("CHE".into(), 2000, cell(46.0, 8.5, 2e6)),
        ("CHE".into(), 2000, cell(46.5, 8.0, 3e6)),
        ("CHE".into(), 2000, cell(46.5, 8.5, 4e6)),
    ];

    GdpGrid::from_cells(cells).unwrap()
}
