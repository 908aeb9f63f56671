//! Countries and the socio-economic classifications attached to them.
//!
//! Every country in the reference table carries two categorical codes, a region ID and an income
//! group, which downstream risk calculations use to select impact functions.
use crate::id::{define_id_getter, define_id_type};
use anyhow::{Context, Result, ensure};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use std::collections::HashMap;

define_id_type! {CountryID}

/// A map of [`Country`] records, keyed by ISO3 code
pub type CountryMap = IndexMap<CountryID, Country>;

/// A country entry from the reference table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Country {
    /// The country's ISO3 code (e.g. "LIE")
    pub id: CountryID,
    /// The country's full name (e.g. "Liechtenstein")
    pub name: String,
    /// Numeric country identifier used by gridded datasets
    pub numeric_id: u32,
    /// Categorical region classification
    pub region_id: u32,
    /// Categorical income group classification
    pub income_group: u32,
}
define_id_getter! {Country, CountryID}

/// The country reference table, indexed by ISO3 code and by numeric country ID.
#[derive(Debug, PartialEq)]
pub struct CountryTable {
    countries: CountryMap,
    by_numeric_id: HashMap<u32, CountryID>,
}

impl CountryTable {
    /// Create a table from a map of countries, indexing them by numeric ID.
    pub fn new(countries: CountryMap) -> Result<Self> {
        let mut by_numeric_id = HashMap::with_capacity(countries.len());
        for country in countries.values() {
            ensure!(
                by_numeric_id
                    .insert(country.numeric_id, country.id.clone())
                    .is_none(),
                "Duplicate numeric country ID {}",
                country.numeric_id
            );
        }

        Ok(Self {
            countries,
            by_numeric_id,
        })
    }

    /// Look up a country by its ISO3 code.
    pub fn get(&self, iso3: &str) -> Result<&Country> {
        self.countries
            .get(iso3)
            .with_context(|| format!("Unknown country code {iso3}"))
    }

    /// Map a numeric country ID to its (region ID, income group) pair.
    pub fn classify(&self, numeric_id: u32) -> Result<(u32, u32)> {
        let iso3 = self
            .by_numeric_id
            .get(&numeric_id)
            .with_context(|| format!("Unknown numeric country ID {numeric_id}"))?;
        let country = &self.countries[iso3];

        Ok((country.region_id, country.income_group))
    }

    /// The ISO3 codes of all countries in the table, in file order.
    pub fn ids(&self) -> IndexSet<CountryID> {
        self.countries.keys().cloned().collect()
    }

    /// The number of countries in the table.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the table contains no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, country_table};
    use rstest::rstest;

    #[rstest]
    fn test_get(country_table: CountryTable) {
        assert_eq!(country_table.get("LIE").unwrap().name, "Liechtenstein");
        assert_error!(country_table.get("OYY"), "Unknown country code OYY");
    }

    #[rstest]
    #[case(41, (3, 11))]
    #[case(118, (3, 11))]
    #[case(58, (3, 11))]
    fn test_classify(country_table: CountryTable, #[case] id: u32, #[case] expected: (u32, u32)) {
        assert_eq!(country_table.classify(id).unwrap(), expected);
    }

    #[rstest]
    fn test_classify_unknown(country_table: CountryTable) {
        assert_error!(
            country_table.classify(999),
            "Unknown numeric country ID 999"
        );
    }

    #[test]
    fn test_new_duplicate_numeric_id() {
        let country = |iso3: &str, numeric_id| Country {
            id: iso3.into(),
            name: iso3.to_string(),
            numeric_id,
            region_id: 0,
            income_group: 0,
        };
        let countries = CountryMap::from([
            ("AAA".into(), country("AAA", 1)),
            ("BBB".into(), country("BBB", 1)),
        ]);
        assert_error!(
            CountryTable::new(countries),
            "Duplicate numeric country ID 1"
        );
    }
}
