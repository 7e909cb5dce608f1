//! The continent → country → capital table.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use crate::data::loader;
use crate::error::{DatasetError, LoadError};
use crate::models::CountryRecord;

/// Shape of the dataset document: continent name → country name → record.
pub type ContinentTable = BTreeMap<String, BTreeMap<String, CountryRecord>>;

static EMBEDDED: OnceLock<Result<Arc<CapitalDataset>, String>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
struct Continent {
    name: String,
    /// Range of this continent's entries in `records`.
    start: usize,
    len: usize,
}

/// Validated, read-only capital table.
///
/// Continents and countries are stored in name order, so a seeded generator
/// walks the same entries on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalDataset {
    continents: Vec<Continent>,
    records: Vec<CountryRecord>,
    capitals: Vec<String>,
}

impl CapitalDataset {
    /// Build a dataset from a parsed document, checking every table invariant.
    pub fn from_table(table: ContinentTable) -> Result<Self, DatasetError> {
        if table.is_empty() {
            return Err(DatasetError::NoContinents);
        }

        // capital -> country that claimed it first
        let mut owners: HashMap<String, String> = HashMap::new();
        // displayed country names, unique across continents
        let mut names: HashSet<String> = HashSet::new();
        let mut continents = Vec::with_capacity(table.len());
        let mut records = Vec::new();
        let mut capitals = Vec::new();

        for (name, countries) in table {
            if countries.is_empty() {
                return Err(DatasetError::EmptyContinent(name));
            }

            let start = records.len();
            for (key, record) in countries {
                check_not_blank(&name, &key, "country", &record.country)?;
                check_not_blank(&name, &key, "capital", &record.capital)?;

                if !names.insert(record.country.clone()) {
                    return Err(DatasetError::DuplicateCountry {
                        continent: name,
                        country: record.country,
                    });
                }

                if let Some(first) = owners.get(&record.capital) {
                    return Err(DatasetError::DuplicateCapital {
                        capital: record.capital.clone(),
                        first: first.clone(),
                        second: record.country.clone(),
                    });
                }
                owners.insert(record.capital.clone(), record.country.clone());
                capitals.push(record.capital.clone());
                records.push(record);
            }

            continents.push(Continent {
                name,
                start,
                len: records.len() - start,
            });
        }

        Ok(Self {
            continents,
            records,
            capitals,
        })
    }

    /// Build a dataset from `(continent, country, capital)` triples.
    pub fn from_records<I, S>(records: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut table = ContinentTable::new();
        for (continent, country, capital) in records {
            let continent = continent.into();
            let country = country.into();
            let countries = table.entry(continent.clone()).or_default();
            if countries.contains_key(&country) {
                return Err(DatasetError::DuplicateCountry { continent, country });
            }
            countries.insert(
                country.clone(),
                CountryRecord {
                    country,
                    capital: capital.into(),
                },
            );
        }
        Self::from_table(table)
    }

    /// The dataset compiled into the binary, parsed once per process.
    pub fn embedded() -> Result<Arc<Self>, LoadError> {
        EMBEDDED
            .get_or_init(|| {
                loader::parse_embedded()
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(LoadError::Embedded)
    }

    pub fn continent_count(&self) -> usize {
        self.continents.len()
    }

    pub fn country_count(&self) -> usize {
        self.records.len()
    }

    pub fn continent_names(&self) -> impl Iterator<Item = &str> {
        self.continents.iter().map(|c| c.name.as_str())
    }

    /// Countries of one continent, or `None` if the continent is unknown.
    pub fn countries_in(&self, continent: &str) -> Option<&[CountryRecord]> {
        self.continents
            .iter()
            .find(|c| c.name == continent)
            .map(|c| self.slice(c))
    }

    /// Name of the continent a country belongs to.
    pub fn continent_of(&self, country: &str) -> Option<&str> {
        self.continents
            .iter()
            .find(|c| self.slice(c).iter().any(|r| r.country == country))
            .map(|c| c.name.as_str())
    }

    /// Every record, continent by continent.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub(crate) fn continent_at(&self, index: usize) -> &[CountryRecord] {
        self.slice(&self.continents[index])
    }

    fn slice(&self, continent: &Continent) -> &[CountryRecord] {
        &self.records[continent.start..continent.start + continent.len]
    }

    /// Every capital, in the same order as [`records`](Self::records).
    pub fn capitals(&self) -> &[String] {
        &self.capitals
    }

    pub fn contains_capital(&self, capital: &str) -> bool {
        self.capitals.iter().any(|c| c == capital)
    }
}

fn check_not_blank(
    continent: &str,
    country: &str,
    field: &'static str,
    value: &str,
) -> Result<(), DatasetError> {
    if value.trim().is_empty() {
        return Err(DatasetError::BlankField {
            continent: continent.to_string(),
            country: country.to_string(),
            field,
        });
    }
    Ok(())
}
