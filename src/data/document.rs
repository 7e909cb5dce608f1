//! Raw shape of a dataset document, with repeated object keys preserved.
//!
//! Deserializing straight into a map keeps only the last value of a repeated
//! key, so the document is read as ordered key/value lists and folded into a
//! [`ContinentTable`] afterwards, where repeats become errors.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::data::ContinentTable;
use crate::error::DatasetError;
use crate::models::CountryRecord;

/// JSON object read as its entries in document order.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for Entries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = Entries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// continent → country → record, exactly as written in the file.
#[derive(Deserialize)]
#[serde(transparent)]
pub(crate) struct RawDocument(Entries<Entries<CountryRecord>>);

impl RawDocument {
    /// Fold into a table, rejecting any continent or country key seen twice.
    pub(crate) fn into_table(self) -> Result<ContinentTable, DatasetError> {
        let mut table = ContinentTable::new();

        for (continent, countries) in self.0.0 {
            if table.contains_key(&continent) {
                return Err(DatasetError::DuplicateContinent(continent));
            }

            let entry = table.entry(continent.clone()).or_default();
            for (country, record) in countries.0 {
                if entry.contains_key(&country) {
                    return Err(DatasetError::DuplicateCountry {
                        continent: continent.clone(),
                        country,
                    });
                }
                entry.insert(country, record);
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> Result<ContinentTable, DatasetError> {
        serde_json::from_str::<RawDocument>(json)
            .unwrap()
            .into_table()
    }

    #[test]
    fn test_keeps_every_entry() {
        let table = table(
            r#"{
                "Asia": { "Japan": { "country": "Japan", "capital": "Tokyo" } },
                "Europe": {
                    "France": { "country": "France", "capital": "Paris" },
                    "Spain": { "country": "Spain", "capital": "Madrid" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["Europe"].len(), 2);
        assert_eq!(table["Europe"]["France"].capital, "Paris");
    }

    #[test]
    fn test_repeated_country_key() {
        let err = table(
            r#"{
                "Europe": {
                    "France": { "country": "France", "capital": "Paris" },
                    "France": { "country": "France", "capital": "Lyon" }
                }
            }"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            DatasetError::DuplicateCountry {
                continent: "Europe".to_string(),
                country: "France".to_string(),
            }
        );
    }

    #[test]
    fn test_repeated_continent_key() {
        let err = table(
            r#"{
                "Europe": { "France": { "country": "France", "capital": "Paris" } },
                "Europe": { "Spain": { "country": "Spain", "capital": "Madrid" } }
            }"#,
        )
        .unwrap_err();

        assert_eq!(err, DatasetError::DuplicateContinent("Europe".to_string()));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<RawDocument>("[1, 2, 3]").is_err());
    }
}
