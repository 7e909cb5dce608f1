use std::fs;
use std::path::Path;

use tracing::info;

use crate::data::CapitalDataset;
use crate::data::document::RawDocument;
use crate::error::LoadError;

/// Name used for the built-in dataset in logs and errors.
pub const EMBEDDED_DATASET_LABEL: &str = "assets/capitals.json";

const EMBEDDED_JSON: &str = include_str!("../../assets/capitals.json");

pub(crate) fn parse_embedded() -> Result<CapitalDataset, LoadError> {
    parse_dataset(EMBEDDED_JSON, EMBEDDED_DATASET_LABEL)
}

/// Read and validate a dataset document from disk.
pub fn load_dataset_from_json<P: AsRef<Path>>(path: P) -> Result<CapitalDataset, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_dataset(&json_content, path)
}

/// Parse and validate a dataset document; `origin` is only used for errors and logs.
pub fn parse_dataset<P: AsRef<Path>>(json: &str, origin: P) -> Result<CapitalDataset, LoadError> {
    let origin = origin.as_ref();

    let document: RawDocument = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let dataset = document
        .into_table()
        .and_then(CapitalDataset::from_table)
        .map_err(|source| LoadError::Invalid {
            path: origin.to_path_buf(),
            source,
        })?;

    info!(
        source = %origin.display(),
        continents = dataset.continent_count(),
        countries = dataset.country_count(),
        "dataset loaded"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatasetError;

    const SMALL: &str = r#"{
        "Europe": {
            "France": { "country": "France", "capital": "Paris" },
            "Spain": { "country": "Spain", "capital": "Madrid" }
        },
        "Asia": {
            "Japan": { "country": "Japan", "capital": "Tokyo" }
        }
    }"#;

    #[test]
    fn test_parse_dataset() {
        let dataset = parse_dataset(SMALL, "small.json").unwrap();
        assert_eq!(dataset.continent_count(), 2);
        assert_eq!(dataset.country_count(), 3);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = parse_dataset("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        let json = r#"{ "Europe": {} }"#;
        match parse_dataset(json, "empty.json") {
            Err(LoadError::Invalid { source, .. }) => {
                assert_eq!(source, DatasetError::EmptyContinent("Europe".to_string()));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_country_key_is_rejected() {
        let json = r#"{
            "Europe": {
                "France": { "country": "France", "capital": "Paris" },
                "France": { "country": "France", "capital": "Lyon" },
                "Spain": { "country": "Spain", "capital": "Madrid" }
            }
        }"#;

        match parse_dataset(json, "twice.json") {
            Err(LoadError::Invalid { source, .. }) => assert_eq!(
                source,
                DatasetError::DuplicateCountry {
                    continent: "Europe".to_string(),
                    country: "France".to_string(),
                }
            ),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_continent_key_is_rejected() {
        let json = r#"{
            "Europe": { "France": { "country": "France", "capital": "Paris" } },
            "Asia": { "Japan": { "country": "Japan", "capital": "Tokyo" } },
            "Europe": { "Spain": { "country": "Spain", "capital": "Madrid" } }
        }"#;

        match parse_dataset(json, "twice.json") {
            Err(LoadError::Invalid { source, .. }) => {
                assert_eq!(source, DatasetError::DuplicateContinent("Europe".to_string()));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_same_country_name_under_two_keys_is_rejected() {
        let json = r#"{
            "Europe": {
                "FR": { "country": "France", "capital": "Paris" },
                "FR2": { "country": "France", "capital": "Lyon" }
            }
        }"#;

        let err = parse_dataset(json, "alias.json").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid {
                source: DatasetError::DuplicateCountry { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset_from_json("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("capital-quiz-{}.json", std::process::id()));
        fs::write(&path, SMALL).unwrap();

        let dataset = load_dataset_from_json(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(dataset.contains_capital("Tokyo"));
    }
}
