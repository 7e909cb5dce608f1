//! Error types for capital-quiz.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A dataset that breaks one of the table invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset has no continents")]
    NoContinents,

    #[error("continent `{0}` has no countries")]
    EmptyContinent(String),

    #[error("continent `{0}` appears twice")]
    DuplicateContinent(String),

    #[error("country `{country}` appears twice (second time in `{continent}`)")]
    DuplicateCountry { continent: String, country: String },

    #[error("blank {field} for `{country}` in `{continent}`")]
    BlankField {
        continent: String,
        country: String,
        field: &'static str,
    },

    #[error("capital `{capital}` is used by both `{first}` and `{second}`")]
    DuplicateCapital {
        capital: String,
        first: String,
        second: String,
    },
}

/// Failure to read or parse a dataset document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },

    #[error("embedded dataset is broken: {0}")]
    Embedded(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("`{0}` is not a capital in the dataset")]
    UnknownCapital(String),

    #[error("need {needed} distractors but the dataset only has {available} other capitals")]
    NotEnoughDistractors { needed: usize, available: usize },
}

/// Top-level error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),

    #[error("failed to build a question: {0}")]
    Generator(#[from] GeneratorError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
