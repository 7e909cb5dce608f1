use serde::Deserialize;

use crate::generator::OPTION_COUNT;

/// A single `{country, capital}` entry of the dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub capital: String,
}

/// The country whose capital the player has to name this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub country: String,
    pub capital: String,
}

impl Question {
    pub fn is_correct(&self, selected: &str) -> bool {
        check_answer(self, selected)
    }
}

impl From<&CountryRecord> for Question {
    fn from(record: &CountryRecord) -> Self {
        Self {
            country: record.country.clone(),
            capital: record.capital.clone(),
        }
    }
}

/// A question together with its four shuffled options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub question: Question,
    pub options: [String; OPTION_COUNT],
}

/// Returns true iff `selected` is the capital asked for by `question`.
pub fn check_answer(question: &Question, selected: &str) -> bool {
    selected == question.capital
}
