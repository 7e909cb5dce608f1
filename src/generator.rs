//! Question and option generation.
//!
//! The generator is a pure function of the dataset and the random source it
//! is handed; it keeps no state between calls.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::data::CapitalDataset;
use crate::error::GeneratorError;
use crate::models::{CountryRecord, Question, Round};

/// Options shown per question.
pub const OPTION_COUNT: usize = 4;

/// Wrong options per question.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// How the country for a new question is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Uniform continent, then uniform country within it. Countries on small
    /// continents come up more often than countries on large ones.
    #[default]
    ByContinent,
    /// Uniform over every country in the dataset.
    Uniform,
}

#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    dataset: Arc<CapitalDataset>,
    policy: SelectionPolicy,
}

impl QuestionGenerator {
    pub fn new(dataset: Arc<CapitalDataset>, policy: SelectionPolicy) -> Self {
        Self { dataset, policy }
    }

    pub fn dataset(&self) -> &CapitalDataset {
        &self.dataset
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Fail fast if the dataset cannot fill an option set for any question.
    pub fn ensure_playable(&self) -> Result<(), GeneratorError> {
        // Capitals are unique, so every question has the same pool size.
        let available = self.dataset.country_count().saturating_sub(1);
        if available < DISTRACTOR_COUNT {
            return Err(GeneratorError::NotEnoughDistractors {
                needed: DISTRACTOR_COUNT,
                available,
            });
        }
        Ok(())
    }

    /// Pick the country for the next question according to the policy.
    pub fn pick_random_country<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let record = match self.policy {
            SelectionPolicy::ByContinent => {
                let continent = rng.gen_range(0..self.dataset.continent_count());
                pick(self.dataset.continent_at(continent), rng)
            }
            SelectionPolicy::Uniform => pick(self.dataset.records(), rng),
        };
        Question::from(record)
    }

    /// Build the four options for `correct_capital`: three distinct distractors
    /// drawn without replacement plus the correct capital, uniformly shuffled.
    pub fn generate_options<R: Rng + ?Sized>(
        &self,
        correct_capital: &str,
        rng: &mut R,
    ) -> Result<[String; OPTION_COUNT], GeneratorError> {
        if !self.dataset.contains_capital(correct_capital) {
            return Err(GeneratorError::UnknownCapital(correct_capital.to_string()));
        }

        let pool: Vec<&String> = self
            .dataset
            .capitals()
            .iter()
            .filter(|capital| capital.as_str() != correct_capital)
            .collect();

        if pool.len() < DISTRACTOR_COUNT {
            return Err(GeneratorError::NotEnoughDistractors {
                needed: DISTRACTOR_COUNT,
                available: pool.len(),
            });
        }

        let distractors: Vec<&String> = pool
            .choose_multiple(rng, DISTRACTOR_COUNT)
            .copied()
            .collect();

        let mut options: [String; OPTION_COUNT] = std::array::from_fn(|i| match i {
            0 => correct_capital.to_string(),
            _ => distractors[i - 1].clone(),
        });
        options.shuffle(rng);

        Ok(options)
    }

    /// Pick a question and generate its options.
    pub fn new_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Round, GeneratorError> {
        let question = self.pick_random_country(rng);
        let options = self.generate_options(&question.capital, rng)?;

        debug!(country = %question.country, ?options, "new round");

        Ok(Round { question, options })
    }

    pub fn check_answer(&self, question: &Question, selected: &str) -> bool {
        crate::models::check_answer(question, selected)
    }
}

fn pick<'a, R: Rng + ?Sized>(records: &'a [CountryRecord], rng: &mut R) -> &'a CountryRecord {
    // Continents are never empty once the dataset has been validated.
    &records[rng.gen_range(0..records.len())]
}
