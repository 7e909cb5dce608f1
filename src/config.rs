use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generator::SelectionPolicy;
use crate::messages::Language;

/// Session settings, usually filled from the command line.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    pub policy: SelectionPolicy,
    /// Fixed seed for reproducible sessions; entropy when `None`.
    pub seed: Option<u64>,
    /// Stop after this many answers; endless when `None`.
    pub rounds: Option<NonZeroUsize>,
    pub language: Language,
}

impl QuizConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
