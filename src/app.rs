use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use tracing::info;

use crate::config::QuizConfig;
use crate::error::GeneratorError;
use crate::generator::{OPTION_COUNT, QuestionGenerator};
use crate::messages::Language;
use crate::models::{AppState, Question, Round};

/// One answered question, kept for the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredRound {
    pub question: Question,
    pub selected: String,
    pub correct: bool,
}

/// In-memory game session: current round, selection and score.
pub struct App {
    pub state: AppState,
    generator: QuestionGenerator,
    rng: StdRng,
    language: Language,
    round_limit: Option<NonZeroUsize>,
    round: Option<Round>,
    selected_option: usize,
    score: usize,
    history: Vec<AnsweredRound>,
    result_scroll: usize,
}

impl App {
    pub fn new(generator: QuestionGenerator, config: &QuizConfig) -> Self {
        Self {
            state: AppState::Welcome,
            generator,
            rng: config.rng(),
            language: config.language,
            round_limit: config.rounds,
            round: None,
            selected_option: 0,
            score: 0,
            history: Vec::new(),
            result_scroll: 0,
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// 1-based number of the round on screen.
    pub fn round_number(&self) -> usize {
        match self.state {
            AppState::Asking => self.history.len() + 1,
            _ => self.history.len(),
        }
    }

    pub fn round_limit(&self) -> Option<usize> {
        self.round_limit.map(NonZeroUsize::get)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn history(&self) -> &[AnsweredRound] {
        &self.history
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Feedback text for the last answer, while it is on screen.
    pub fn feedback(&self) -> Option<String> {
        match (self.state, self.history.last()) {
            (AppState::Answered { correct }, Some(last)) => {
                Some(self.language.feedback(&last.question, correct))
            }
            _ => None,
        }
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % OPTION_COUNT;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    pub fn select_option(&mut self, index: usize) {
        if index < OPTION_COUNT {
            self.selected_option = index;
        }
    }

    pub fn start_quiz(&mut self) -> Result<(), GeneratorError> {
        info!(policy = ?self.generator.policy(), "quiz started");
        self.next_round()
    }

    /// Check the selected option against the current question.
    ///
    /// Returns `None` when no question is waiting for an answer.
    pub fn submit_answer(&mut self) -> Option<bool> {
        if self.state != AppState::Asking {
            return None;
        }
        let round = self.round.as_ref()?;

        let selected = round.options[self.selected_option].clone();
        let correct = self.generator.check_answer(&round.question, &selected);
        if correct {
            self.score += 1;
        }

        info!(
            country = %round.question.country,
            %selected,
            correct,
            score = self.score,
            "answer submitted"
        );

        self.history.push(AnsweredRound {
            question: round.question.clone(),
            selected,
            correct,
        });
        self.state = AppState::Answered { correct };
        Some(correct)
    }

    /// Move on from the feedback screen: next question, or the summary once
    /// the round limit has been reached.
    pub fn advance(&mut self) -> Result<(), GeneratorError> {
        if !matches!(self.state, AppState::Answered { .. }) {
            return Ok(());
        }

        match self.round_limit() {
            Some(limit) if self.history.len() >= limit => {
                self.finish();
                Ok(())
            }
            _ => self.next_round(),
        }
    }

    pub fn finish(&mut self) {
        info!(
            score = self.score,
            answered = self.history.len(),
            "quiz finished"
        );
        self.round = None;
        self.result_scroll = 0;
        self.state = AppState::Summary;
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.history.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.round = None;
        self.selected_option = 0;
        self.score = 0;
        self.history.clear();
        self.result_scroll = 0;
    }

    fn next_round(&mut self) -> Result<(), GeneratorError> {
        self.round = Some(self.generator.new_round(&mut self.rng)?);
        self.selected_option = 0;
        self.state = AppState::Asking;
        Ok(())
    }
}
