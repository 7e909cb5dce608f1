//! # capital-quiz
//!
//! A terminal quiz on the capital cities of the world: each round shows a
//! country and four candidate capitals, exactly one of them right.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use capital_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Built-in continent/country/capital table
//!     let quiz = Quiz::embedded(QuizConfig::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The generator can also be used on its own:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use capital_quiz::{CapitalDataset, QuestionGenerator, SelectionPolicy};
//!
//! let dataset = CapitalDataset::from_records([
//!     ("Europe", "France", "Paris"),
//!     ("Europe", "Spain", "Madrid"),
//!     ("Europe", "Germany", "Berlin"),
//!     ("Asia", "Japan", "Tokyo"),
//! ])
//! .unwrap();
//! let generator = QuestionGenerator::new(Arc::new(dataset), SelectionPolicy::Uniform);
//!
//! let round = generator.new_round(&mut rand::thread_rng()).unwrap();
//! assert!(round.options.contains(&round.question.capital));
//! ```

mod app;
mod config;
mod data;
mod error;
mod generator;
mod messages;
mod models;
pub mod terminal;
mod ui;

use std::path::Path;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{AnsweredRound, App};
pub use config::QuizConfig;
pub use data::{
    CapitalDataset, ContinentTable, EMBEDDED_DATASET_LABEL, load_dataset_from_json, parse_dataset,
};
pub use error::{DatasetError, GeneratorError, LoadError, QuizError};
pub use generator::{DISTRACTOR_COUNT, OPTION_COUNT, QuestionGenerator, SelectionPolicy};
pub use messages::Language;
pub use models::{AppState, CountryRecord, Question, Round, check_answer};

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over `dataset`.
    ///
    /// Fails if the dataset has fewer than four capitals.
    pub fn new(dataset: Arc<CapitalDataset>, config: QuizConfig) -> Result<Self, QuizError> {
        let generator = QuestionGenerator::new(dataset, config.policy);
        generator.ensure_playable()?;
        Ok(Self {
            app: App::new(generator, &config),
        })
    }

    /// Create a quiz over the built-in dataset.
    pub fn embedded(config: QuizConfig) -> Result<Self, QuizError> {
        Self::new(CapitalDataset::embedded()?, config)
    }

    /// Load a quiz from a JSON dataset file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use capital_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("capitals.json", QuizConfig::default())
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let dataset = load_dataset_from_json(path)?;
        Self::new(Arc::new(dataset), config)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, GeneratorError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Ok(true);
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key)?,
        AppState::Asking => handle_asking_input(app, key),
        AppState::Answered { .. } => handle_answered_input(app, key)?,
        AppState::Summary => handle_summary_input(app, key),
    }
    Ok(false)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Result<(), GeneratorError> {
    if key == KeyCode::Enter {
        app.start_quiz()?;
    }
    Ok(())
}

fn handle_asking_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ '1'..='4') => app.select_option(c as usize - '1' as usize),
        KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
            app.select_option(c.to_ascii_lowercase() as usize - 'a' as usize)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
        }
        _ => {}
    }
}

fn handle_answered_input(app: &mut App, key: KeyCode) -> Result<(), GeneratorError> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => app.advance()?,
        KeyCode::Char('f') => app.finish(),
        _ => {}
    }
    Ok(())
}

fn handle_summary_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        let config = QuizConfig {
            seed: Some(17),
            ..QuizConfig::default()
        };
        Quiz::embedded(config).unwrap()
    }

    #[test]
    fn test_too_small_dataset_is_rejected_up_front() {
        let dataset = CapitalDataset::from_records([
            ("Europe", "France", "Paris"),
            ("Europe", "Spain", "Madrid"),
            ("Asia", "Japan", "Tokyo"),
        ])
        .unwrap();

        let result = Quiz::new(Arc::new(dataset), QuizConfig::default());
        assert!(matches!(
            result,
            Err(QuizError::Generator(GeneratorError::NotEnoughDistractors { .. }))
        ));
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut quiz = quiz();
        assert!(handle_input(quiz.app_mut(), KeyCode::Char('q')).unwrap());

        handle_input(quiz.app_mut(), KeyCode::Enter).unwrap();
        assert_eq!(quiz.app().state, AppState::Asking);
        assert!(handle_input(quiz.app_mut(), KeyCode::Esc).unwrap());
    }

    #[test]
    fn test_keyboard_round_trip() {
        let mut quiz = quiz();
        let app = quiz.app_mut();

        handle_input(app, KeyCode::Enter).unwrap();
        handle_input(app, KeyCode::Char('c')).unwrap();
        assert_eq!(app.selected_option(), 2);
        handle_input(app, KeyCode::Char('2')).unwrap();
        assert_eq!(app.selected_option(), 1);
        handle_input(app, KeyCode::Char('j')).unwrap();
        assert_eq!(app.selected_option(), 2);

        handle_input(app, KeyCode::Enter).unwrap();
        assert!(matches!(app.state, AppState::Answered { .. }));
        assert_eq!(app.history().len(), 1);

        handle_input(app, KeyCode::Char('n')).unwrap();
        assert_eq!(app.state, AppState::Asking);

        handle_input(app, KeyCode::Char(' ')).unwrap();
        handle_input(app, KeyCode::Char('f')).unwrap();
        assert_eq!(app.state, AppState::Summary);
        assert_eq!(app.history().len(), 2);

        handle_input(app, KeyCode::Char('r')).unwrap();
        assert_eq!(app.state, AppState::Welcome);
    }
}
