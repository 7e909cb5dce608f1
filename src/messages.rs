//! Fixed player-facing text for the two supported languages.

use crate::generator::OPTION_COUNT;
use crate::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub fn title(self) -> &'static str {
        match self {
            Language::English => "CAPITALS QUIZ",
            Language::Spanish => "JUEGO DE CAPITALES",
        }
    }

    pub fn prompt(self, question: &Question) -> String {
        match self {
            Language::English => format!("What is the capital of {}?", question.country),
            Language::Spanish => format!("¿Cuál es la capital de {}?", question.country),
        }
    }

    /// Feedback shown after an answer has been checked.
    pub fn feedback(self, question: &Question, correct: bool) -> String {
        match (self, correct) {
            (Language::English, true) => "Correct!".to_string(),
            (Language::Spanish, true) => "¡Correcto!".to_string(),
            (Language::English, false) => format!(
                "Incorrect. The capital of {} is {}.",
                question.country, question.capital
            ),
            (Language::Spanish, false) => format!(
                "Incorrecto. La capital de {} es {}.",
                question.country, question.capital
            ),
        }
    }

    pub fn score_label(self) -> &'static str {
        match self {
            Language::English => "Score",
            Language::Spanish => "Puntuación",
        }
    }

    /// Welcome-screen line: number of rounds (∞ when endless) and options.
    pub fn session_outline(self, rounds: Option<usize>) -> String {
        let rounds = rounds.map_or_else(|| "∞".to_string(), |n| n.to_string());
        match self {
            Language::English => format!("{} rounds · {} options", rounds, OPTION_COUNT),
            Language::Spanish => format!("{} rondas · {} opciones", rounds, OPTION_COUNT),
        }
    }

    pub fn start_hint(self) -> &'static str {
        match self {
            Language::English => "to start",
            Language::Spanish => "para empezar",
        }
    }

    pub fn asking_controls(self) -> &'static str {
        match self {
            Language::English => "j/k navigate  ·  1-4 pick  ·  enter select  ·  q quit",
            Language::Spanish => "j/k mover  ·  1-4 elegir  ·  enter seleccionar  ·  q salir",
        }
    }

    pub fn answered_controls(self) -> &'static str {
        match self {
            Language::English => "enter next question  ·  f summary  ·  q quit",
            Language::Spanish => "enter siguiente pregunta  ·  f resumen  ·  q salir",
        }
    }

    pub fn summary_controls(self) -> &'static str {
        match self {
            Language::English => "j/k scroll  ·  r restart  ·  q quit",
            Language::Spanish => "j/k desplazar  ·  r reiniciar  ·  q salir",
        }
    }

    pub fn results_heading(self) -> &'static str {
        match self {
            Language::English => "RESULTS",
            Language::Spanish => "RESULTADOS",
        }
    }
}
