use std::collections::HashSet;
use std::sync::Arc;

use capital_quiz::{
    AppState, CapitalDataset, GeneratorError, Quiz, QuizConfig, QuestionGenerator,
    SelectionPolicy, check_answer, parse_dataset,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SCENARIO: &str = r#"{
    "Europe": {
        "France": { "country": "France", "capital": "Paris" },
        "Spain": { "country": "Spain", "capital": "Madrid" }
    },
    "Asia": {
        "Japan": { "country": "Japan", "capital": "Tokyo" }
    }
}"#;

#[test]
fn three_capital_scenario_fails_fast() {
    let dataset = parse_dataset(SCENARIO, "scenario.json").unwrap();
    let generator = QuestionGenerator::new(Arc::new(dataset), SelectionPolicy::ByContinent);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        generator.generate_options("Paris", &mut rng),
        Err(GeneratorError::NotEnoughDistractors {
            needed: 3,
            available: 2
        })
    );
}

#[test]
fn fourth_capital_makes_scenario_playable() {
    let json = SCENARIO.replacen(
        r#""Asia": {"#,
        r#""Africa": { "Germany": { "country": "Germany", "capital": "Berlin" } },
    "Asia": {"#,
        1,
    );
    let dataset = parse_dataset(&json, "scenario.json").unwrap();
    let generator = QuestionGenerator::new(Arc::new(dataset), SelectionPolicy::Uniform);
    let mut rng = StdRng::seed_from_u64(0);

    let expected: HashSet<&str> = ["Paris", "Madrid", "Tokyo", "Berlin"].into_iter().collect();
    for _ in 0..20 {
        let options = generator.generate_options("Paris", &mut rng).unwrap();
        let got: HashSet<&str> = options.iter().map(String::as_str).collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn embedded_rounds_are_well_formed() {
    let dataset = CapitalDataset::embedded().unwrap();
    let generator = QuestionGenerator::new(dataset.clone(), SelectionPolicy::ByContinent);
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..1_000 {
        let round = generator.new_round(&mut rng).unwrap();
        let distinct: HashSet<&String> = round.options.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert!(check_answer(&round.question, &round.question.capital));
        assert!(
            round
                .options
                .iter()
                .filter(|o| **o != round.question.capital)
                .all(|o| !check_answer(&round.question, o))
        );
        assert!(dataset.records().iter().any(|r| r.country == round.question.country
            && r.capital == round.question.capital));
    }
}

#[test]
fn scripted_session_keeps_score() {
    let config = QuizConfig {
        seed: Some(9),
        rounds: std::num::NonZeroUsize::new(5),
        ..QuizConfig::default()
    };
    let mut quiz = Quiz::embedded(config).unwrap();
    let app = quiz.app_mut();

    app.start_quiz().unwrap();
    let mut expected_score = 0;
    for i in 0..5 {
        assert_eq!(app.state, AppState::Asking);
        let round = app.current_round().unwrap().clone();
        let right = round
            .options
            .iter()
            .position(|o| *o == round.question.capital)
            .unwrap();

        // answer every other question correctly
        let pick = if i % 2 == 0 { right } else { (right + 1) % 4 };
        app.select_option(pick);
        let correct = app.submit_answer().unwrap();
        assert_eq!(correct, i % 2 == 0);
        if correct {
            expected_score += 1;
        }
        assert_eq!(app.score(), expected_score);
        app.advance().unwrap();
    }

    assert_eq!(app.state, AppState::Summary);
    assert_eq!(app.score(), 3);
    assert_eq!(app.history().len(), 5);
}
