mod question;
mod state;

pub use question::{CountryRecord, Question, Round, check_answer};
pub use state::AppState;
