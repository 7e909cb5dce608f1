/// Screen the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    /// Waiting for the player to pick one of the four options.
    Asking,
    /// The pick has been checked; feedback is on screen.
    Answered { correct: bool },
    Summary,
}
