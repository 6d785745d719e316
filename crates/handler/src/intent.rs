pub const FALLBACK_RESPONSE: &str =
    "I can tell you the weather or a joke! Try asking about weather or jokes.";

/// What the user is asking for, decided by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Weather,
    Joke,
    Fallback,
}

impl Intent {
    /// Weather is checked first, so a query mentioning both gets the weather.
    pub fn classify(query: &str) -> Self {
        if query.contains("weather") {
            Intent::Weather
        } else if query.contains("joke") {
            Intent::Joke
        } else {
            Intent::Fallback
        }
    }
}
