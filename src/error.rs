use thiserror::Error;

/// Main error type for the stats bot
#[derive(Error, Debug)]
pub enum NbaBotError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response from stats provider: {0}")]
    InvalidResponse(String),

    // Query errors
    #[error("Insufficient arguments: expected at least {needed}, got {got}")]
    InsufficientArguments { needed: usize, got: usize },

    #[error("Invalid season year: {0}")]
    InvalidSeasonYear(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // Lookup errors
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Ambiguous player name: {name} matches {matches} players")]
    AmbiguousPlayerName { name: String, matches: usize },

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Draft pick not found: {year} pick {pick}")]
    DraftPickNotFound { year: String, pick: String },

    // Game log errors
    #[error("Game log is empty")]
    EmptyGameLog,

    #[error("Malformed game log: game {game_id} has {rows} rows for {teams} teams, expected 2 rows for 2 teams")]
    MalformedGameLog {
        game_id: String,
        rows: usize,
        teams: usize,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl NbaBotError {
    /// Text shown to the chat user for this failure.
    ///
    /// Lookup and argument problems get a specific hint; anything coming
    /// from the provider or the runtime is reported as a generic failure.
    pub fn user_message(&self) -> String {
        match self {
            NbaBotError::InsufficientArguments { .. } => {
                "Please enter the player's full name.".to_string()
            }
            NbaBotError::InvalidSeasonYear(year) => {
                format!("{year} is not a valid season. Use the starting year, e.g. 2018 for 2018-19.")
            }
            NbaBotError::PlayerNotFound { .. } => {
                "The player you asked for is either inactive or your query cannot be followed."
                    .to_string()
            }
            NbaBotError::AmbiguousPlayerName { name, matches } => {
                format!("{matches} players are named {name}. Try adding a suffix.")
            }
            NbaBotError::TeamNotFound(_) => {
                "The team you are looking for does not exist.".to_string()
            }
            NbaBotError::DraftPickNotFound { .. } => {
                "The draft pick you entered does not exist in the databases.".to_string()
            }
            NbaBotError::EmptyGameLog => "Player did not play this season.".to_string(),
            NbaBotError::InvalidArgument(reason) => reason.clone(),
            NbaBotError::InvalidDate(_) => {
                "Improper date format. Please use YYYY-MM-DD.".to_string()
            }
            NbaBotError::UnknownCommand(name) => {
                format!("Unknown command `{name}`. Use help to list commands.")
            }
            _ => "Something went wrong while fetching stats. Try again later.".to_string(),
        }
    }
}

/// Result type alias for NbaBotError
pub type Result<T> = std::result::Result<T, NbaBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_lookup_errors() {
        let err = NbaBotError::PlayerNotFound {
            name: "james hardn".into(),
        };
        assert!(err.user_message().contains("inactive"));

        let err = NbaBotError::InsufficientArguments { needed: 2, got: 1 };
        assert_eq!(err.user_message(), "Please enter the player's full name.");
    }

    #[test]
    fn test_malformed_log_is_generic_failure() {
        let err = NbaBotError::MalformedGameLog {
            game_id: "0021900001".into(),
            rows: 1,
            teams: 1,
        };
        assert!(err.to_string().contains("0021900001"));
        assert!(err.user_message().starts_with("Something went wrong"));
    }
}
