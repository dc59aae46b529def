use thiserror::Error;

/// Errors raised while setting up a tournament or entering results
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("At least {required} players are needed for {tables} table(s), got {actual}")]
    NotEnoughPlayers {
        required: usize,
        tables: usize,
        actual: usize,
    },

    #[error("At least one table is required")]
    NoTables,

    #[error("Scores must add up to exactly {expected}, got {actual}")]
    InvalidScoreTotal { expected: u32, actual: u32 },

    #[error("Total matches cannot exceed {max}, got {actual}")]
    TooManyMatches { max: u32, actual: u32 },

    #[error("Bonus points per match cannot exceed {max}, got {actual}")]
    InvalidBonusPoints { max: u32, actual: u32 },

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("A player named '{0}' is already on the roster")]
    DuplicatePlayerName(String),

    #[error("The roster contains no player names")]
    EmptyRoster,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
