use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Random source request timed out after {timeout_secs}s")]
    RandomTimeout { timeout_secs: u64 },

    #[error("Random source request failed: {0}")]
    RandomTransport(#[source] reqwest::Error),

    #[error("Random source returned a non-numeric payload: {payload}")]
    RandomParse { payload: String },

    #[error("Combatant roster is full, cannot prep another meal")]
    RosterFull,

    #[error("Two combatants must be prepped before a battle")]
    InsufficientCombatants,

    #[error("Meal with id {id} not found")]
    MealNotFound { id: u64 },

    #[error("Meal with name '{name}' not found")]
    MealNotFoundByName { name: String },

    #[error("Meal with id {id} has been deleted")]
    MealDeleted { id: u64 },

    #[error("Meal with name '{name}' already exists")]
    DuplicateMealName { name: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
