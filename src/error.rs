// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("No character class selected: enable at least one of lowercase, uppercase, digits, symbols")]
    NoCharacterClassSelected,
    #[error("Requested length {length} is shorter than the {classes} selected character classes")]
    LengthTooShortForClasses { length: usize, classes: usize },
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Persistence failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("History file is corrupt: {0}")]
    CorruptHistory(String),
    #[error("Failed to serialize history: {0}")]
    Serialization(String),
    #[error("No record with id '{id}' found in history")]
    RecordNotFound { id: String },
}

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input handling error: {0}")]
    InputError(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
    #[error("CLI error: {0}")]
    Cli(String),
}

// Result type aliases for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type GeneratorResult<T> = Result<T, GeneratorError>;
pub type StoreResult<T> = Result<T, StoreError>;
