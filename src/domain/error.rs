// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Card not found at index {0}")]
    CardNotFound(usize),
    #[error("Macro not found at index {0}")]
    MacroNotFound(usize),
    #[error("Error importing flashcards: {0}")]
    InvalidSnapshot(String),
    #[error("Deck storage error: {0}")]
    StorageError(String),
}
