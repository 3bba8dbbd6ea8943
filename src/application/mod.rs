// src/application/mod.rs
pub mod deck;
pub mod session;

pub use deck::Deck;
pub use session::{DeckRepository, DeckSession};
