// src/domain/mod.rs
pub mod card;
pub mod error;
pub mod macros;
pub mod snapshot;

pub use card::{Flashcard, TagFilter};
pub use error::DomainError;
pub use macros::Macro;
pub use snapshot::Snapshot;
