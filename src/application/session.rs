// src/application/session.rs
use crate::application::Deck;
use crate::domain::DomainError;

pub trait DeckRepository {
    /// Load the working deck. A missing backing file yields an empty deck.
    fn load(&self) -> Result<Deck, DomainError>;

    /// Persist the working deck.
    fn save(&mut self, deck: &Deck) -> Result<(), DomainError>;
}

/// One CLI invocation's view of the deck: load on open, mutate through the
/// deck, write back on commit. Commands that fail before commit leave the
/// stored state untouched.
pub struct DeckSession<R: DeckRepository> {
    repository: R,
    deck: Deck,
}

impl<R: DeckRepository> DeckSession<R> {
    pub fn open(repository: R) -> Result<Self, DomainError> {
        let deck = repository.load()?;
        Ok(Self { repository, deck })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn commit(&mut self) -> Result<(), DomainError> {
        self.repository.save(&self.deck)
    }
}
