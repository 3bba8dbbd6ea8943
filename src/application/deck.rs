// src/application/deck.rs
use std::collections::BTreeMap;

use crate::domain::{DomainError, Flashcard, Macro, Snapshot, TagFilter};

/// The full authoring state: cards, the global tag registry, and the macro
/// list. All mutations from the CLI dispatcher land here.
///
/// Invariants kept by this type:
/// - new cards are prepended (most-recent-first), edits stay in place
/// - `all_tags` is append-only and deduplicated (exact, case-sensitive)
/// - macros are unique by command when added without an explicit index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Flashcard>,
    all_tags: Vec<String>,
    macros: Vec<Macro>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    pub fn macros(&self) -> &[Macro] {
        &self.macros
    }

    pub fn card(&self, index: usize) -> Result<&Flashcard, DomainError> {
        self.cards.get(index).ok_or(DomainError::CardNotFound(index))
    }

    /// Add a new card to the top of the deck with no tags.
    pub fn submit_card(&mut self, front: impl Into<String>, back: impl Into<String>) {
        self.cards.insert(0, Flashcard::new(front, back));
    }

    /// Replace a card's front and back in place. Tags and position survive.
    pub fn edit_card(
        &mut self,
        index: usize,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Result<(), DomainError> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or(DomainError::CardNotFound(index))?;
        card.front = front.into();
        card.back = back.into();
        Ok(())
    }

    /// Remove the card at `index`, returning it. No undo.
    pub fn delete_card(&mut self, index: usize) -> Result<Flashcard, DomainError> {
        if index >= self.cards.len() {
            return Err(DomainError::CardNotFound(index));
        }
        Ok(self.cards.remove(index))
    }

    /// Register a tag. Trimmed; empty or already-known tags are ignored.
    /// Returns whether the registry grew.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() || self.all_tags.iter().any(|t| t == trimmed) {
            return false;
        }
        self.all_tags.push(trimmed.to_string());
        true
    }

    /// Replace a card's tag assignment wholesale and merge any new tags into
    /// the global registry. Deselecting a tag never removes it globally.
    pub fn save_tags(&mut self, index: usize, tags: Vec<String>) -> Result<(), DomainError> {
        if index >= self.cards.len() {
            return Err(DomainError::CardNotFound(index));
        }

        let mut assigned: Vec<String> = Vec::with_capacity(tags.len());
        for tag in &tags {
            let trimmed = tag.trim();
            if trimmed.is_empty() || assigned.iter().any(|t| t == trimmed) {
                continue;
            }
            assigned.push(trimmed.to_string());
        }

        for tag in &assigned {
            self.add_tag(tag);
        }
        self.cards[index].tags = assigned;
        Ok(())
    }

    /// Add or update a macro.
    ///
    /// With an explicit `index` the entry at that position is replaced;
    /// otherwise an existing entry with the same command is updated, and a
    /// genuinely new command is appended. Command syntax is not validated.
    pub fn add_or_update_macro(
        &mut self,
        command: &str,
        definition: &str,
        index: Option<usize>,
    ) -> Result<(), DomainError> {
        let entry = Macro::new(command, definition);
        match index {
            Some(i) => {
                let slot = self.macros.get_mut(i).ok_or(DomainError::MacroNotFound(i))?;
                *slot = entry;
            }
            None => {
                if let Some(existing) = self.macros.iter_mut().find(|m| m.command == command) {
                    *existing = entry;
                } else {
                    self.macros.push(entry);
                }
            }
        }
        Ok(())
    }

    pub fn remove_macro(&mut self, index: usize) -> Result<Macro, DomainError> {
        if index >= self.macros.len() {
            return Err(DomainError::MacroNotFound(index));
        }
        Ok(self.macros.remove(index))
    }

    /// Derive the command → definition mapping consumed by the renderer.
    /// Later list entries win on duplicate commands.
    pub fn macro_map(&self) -> BTreeMap<String, String> {
        self.macros
            .iter()
            .map(|m| (m.command.clone(), m.definition.clone()))
            .collect()
    }

    /// Cards passing the filter, paired with their position in the deck so
    /// callers address the right card when editing from a filtered listing.
    pub fn filter(&self, filter: &TagFilter) -> Vec<(usize, &Flashcard)> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| filter.matches(card))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            flashcards: Some(self.cards.clone()),
            all_tags: Some(self.all_tags.clone()),
            macro_list: Some(self.macros.clone()),
        }
    }

    /// Apply an imported snapshot. Each key present replaces the matching
    /// state wholesale; absent keys leave it untouched. The macro map is
    /// derived on demand, so replacing `macro_list` is all that's needed.
    pub fn apply(&mut self, snapshot: Snapshot) {
        if let Some(cards) = snapshot.flashcards {
            self.cards = cards;
        }
        if let Some(tags) = snapshot.all_tags {
            self.all_tags = tags;
        }
        if let Some(macros) = snapshot.macro_list {
            self.macros = macros;
        }
    }
}
