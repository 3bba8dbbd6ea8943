// src/infrastructure/store.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::application::{Deck, DeckRepository};
use crate::domain::{DomainError, Snapshot};

/// File-backed deck storage using the snapshot JSON format.
///
/// The same `{ flashcards, allTags, macroList }` document serves as both the
/// working deck on disk and the export/import interchange format, so an
/// exported file can be dropped in as a deck file directly.
#[derive(Debug)]
pub struct JsonDeckStore {
    path: PathBuf,
}

impl JsonDeckStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse a snapshot file. Parse failures surface the serde
    /// message so the user sees what was wrong with the document.
    pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, DomainError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| DomainError::InvalidSnapshot(e.to_string()))
    }

    /// Write a deck's snapshot as pretty-printed JSON.
    #[instrument(level = "debug", skip(deck))]
    pub fn write_snapshot(deck: &Deck, path: impl AsRef<Path> + std::fmt::Debug) -> Result<()> {
        let json = serde_json::to_string_pretty(&deck.snapshot())
            .context("Failed to serialize deck snapshot")?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write snapshot to {}", path.as_ref().display()))?;

        debug!(path = %path.as_ref().display(), "Wrote snapshot");
        Ok(())
    }
}

impl DeckRepository for JsonDeckStore {
    fn load(&self) -> Result<Deck, DomainError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No deck file yet, starting empty");
            return Ok(Deck::new());
        }

        let snapshot = Self::read_snapshot(&self.path)?;
        let mut deck = Deck::new();
        deck.apply(snapshot);
        Ok(deck)
    }

    fn save(&mut self, deck: &Deck) -> Result<(), DomainError> {
        Self::write_snapshot(deck, &self.path)
            .map_err(|e| DomainError::StorageError(format!("{e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new();
        deck.submit_card("older", "o");
        deck.submit_card("What is $e^{i\\pi}$?", "$-1$");
        deck.save_tags(0, vec!["analysis".to_string()]).unwrap();
        deck.add_or_update_macro(r"\C", r"\mathbb{C}", None).unwrap();
        deck
    }

    #[test]
    fn given_missing_deck_file_when_loading_then_returns_empty_deck() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDeckStore::new(temp_dir.path().join("deck.json"));

        let deck = store.load().unwrap();

        assert!(deck.cards().is_empty());
        assert!(deck.all_tags().is_empty());
        assert!(deck.macros().is_empty());
    }

    #[test]
    fn given_saved_deck_when_loading_then_state_deep_equal() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonDeckStore::new(temp_dir.path().join("deck.json"));
        let deck = sample_deck();

        store.save(&deck).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, deck);
    }

    #[test]
    fn given_deck_in_nested_directory_when_saving_then_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/deck.json");
        let mut store = JsonDeckStore::new(&path);

        store.save(&sample_deck()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn given_exported_file_when_inspecting_then_pretty_printed_with_documented_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");

        JsonDeckStore::write_snapshot(&sample_deck(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains("\n  ")); // pretty-printed
        assert!(content.contains(r#""flashcards""#));
        assert!(content.contains(r#""allTags""#));
        assert!(content.contains(r#""macroList""#));
    }

    #[test]
    fn given_malformed_json_when_reading_snapshot_then_invalid_snapshot_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonDeckStore::read_snapshot(&path);

        assert!(matches!(result, Err(DomainError::InvalidSnapshot(_))));
    }

    #[test]
    fn given_missing_file_when_reading_snapshot_then_storage_error() {
        let result = JsonDeckStore::read_snapshot("/nonexistent/snapshot.json");

        assert!(matches!(result, Err(DomainError::StorageError(_))));
    }

    #[test]
    fn given_corrupt_deck_file_when_loading_then_error_not_empty_deck() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deck.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = JsonDeckStore::new(&path);

        let result = store.load();

        assert!(result.is_err());
    }
}
