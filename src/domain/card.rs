// src/domain/card.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    /// Imported decks may omit the tags key entirely.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Tag filter for the card list and the viewer.
///
/// The sentinel values `All` and `No Filter` both bypass filtering; anything
/// else selects cards carrying that exact tag (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    pub fn from_selection(value: &str) -> Self {
        match value {
            "All" | "No Filter" => TagFilter::All,
            tag => TagFilter::Tag(tag.to_string()),
        }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => card.has_tag(tag),
        }
    }
}

impl From<Option<&str>> for TagFilter {
    fn from(value: Option<&str>) -> Self {
        match value {
            None => TagFilter::All,
            Some(tag) => TagFilter::from_selection(tag),
        }
    }
}
