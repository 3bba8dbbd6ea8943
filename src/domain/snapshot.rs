// src/domain/snapshot.rs
use serde::{Deserialize, Serialize};

use crate::domain::{Flashcard, Macro};

/// The full exportable state: `{ "flashcards", "allTags", "macroList" }`.
///
/// On import any subset of the three keys may be present; a missing key means
/// "leave that part of the state untouched", so each field is optional.
/// Exports always populate all three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<Vec<Flashcard>>,
    #[serde(rename = "allTags", default, skip_serializing_if = "Option::is_none")]
    pub all_tags: Option<Vec<String>>,
    #[serde(rename = "macroList", default, skip_serializing_if = "Option::is_none")]
    pub macro_list: Option<Vec<Macro>>,
}
