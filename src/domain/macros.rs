// src/domain/macros.rs
use serde::{Deserialize, Serialize};

/// A named substitution handed to the math renderer, e.g. `\C` → `\mathbb{C}`.
///
/// Commands are opaque strings; no LaTeX syntax validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    pub command: String,
    pub definition: String,
}

impl Macro {
    pub fn new(command: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            definition: definition.into(),
        }
    }
}
