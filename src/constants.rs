// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Default filename for snapshot exports when no path is given.
///
/// Matches the filename of the download fallback in the original web tool, so
/// decks exported there and here are interchangeable by default.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_EXPORT_FILENAME: &str = "flashcards.json";

/// Filename of the working deck inside the data directory.
///
/// Used in: `lib.rs`
pub const DECK_FILE_NAME: &str = "deck.json";

/// Filename of the TOML configuration file inside the config directory.
///
/// Used in: `lib.rs`
pub const CONFIG_FILE_NAME: &str = "texcards.toml";

/// Base URL of the KaTeX distribution loaded by generated preview pages.
///
/// The page pulls `katex.min.css`, `katex.min.js` and the auto-render
/// extension relative to this base. Overridable via the `[katex]` config
/// section for offline mirrors.
///
/// Used in: `infrastructure/config.rs`, `ports/html.rs`
pub const DEFAULT_KATEX_BASE: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.21/dist";

/// Delay in milliseconds after writing the HTML file before opening the
/// browser.
///
/// On macOS, the browser needs a brief moment for the file to be fully
/// written and indexed before opening. Without this delay, the browser may
/// open an empty or incomplete file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
