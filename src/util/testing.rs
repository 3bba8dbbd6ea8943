// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Deck, DeckRepository};
use crate::domain::DomainError;

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// Shared in-memory repository for testing code that depends on
/// DeckRepository, so individual test files don't each define their own mock.
///
/// # Examples
///
/// ```
/// use texcards::util::testing::MockDeckRepository;
/// use texcards::application::Deck;
///
/// let mut seeded = Deck::new();
/// seeded.submit_card("Question", "Answer");
///
/// let mock = MockDeckRepository::builder()
///     .with_deck(seeded)
///     .build();
/// ```
pub struct MockDeckRepository {
    deck: Deck,
    load_failure: Option<String>,
    saved: Option<Deck>,
}

impl MockDeckRepository {
    pub fn builder() -> MockDeckRepositoryBuilder {
        MockDeckRepositoryBuilder::new()
    }

    /// The deck passed to the most recent `save`, if any.
    pub fn saved(&self) -> Option<&Deck> {
        self.saved.as_ref()
    }
}

impl DeckRepository for MockDeckRepository {
    fn load(&self) -> Result<Deck, DomainError> {
        match &self.load_failure {
            Some(message) => Err(DomainError::StorageError(message.clone())),
            None => Ok(self.deck.clone()),
        }
    }

    fn save(&mut self, deck: &Deck) -> Result<(), DomainError> {
        self.saved = Some(deck.clone());
        Ok(())
    }
}

/// Builder for MockDeckRepository
pub struct MockDeckRepositoryBuilder {
    deck: Deck,
    load_failure: Option<String>,
}

impl MockDeckRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            load_failure: None,
        }
    }

    /// Seed the deck returned by `load`
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// Configure `load` to fail with a storage error
    pub fn with_load_failure(mut self, message: impl Into<String>) -> Self {
        self.load_failure = Some(message.into());
        self
    }

    pub fn build(self) -> MockDeckRepository {
        MockDeckRepository {
            deck: self.deck,
            load_failure: self.load_failure,
            saved: None,
        }
    }
}

impl Default for MockDeckRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["html5ever", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
