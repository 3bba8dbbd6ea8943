// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::application::DeckSession;
use crate::cli::args::{Args, Command, MacroCommand};
use crate::constants::{CONFIG_FILE_NAME, DECK_FILE_NAME};
use crate::domain::TagFilter;
use crate::infrastructure::renderer::PreviewRenderer;
use crate::infrastructure::{Config, JsonDeckStore};
use crate::ports::HtmlPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting texcards with arguments");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default(default_config_path()?)?,
    };

    let deck_path = resolve_deck_path(&args, &config)?;
    debug!(?deck_path, "Using deck file");

    let store = JsonDeckStore::new(&deck_path);
    let mut session = DeckSession::open(store)?;
    let presenter = HtmlPresenter::new(config.katex.base_url.as_str());

    match args.command {
        Command::Add { front, back } => {
            session.deck_mut().submit_card(front, back);
            session.commit()?;
            info!(cards = session.deck().cards().len(), "Added card");
            println!("Added card 0 ({} cards total)", session.deck().cards().len());
        }

        Command::Edit { index, front, back } => {
            session.deck_mut().edit_card(index, front, back)?;
            session.commit()?;
            println!("Updated card {index}");
        }

        Command::Delete { index } => {
            let removed = session.deck_mut().delete_card(index)?;
            session.commit()?;
            println!("Deleted card {index}: {}", first_line(&removed.front));
        }

        Command::List { tag, json } => {
            let filter = TagFilter::from(tag.as_deref());
            let cards = session.deck().filter(&filter);

            if json {
                let entries: Vec<_> = cards
                    .iter()
                    .map(|(index, card)| {
                        serde_json::json!({
                            "index": index,
                            "front": card.front,
                            "back": card.back,
                            "tags": card.tags,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if cards.is_empty() {
                println!("No flashcards available.");
            } else {
                for (index, card) in cards {
                    let tags = if card.tags.is_empty() {
                        "None".to_string()
                    } else {
                        card.tags.join(", ")
                    };
                    println!("{index:>4}  {}  [{tags}]", first_line(&card.front));
                }
            }
        }

        Command::Tag { index, tags } => {
            session.deck_mut().save_tags(index, tags)?;
            session.commit()?;
            let card = session.deck().card(index)?;
            println!("Card {index} tags: {}", card.tags.join(", "));
        }

        Command::Tags { add } => match add {
            Some(tag) => {
                let added = session.deck_mut().add_tag(&tag);
                if added {
                    session.commit()?;
                    println!("Added tag: {}", tag.trim());
                } else {
                    println!("Tag ignored (blank or already known)");
                }
            }
            None => {
                for tag in session.deck().all_tags() {
                    println!("{tag}");
                }
            }
        },

        Command::Macro { command } => match command {
            MacroCommand::Add {
                command,
                definition,
                index,
            } => {
                let command = command.trim();
                let definition = definition.trim();
                if command.is_empty() || definition.is_empty() {
                    bail!("Macro command and definition must not be blank");
                }
                session
                    .deck_mut()
                    .add_or_update_macro(command, definition, index)?;
                session.commit()?;
                println!("{command} = {definition}");
            }
            MacroCommand::Remove { index } => {
                let removed = session.deck_mut().remove_macro(index)?;
                session.commit()?;
                println!("Removed macro {}: {}", index, removed.command);
            }
            MacroCommand::List => {
                for (index, entry) in session.deck().macros().iter().enumerate() {
                    println!("{index:>4}  {} = {}", entry.command, entry.definition);
                }
            }
        },

        Command::Export { path } => {
            let target = path.unwrap_or_else(|| PathBuf::from(&config.export.filename));
            JsonDeckStore::write_snapshot(session.deck(), &target)?;
            info!(path = %target.display(), "Exported snapshot");
            println!(
                "Exported {} cards to {}",
                session.deck().cards().len(),
                target.display()
            );
        }

        Command::Import { path } => {
            // Parse first; a malformed file must leave the deck untouched.
            let snapshot = JsonDeckStore::read_snapshot(&path)?;
            session.deck_mut().apply(snapshot);
            session.commit()?;
            println!(
                "Imported {} cards, {} tags, {} macros",
                session.deck().cards().len(),
                session.deck().all_tags().len(),
                session.deck().macros().len()
            );
        }

        Command::View { tag, html } => {
            let filter = TagFilter::from(tag.as_deref());
            let cards = session.deck().filter(&filter);
            let title = match &filter {
                TagFilter::All => "Flashcards".to_string(),
                TagFilter::Tag(tag) => format!("Flashcards tagged {tag}"),
            };

            let page = presenter.render_deck(&title, &cards, &session.deck().macro_map());
            deliver(&page, html)?;
        }

        Command::Show { index, html } => {
            let card = session.deck().card(index)?;
            let page = presenter.render_card(index, card, &session.deck().macro_map());
            deliver(&page, html)?;
        }
    }

    Ok(())
}

fn deliver(page: &str, to_stdout: bool) -> Result<()> {
    if to_stdout {
        println!("{page}");
        return Ok(());
    }

    let mut renderer = PreviewRenderer::new();
    let temp_path = renderer.create_temp_file(page)?;
    info!(path = %temp_path.display(), "Opening preview in browser");
    renderer.open_in_browser(&temp_path)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Deck path resolution order: `--deck` flag, then a non-empty `[deck] path`
/// in the config, then the platform data directory.
fn resolve_deck_path(args: &Args, config: &Config) -> Result<PathBuf> {
    if let Some(path) = &args.deck {
        return Ok(path.clone());
    }
    if !config.deck.path.is_empty() {
        return Ok(PathBuf::from(&config.deck.path));
    }
    default_deck_path()
}

pub fn default_deck_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(data_dir.join("texcards").join(DECK_FILE_NAME))
}

pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("texcards").join(CONFIG_FILE_NAME))
}
