// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the deck file (optional, overrides config)
    #[arg(short, long, value_name = "DECK", global = true)]
    pub deck: Option<PathBuf>,

    /// Path to the config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new flashcard to the top of the deck
    Add {
        /// Front text (LaTeX shorthand: `//` for line breaks, `$...$` inline math)
        #[arg(value_name = "FRONT")]
        front: String,

        /// Back text
        #[arg(value_name = "BACK")]
        back: String,
    },

    /// Replace a card's front and back, keeping its tags and position
    Edit {
        /// Card index as shown by `list`
        #[arg(value_name = "INDEX")]
        index: usize,

        #[arg(value_name = "FRONT")]
        front: String,

        #[arg(value_name = "BACK")]
        back: String,
    },

    /// Delete the card at the given index
    Delete {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// List cards with their indices and tags
    List {
        /// Only show cards carrying this tag
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,

        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a card's tags; new tags join the global registry
    Tag {
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Tags to assign (replaces the card's current tags)
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List all known tags
    Tags {
        /// Register a tag without assigning it to a card
        #[arg(long, value_name = "TAG")]
        add: Option<String>,
    },

    /// Manage renderer macros
    Macro {
        #[command(subcommand)]
        command: MacroCommand,
    },

    /// Export the deck snapshot as pretty-printed JSON
    Export {
        /// Output path (default: export filename from config)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Import a snapshot; keys present in the file replace matching state
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Render the deck as HTML and open it in the browser
    View {
        /// Only render cards carrying this tag
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,

        /// Print the HTML to stdout instead of opening the browser
        #[arg(long)]
        html: bool,
    },

    /// Render a single card
    Show {
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Print the HTML to stdout instead of opening the browser
        #[arg(long)]
        html: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MacroCommand {
    /// Add a macro, or update the one with the same command
    Add {
        /// Command, e.g. \C
        #[arg(value_name = "COMMAND")]
        command: String,

        /// Definition, e.g. \mathbb{C}
        #[arg(value_name = "DEFINITION")]
        definition: String,

        /// Replace the macro at this list index instead of matching by command
        #[arg(short, long, value_name = "INDEX")]
        index: Option<usize>,
    },

    /// Remove the macro at the given index
    Remove {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// List macros with their indices
    List,
}
