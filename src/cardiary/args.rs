use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardiary")]
#[command(about = "Link-addressable therapy diary with before/after session cards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the diary documents (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new diary and print its public id
    #[command(alias = "n")]
    Create {
        /// Client reference (e.g. a case number)
        client_ref: String,

        /// Display name
        name: String,

        /// Gender label
        gender: String,
    },

    /// Show a diary and all of its cards
    #[command(alias = "s")]
    Show {
        /// Public id of the diary
        public_id: String,
    },

    /// Append a card to a diary
    #[command(alias = "a")]
    Append {
        /// Public id of the diary
        public_id: String,

        /// Card topic (max 50 characters)
        topic: String,

        /// Session phase: before or after
        phase: String,

        /// Formatted body text, stored verbatim
        body: String,
    },

    /// Edit a card in place
    #[command(alias = "e")]
    Edit {
        /// Public id of the diary
        public_id: String,

        /// Id of the card to edit
        card_id: String,

        /// New topic (max 50 characters)
        topic: String,

        /// New session phase: before or after
        phase: String,

        /// New formatted body text
        body: String,
    },

    /// Remove a card from a diary
    #[command(alias = "rm")]
    Remove {
        /// Public id of the diary
        public_id: String,

        /// Id of the card to remove
        card_id: String,
    },

    /// List all diaries (admin)
    #[command(alias = "ls")]
    List,

    /// Delete a whole diary and its cards (admin)
    Delete {
        /// Public id of the diary
        public_id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
