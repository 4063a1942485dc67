use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts", version)]
#[command(about = "Keep a small list of contacts in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file to use (overrides CONTACTS_FILE and the config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "n")]
    Add {
        name: String,

        /// Ten digits, no separators
        phone: String,

        email: Option<String>,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Search by name (any case) or phone digits
    #[command(alias = "s")]
    Search {
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Index shown by `list`
        index: Option<String>,
    },

    /// Replace a contact's name, phone and email
    #[command(alias = "e")]
    Update {
        /// Index shown by `list`
        index: String,

        name: String,

        phone: String,

        email: Option<String>,
    },

    /// Show one contact
    #[command(alias = "v")]
    View {
        /// Index shown by `list`
        index: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, log-level, log-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
