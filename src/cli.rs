use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Create an account and start a session
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Log in with an existing account
    Login {
        email: String,
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Add a note
    Add {
        title: String,

        #[arg(default_value = "")]
        description: String,
    },

    /// List notes, optionally filtered by a substring of title or description
    List {
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single note
    Show {
        id: String,
    },

    /// Edit a note's title and/or description
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a note
    Delete {
        id: String,
    },

    /// Show note counts
    Stats,
}
