//! CLI type definitions: process arguments and shell command lines.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use watchlist_core::{Intent, MovieId, StatusFilter};

#[derive(Parser)]
#[command(name = "watchlist")]
#[command(
    about = "Keep a movie watch-list for one session",
    long_about = "Reads commands from stdin, one per line, and prints the list, \
                  stats and hints after each. Type 'help' for the command list."
)]
pub(crate) struct Cli {
    /// Seed for random picks (makes 'pick' deterministic)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial status filter: all, watched or unwatched
    #[arg(short, long)]
    pub filter: Option<StatusFilter>,

    /// Print one JSON object per update instead of a table
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file to use instead of the default location
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors in the log
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "watchlist",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    /// Add a movie (e.g. add the iron giant -y 1999)
    Add {
        /// Release year (1888-2100)
        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<String>,

        /// Title words
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Mark a movie watched or unwatched
    #[command(visible_alias = "watch")]
    Toggle {
        /// Movie id as shown in the list (e.g. 3 or #3)
        id: MovieId,
    },

    /// Remove a movie from the list
    #[command(visible_alias = "rm")]
    Remove {
        /// Movie id as shown in the list (e.g. 3 or #3)
        id: MovieId,
    },

    /// Show all, watched or unwatched movies
    Filter {
        status: StatusFilter,
    },

    /// Only show titles containing this text (no text clears the search)
    Search {
        text: Vec<String>,
    },

    /// Suggest a random movie from the visible list
    Pick,

    /// Show the list again
    #[command(visible_alias = "ls")]
    List,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

impl ShellCommand {
    /// The session intent for this command, or `None` for `quit`.
    pub(crate) fn into_intent(self) -> Option<Intent> {
        let intent = match self {
            Self::Add { year, title } => Intent::Add {
                title: title.join(" "),
                year,
            },
            Self::Toggle { id } => Intent::Toggle(id),
            Self::Remove { id } => Intent::Remove(id),
            Self::Filter { status } => Intent::SetFilter(status),
            Self::Search { text } => Intent::SetSearch(text.join(" ")),
            Self::Pick => Intent::Pick,
            Self::List => Intent::Refresh,
            Self::Quit => return None,
        };
        Some(intent)
    }
}
