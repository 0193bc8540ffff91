//! watchlist CLI
//!
//! Interactive movie watch-list for a single terminal session.

mod cli_types;
mod error;
mod logger;
mod presenter;
mod settings;
mod shell;

use std::io::{self, IsTerminal};

use clap::Parser;

use watchlist_core::{Catalog, RngSource, Session};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::presenter::{OutputMode, TerminalPresenter};
use crate::settings::{Settings, settings_path};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_file = cli.settings.clone().unwrap_or_else(settings_path);
    let settings = Settings::load(&settings_file)?;

    let filter = match cli.filter {
        Some(filter) => Some(filter),
        None => settings.filter()?,
    };
    let rng = match cli.seed.or(settings.pick.seed) {
        Some(seed) => {
            log::debug!("Using pick seed {}", seed);
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table {
            color: !cli.no_color && settings.display.color.unwrap_or(true),
        }
    };

    let mut catalog = Catalog::new();
    if let Some(filter) = filter {
        catalog.set_status_filter(filter);
    }

    let presenter = TerminalPresenter::new(io::stdout().lock(), mode);
    let mut session = Session::with_catalog(catalog, presenter, rng);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        log::info!("Type 'help' for commands, 'quit' to leave.");
    }

    session.refresh();
    let exit = shell::run_shell(stdin.lock(), &mut session, interactive)?;

    let stats = session.catalog().stats();
    log::debug!(
        "Session ended ({:?}): {} movies, {} watched",
        exit,
        stats.total,
        stats.watched
    );
    Ok(())
}
