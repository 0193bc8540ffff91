//! Line-oriented command shell driving a [`Session`].

use std::io::{self, BufRead, Write};

use clap::Parser;
use clap::error::ErrorKind;

use watchlist_core::{Hint, Presenter, RandomSource, Session};

use crate::cli_types::{ShellCommand, ShellLine};
use crate::error::CliError;

/// Why the shell stopped reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellExit {
    Quit,
    EndOfInput,
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    ShellLine::try_parse_from(trimmed.split_whitespace()).map(|parsed| Some(parsed.command))
}

/// Turn a clap parse failure into a hint. Help requests are informational.
fn hint_for_parse_error(err: &clap::Error) -> Hint {
    let text = err.render().to_string();
    let text = text.trim_end();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Hint::info(text)
        }
        _ => Hint::warn(text),
    }
}

/// Read commands until `quit` or end of input, dispatching each to the session.
///
/// When `prompt` is set a `> ` prompt is written to stderr before every line.
pub(crate) fn run_shell<I, P, R>(
    mut input: I,
    session: &mut Session<P, R>,
    prompt: bool,
) -> Result<ShellExit, CliError>
where
    I: BufRead,
    P: Presenter,
    R: RandomSource,
{
    let mut line = String::new();
    loop {
        if prompt {
            let mut stderr = io::stderr();
            write!(stderr, "> ")?;
            stderr.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(ShellExit::EndOfInput);
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                log::debug!("Command: {:?}", command);
                match command.into_intent() {
                    Some(intent) => session.dispatch(intent),
                    None => return Ok(ShellExit::Quit),
                }
            }
            Err(e) => {
                let hint = hint_for_parse_error(&e);
                session.presenter_mut().show_hint(&hint);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
