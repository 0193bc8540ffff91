use thiserror::Error;

/// Errors that end a CLI session.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read or understood
    #[error("Settings error: {0}")]
    Settings(String),
}

impl CliError {
    pub(crate) fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
