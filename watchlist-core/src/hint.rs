//! Short user-facing status messages.

use serde::Serialize;

/// Severity of a hint, used by presenters to pick a color or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Info,
    Ok,
    Warn,
}

/// A message for the user with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub message: String,
    pub kind: HintKind,
}

impl Hint {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: HintKind::Info,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: HintKind::Ok,
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: HintKind::Warn,
        }
    }
}
