//! Terminal presenter: draws the visible list, stats and hints to a writer.

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::json;

use watchlist_core::{Hint, HintKind, MovieRecord, Presenter, Stats};

/// How updates are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputMode {
    /// Human-readable table, colored when enabled and supported.
    Table { color: bool },
    /// One JSON object per line.
    Json,
}

pub(crate) struct TerminalPresenter<W> {
    out: W,
    mode: OutputMode,
}

impl<W: Write> TerminalPresenter<W> {
    pub(crate) fn new(out: W, mode: OutputMode) -> Self {
        Self { out, mode }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn color(&self) -> bool {
        matches!(self.mode, OutputMode::Table { color: true })
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write output: {}", e);
        }
    }

    fn emit_json(&mut self, value: serde_json::Value) {
        self.emit(&value.to_string());
    }

    fn format_row(&self, record: &MovieRecord) -> String {
        let id = format!("{:>4}", record.id.to_string());
        let mark = if record.watched { "[x]" } else { "[ ]" };
        let label = record.label();
        if !self.color() {
            return format!("{}  {} {}", id, mark, label);
        }
        let mark = if record.watched {
            mark.if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            mark.to_string()
        };
        let label = if record.watched {
            label.if_supports_color(Stdout, |t| t.dimmed()).to_string()
        } else {
            label.if_supports_color(Stdout, |t| t.bold()).to_string()
        };
        format!(
            "{}  {} {}",
            id.if_supports_color(Stdout, |t| t.cyan()),
            mark,
            label
        )
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, visible: &[&MovieRecord]) {
        if self.mode == OutputMode::Json {
            self.emit_json(json!({ "visible": visible }));
            return;
        }
        if visible.is_empty() {
            self.emit("  (no movies to show)");
            return;
        }
        for record in visible {
            let row = self.format_row(record);
            self.emit(&row);
        }
    }

    fn show_stats(&mut self, stats: Stats) {
        if self.mode == OutputMode::Json {
            self.emit_json(json!({ "stats": stats }));
            return;
        }
        let line = format!(
            "Total: {}  Watched: {}  Remaining: {}",
            stats.total, stats.watched, stats.remaining
        );
        let line = if Self::color(self) {
            line.if_supports_color(Stdout, |t| t.dimmed()).to_string()
        } else {
            line
        };
        self.emit(&line);
    }

    fn show_hint(&mut self, hint: &Hint) {
        if self.mode == OutputMode::Json {
            self.emit_json(json!({ "hint": hint }));
            return;
        }
        let tag = match hint.kind {
            HintKind::Info => "info",
            HintKind::Ok => "ok",
            HintKind::Warn => "warn",
        };
        let tag = format!("[{}]", tag);
        let tag = if Self::color(self) {
            match hint.kind {
                HintKind::Info => tag.if_supports_color(Stdout, |t| t.cyan()).to_string(),
                HintKind::Ok => tag.if_supports_color(Stdout, |t| t.green()).to_string(),
                HintKind::Warn => tag.if_supports_color(Stdout, |t| t.yellow()).to_string(),
            }
        } else {
            tag
        };
        let text = format!("{} {}", tag, hint.message);
        self.emit(&text);
    }
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
