//! # Medi Wizard UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal presentation of wizard replies. Replies carry a small markup
//! convention: `**text**` marks emphasis, and `\n` separates paragraphs. This
//! module turns that into something a terminal can show.
//!
//! - `MarkupStyle::Ansi` renders emphasis spans as bold ANSI text.
//! - `MarkupStyle::Raw` leaves the text untouched, which keeps piped output
//!   machine-readable.
//!
//! Emphasis never spans lines: an unmatched `**` is printed as-is.
//!
use std::io::IsTerminal;

/// ANSI escape code to start bold text formatting.
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting (ends bolding).
const BOLD_END: &str = "\x1b[0m";
const EMPHASIS: &str = "**";

/// How reply markup is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStyle {
    Raw,
    Ansi,
}

impl MarkupStyle {
    /// `Ansi` when stdout is a terminal, `Raw` otherwise.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            MarkupStyle::Ansi
        } else {
            MarkupStyle::Raw
        }
    }
}

/// Renders reply text for display.
pub fn render(text: &str, style: MarkupStyle) -> String {
    match style {
        MarkupStyle::Raw => text.to_string(),
        MarkupStyle::Ansi => text
            .split('\n')
            .map(render_line_ansi)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_line_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find(EMPHASIS) {
        let after_open = &rest[open + EMPHASIS.len()..];
        match after_open.find(EMPHASIS) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str(BOLD_START);
                out.push_str(&after_open[..close]);
                out.push_str(BOLD_END);
                rest = &after_open[close + EMPHASIS.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
