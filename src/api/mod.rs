//! High-level entry points: scan a whole argument vector in one call, or
//! render help for a table. Prefer these over driving a `ParseSession` by hand
//! when all results are needed up front.
use tracing::debug;

use crate::core::session::ParseSession;
use crate::core::table::OptionTable;
use crate::types::Fetch;

pub use crate::core::help::{help_entry, help_text, render_help};

/// Everything one pass over an argument vector produced.
#[derive(Debug, Clone)]
pub struct ParseReport<'a, S> {
    /// Fetch results in command-line order, anomalies included.
    pub fetches: Vec<Fetch<'a>>,
    /// Arguments left once scanning stopped.
    pub positionals: &'a [S],
}

impl<'a, S> ParseReport<'a, S> {
    /// Matched `(identifier, value)` pairs, in order.
    pub fn matched(&self) -> impl Iterator<Item = (char, Option<&'a str>)> + '_ {
        self.fetches.iter().filter_map(|f| match *f {
            Fetch::Matched {
                identifier, value, ..
            } => Some((identifier, value)),
            _ => None,
        })
    }

    pub fn anomalies(&self) -> impl Iterator<Item = &Fetch<'a>> + '_ {
        self.fetches.iter().filter(|f| f.is_anomaly())
    }

    pub fn has_anomalies(&self) -> bool {
        self.anomalies().next().is_some()
    }

    pub fn contains(&self, identifier: char) -> bool {
        self.matched().any(|(id, _)| id == identifier)
    }

    /// Value of the last occurrence of `identifier`.
    pub fn value_of(&self, identifier: char) -> Option<&'a str> {
        self.matched()
            .filter(|(id, _)| *id == identifier)
            .last()
            .and_then(|(_, value)| value)
    }
}

/// Runs a session to exhaustion over `args` (program name at index 0).
pub fn parse_all<'a, S: AsRef<str>>(table: &'a OptionTable, args: &'a [S]) -> ParseReport<'a, S> {
    let mut session = ParseSession::new(table, args);
    let fetches: Vec<_> = session.by_ref().collect();
    let positionals = session.remaining();
    debug!(
        "Scanned {} option(s), {} positional(s) remain",
        fetches.len(),
        positionals.len()
    );
    ParseReport {
        fetches,
        positionals,
    }
}
