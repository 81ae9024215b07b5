use tracing::trace;

use crate::core::table::OptionTable;
use crate::types::{Fetch, OptionDescriptor, Spelling};

/// Scan state over one argument vector.
///
/// Index 0 is the program name and is never interpreted. Options must precede
/// positionals: the first token that does not start with `-` (or a lone `-`)
/// ends scanning for the rest of the session and the cursor stays on it, so
/// [`remaining`](Self::remaining) returns the positionals.
///
/// The argument vector is never modified. Bundled short flags (`-abc`) are
/// walked with a byte offset into the current token.
#[derive(Debug)]
pub struct ParseSession<'a, S: AsRef<str>> {
    table: &'a OptionTable,
    args: &'a [S],
    index: usize,
    // Byte offset of the next bundled short option within `args[index]`; 0 when
    // the cursor sits at the start of a fresh token.
    offset: usize,
    halted: bool,
    current: Fetch<'a>,
}

impl<'a, S: AsRef<str>> ParseSession<'a, S> {
    pub fn new(table: &'a OptionTable, args: &'a [S]) -> Self {
        Self {
            table,
            args,
            index: 1,
            offset: 0,
            halted: false,
            current: Fetch::EndOfInput,
        }
    }

    /// Advances to the next option. Returns `false` once the arguments are
    /// exhausted or a positional is reached; calling again keeps returning
    /// `false` without moving the cursor.
    pub fn fetch_next(&mut self) -> bool {
        !self.next_fetch().is_end()
    }

    /// Like [`fetch_next`](Self::fetch_next) but hands back the result.
    pub fn next_fetch(&mut self) -> Fetch<'a> {
        let fetch = self.scan();
        trace!(index = self.index, ?fetch, "fetched option");
        self.current = fetch;
        fetch
    }

    /// Result of the most recent fetch, without scanning further.
    pub fn current(&self) -> Fetch<'a> {
        self.current
    }

    /// Identifier of the last matched option; `None` before the first fetch,
    /// after exhaustion and for anomalies.
    pub fn identifier(&self) -> Option<char> {
        self.current.identifier()
    }

    pub fn value(&self) -> Option<&'a str> {
        self.current.value()
    }

    pub fn descriptor(&self) -> Option<&'a OptionDescriptor> {
        self.current.descriptor()
    }

    /// Index of the next unconsumed argument.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arguments from the cursor on. After scanning stopped these are the
    /// positionals.
    pub fn remaining(&self) -> &'a [S] {
        let args = self.args;
        &args[self.index.min(args.len())..]
    }

    pub fn program(&self) -> Option<&'a str> {
        let args = self.args;
        args.first().map(|arg| arg.as_ref())
    }

    pub fn table(&self) -> &'a OptionTable {
        self.table
    }

    fn scan(&mut self) -> Fetch<'a> {
        let args = self.args;
        if self.halted || self.index >= args.len() {
            return Fetch::EndOfInput;
        }

        let token: &'a str = args[self.index].as_ref();
        if self.offset > 0 {
            return self.scan_short(token);
        }

        if token.len() < 2 || !token.starts_with('-') {
            self.halted = true;
            return Fetch::EndOfInput;
        }

        match token.strip_prefix("--") {
            Some(body) => self.scan_long(body),
            None => {
                self.offset = 1;
                self.scan_short(token)
            }
        }
    }

    fn scan_long(&mut self, body: &'a str) -> Fetch<'a> {
        let table = self.table;
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        let spelling = Spelling::Long(name);

        let Some(descriptor) = table.find_long(name) else {
            self.advance();
            return Fetch::Unknown { spelling };
        };

        if descriptor.is_flag() {
            self.advance();
            return match inline {
                Some(value) => Fetch::UnexpectedValue {
                    spelling,
                    value,
                    descriptor,
                },
                None => Fetch::Matched {
                    identifier: descriptor.identifier,
                    value: None,
                    descriptor,
                },
            };
        }

        let value = inline.or_else(|| self.take_following());
        self.advance();
        resolve(spelling, descriptor, value)
    }

    fn scan_short(&mut self, token: &'a str) -> Fetch<'a> {
        let table = self.table;
        let mut chars = token[self.offset..].chars();
        let Some(key) = chars.next() else {
            self.advance();
            return self.scan();
        };
        let tail = chars.as_str();
        let spelling = Spelling::Short(key);

        let Some(descriptor) = table.find_short(key) else {
            self.advance();
            return Fetch::Unknown { spelling };
        };

        if descriptor.is_flag() {
            if tail.is_empty() {
                self.advance();
            } else {
                self.offset = token.len() - tail.len();
            }
            return Fetch::Matched {
                identifier: descriptor.identifier,
                value: None,
                descriptor,
            };
        }

        let value = if tail.is_empty() {
            self.take_following()
        } else {
            Some(tail)
        };
        self.advance();
        resolve(spelling, descriptor, value)
    }

    /// Consumes the argument after the current one as a value, if there is one.
    fn take_following(&mut self) -> Option<&'a str> {
        let args = self.args;
        if self.index + 1 < args.len() {
            self.index += 1;
            Some(args[self.index].as_ref())
        } else {
            None
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.offset = 0;
    }
}

fn resolve<'a>(
    spelling: Spelling<'a>,
    descriptor: &'a OptionDescriptor,
    value: Option<&'a str>,
) -> Fetch<'a> {
    match value {
        Some(value) => Fetch::Matched {
            identifier: descriptor.identifier,
            value: Some(value),
            descriptor,
        },
        None => Fetch::MissingValue {
            spelling,
            descriptor,
        },
    }
}

impl<'a, S: AsRef<str>> Iterator for ParseSession<'a, S> {
    type Item = Fetch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_fetch() {
            Fetch::EndOfInput => None,
            fetch => Some(fetch),
        }
    }
}
