//! Shared types used across optscan.
//! Includes the caller-supplied `OptionDescriptor`, the `Spelling` a user typed
//! for an option, and `Fetch`, the tagged result of a single scan step.
use serde::{Deserialize, Serialize};

/// Static declaration of one recognized command-line option.
///
/// A descriptor without a `value_name` is a flag. One with a `value_name`
/// always requires exactly one value, attached (`--name=value`, `-nvalue`)
/// or taken from the following argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub identifier: char,
    #[serde(default)]
    pub short_forms: Vec<char>,
    #[serde(default)]
    pub long_form: Option<String>,
    #[serde(default)]
    pub value_name: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl OptionDescriptor {
    /// Starts a flag descriptor with no spellings; add them with
    /// [`short`](Self::short) and [`long`](Self::long).
    pub fn new(identifier: char, description: impl Into<String>) -> Self {
        Self {
            identifier,
            short_forms: Vec::new(),
            long_form: None,
            value_name: None,
            description: description.into(),
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short_forms.push(short);
        self
    }

    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long_form = Some(long.into());
        self
    }

    /// Marks the option as value-required; `name` is the help placeholder.
    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    pub fn is_flag(&self) -> bool {
        self.value_name.is_none()
    }

    pub fn requires_value(&self) -> bool {
        self.value_name.is_some()
    }
}

/// How an option was written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling<'a> {
    Short(char),
    Long(&'a str),
}

impl std::fmt::Display for Spelling<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spelling::Short(c) => write!(f, "-{}", c),
            Spelling::Long(name) => write!(f, "--{}", name),
        }
    }
}

/// Outcome of one fetch from a [`crate::ParseSession`].
///
/// Anomalies are ordinary variants: scanning always continues with the next
/// token after one of them is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch<'a> {
    Matched {
        identifier: char,
        value: Option<&'a str>,
        descriptor: &'a OptionDescriptor,
    },
    /// No descriptor declares this spelling.
    Unknown { spelling: Spelling<'a> },
    /// A flag was given an inline `=value`.
    UnexpectedValue {
        spelling: Spelling<'a>,
        value: &'a str,
        descriptor: &'a OptionDescriptor,
    },
    /// A value-required option had nothing attached and no following argument.
    MissingValue {
        spelling: Spelling<'a>,
        descriptor: &'a OptionDescriptor,
    },
    /// The cursor reached the end of the arguments or a positional.
    EndOfInput,
}

impl<'a> Fetch<'a> {
    pub fn is_end(&self) -> bool {
        matches!(self, Fetch::EndOfInput)
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            Fetch::Unknown { .. } | Fetch::UnexpectedValue { .. } | Fetch::MissingValue { .. }
        )
    }

    pub fn identifier(&self) -> Option<char> {
        match self {
            Fetch::Matched { identifier, .. } => Some(*identifier),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&'a str> {
        match self {
            Fetch::Matched { value, .. } => *value,
            _ => None,
        }
    }

    pub fn descriptor(&self) -> Option<&'a OptionDescriptor> {
        match self {
            Fetch::Matched { descriptor, .. } => Some(*descriptor),
            _ => None,
        }
    }

    /// The character-channel encoding used by getopt-style C parsers:
    /// `'?'` unknown, `'!'` unexpected value, `':'` missing value, NUL at end.
    pub fn legacy_identifier(&self) -> char {
        match self {
            Fetch::Matched { identifier, .. } => *identifier,
            Fetch::Unknown { .. } => '?',
            Fetch::UnexpectedValue { .. } => '!',
            Fetch::MissingValue { .. } => ':',
            Fetch::EndOfInput => '\0',
        }
    }
}
