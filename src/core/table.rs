use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::OptionDescriptor;

/// Immutable, ordered table of option descriptors.
///
/// Table order is significant: lookups return the first descriptor that
/// declares a spelling, and help is rendered in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionTable {
    descriptors: Vec<OptionDescriptor>,
}

impl OptionTable {
    pub fn new(descriptors: Vec<OptionDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Loads a table from a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: OptionTable = serde_json::from_str(json)?;
        debug!("Loaded option table with {} descriptors", table.len());
        Ok(table)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        debug!("Reading option table from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.descriptors.iter()
    }

    /// First descriptor whose short forms contain `short`.
    pub fn find_short(&self, short: char) -> Option<&OptionDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.short_forms.contains(&short))
    }

    /// First descriptor whose long form equals `long`.
    pub fn find_long(&self, long: &str) -> Option<&OptionDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.long_form.as_deref() == Some(long))
    }

    pub fn find_identifier(&self, identifier: char) -> Option<&OptionDescriptor> {
        self.descriptors.iter().find(|d| d.identifier == identifier)
    }

    /// Checks the table for declarations that would make dispatch ambiguous
    /// or leave an option unreachable. Sessions never call this themselves.
    pub fn validate(&self) -> Result<()> {
        let mut identifiers = HashSet::new();
        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();

        for d in &self.descriptors {
            if !identifiers.insert(d.identifier) {
                return Err(Error::DuplicateIdentifier {
                    identifier: d.identifier,
                });
            }

            if d.short_forms.is_empty() && d.long_form.is_none() {
                return Err(Error::Unreachable {
                    identifier: d.identifier,
                });
            }

            for &short in &d.short_forms {
                if short == '-' || short == '=' || short.is_whitespace() || short.is_control() {
                    return Err(Error::InvalidShortForm {
                        identifier: d.identifier,
                        short,
                    });
                }
                if !shorts.insert(short) {
                    return Err(Error::DuplicateShortForm { short });
                }
            }

            if let Some(long) = &d.long_form {
                if !is_valid_long_form(long) {
                    return Err(Error::InvalidLongForm {
                        identifier: d.identifier,
                        long: long.clone(),
                    });
                }
                if !longs.insert(long.as_str()) {
                    return Err(Error::DuplicateLongForm { long: long.clone() });
                }
            }
        }

        debug!("Option table validated ({} descriptors)", self.len());
        Ok(())
    }
}

fn is_valid_long_form(long: &str) -> bool {
    !long.is_empty()
        && !long.starts_with('-')
        && !long.contains('=')
        && !long.chars().any(char::is_whitespace)
}

impl From<Vec<OptionDescriptor>> for OptionTable {
    fn from(descriptors: Vec<OptionDescriptor>) -> Self {
        Self::new(descriptors)
    }
}

impl FromIterator<OptionDescriptor> for OptionTable {
    fn from_iter<I: IntoIterator<Item = OptionDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = &'a OptionDescriptor;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn demo_table() -> OptionTable {
        OptionTable::new(vec![
            OptionDescriptor::new('f', "Fahrenheit input")
                .short('f')
                .long("fahrenheit")
                .value("TEMP"),
            OptionDescriptor::new('c', "Celsius input")
                .short('c')
                .long("celsius")
                .value("TEMP"),
            OptionDescriptor::new('h', "Show help").short('h').short('?').long("help"),
        ])
    }

    #[test]
    fn lookups_find_declared_spellings() {
        let table = demo_table();
        assert_eq!(table.find_short('c').map(|d| d.identifier), Some('c'));
        assert_eq!(table.find_short('?').map(|d| d.identifier), Some('h'));
        assert_eq!(table.find_long("fahrenheit").map(|d| d.identifier), Some('f'));
        assert!(table.find_long("fahr").is_none());
        assert!(table.find_short('x').is_none());
        assert_eq!(table.find_identifier('h').map(|d| d.long_form.as_deref()), Some(Some("help")));
    }

    #[test]
    fn first_declaration_wins() {
        let table = OptionTable::new(vec![
            OptionDescriptor::new('a', "first").short('x'),
            OptionDescriptor::new('b', "second").short('x'),
        ]);
        assert_eq!(table.find_short('x').map(|d| d.identifier), Some('a'));
    }

    #[test]
    fn demo_table_is_valid() {
        assert!(demo_table().validate().is_ok());
    }

    #[rstest]
    #[case::duplicate_identifier(
        vec![OptionDescriptor::new('a', "").short('a'), OptionDescriptor::new('a', "").short('b')],
        "Duplicate option identifier"
    )]
    #[case::duplicate_short(
        vec![OptionDescriptor::new('a', "").short('x'), OptionDescriptor::new('b', "").short('x')],
        "more than one option"
    )]
    #[case::duplicate_long(
        vec![OptionDescriptor::new('a', "").long("same"), OptionDescriptor::new('b', "").long("same")],
        "more than one option"
    )]
    #[case::dash_short(vec![OptionDescriptor::new('a', "").short('-')], "Invalid short form")]
    #[case::equals_in_long(vec![OptionDescriptor::new('a', "").long("a=b")], "Invalid long form")]
    #[case::empty_long(vec![OptionDescriptor::new('a', "").long("")], "Invalid long form")]
    #[case::unreachable(vec![OptionDescriptor::new('a', "hidden")], "neither a short nor a long")]
    fn validation_rejects(#[case] descriptors: Vec<OptionDescriptor>, #[case] message: &str) {
        let err = OptionTable::new(descriptors).validate().unwrap_err();
        assert!(err.to_string().contains(message), "unexpected error: {err}");
    }

    #[test]
    fn json_defaults_optional_fields() {
        let table = OptionTable::from_json_str(
            r#"[
                {"identifier": "v", "short_forms": ["v"], "description": "Verbose"},
                {"identifier": "o", "long_form": "output", "value_name": "FILE"}
            ]"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.descriptors()[0].is_flag());
        assert!(table.descriptors()[0].long_form.is_none());
        assert!(table.descriptors()[1].requires_value());
        assert!(table.descriptors()[1].short_forms.is_empty());
        assert_eq!(table.descriptors()[1].description, "");
    }

    #[test]
    fn json_survives_serialization() {
        let table = demo_table();
        let json = table.to_json_string().unwrap();
        assert_eq!(OptionTable::from_json_str(&json).unwrap(), table);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = OptionTable::from_json_str(r#"{"identifier": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
