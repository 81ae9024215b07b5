use std::io::Write;

use crate::core::table::OptionTable;
use crate::error::Result;
use crate::types::OptionDescriptor;

/// Writes the usage header and one entry per descriptor, in table order:
///
/// ```text
/// Usage: tempconv [options]
/// Options:
///   -f, --fahrenheit TEMP
///       Convert TEMP from Fahrenheit to Celsius
/// ```
pub fn render_help<W: Write>(table: &OptionTable, program: &str, out: &mut W) -> Result<()> {
    out.write_all(help_text(table, program).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn help_text(table: &OptionTable, program: &str) -> String {
    let mut text = format!("Usage: {} [options]\nOptions:\n", program);
    for descriptor in table {
        text.push_str(&help_entry(descriptor));
    }
    text
}

/// Two lines for one descriptor: its spellings (and value placeholder), then
/// the indented description.
pub fn help_entry(descriptor: &OptionDescriptor) -> String {
    let shorts: String = descriptor
        .short_forms
        .iter()
        .map(|short| format!("-{}, ", short))
        .collect();
    let long = descriptor
        .long_form
        .as_deref()
        .map(|long| format!("--{}", long))
        .unwrap_or_default();
    let value = descriptor
        .value_name
        .as_deref()
        .map(|name| format!(" {}", name))
        .unwrap_or_default();
    format!(
        "  {}{}{}\n      {}\n",
        shorts, long, value, descriptor.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> OptionTable {
        OptionTable::new(vec![
            OptionDescriptor::new('f', "Convert TEMP from Fahrenheit to Celsius")
                .short('f')
                .long("fahrenheit")
                .value("TEMP"),
            OptionDescriptor::new('h', "Show this help").short('h').short('?').long("help"),
            OptionDescriptor::new('q', "Be quiet").long("quiet"),
            OptionDescriptor::new('n', "Count").short('n').value("N"),
        ])
    }

    #[test]
    fn renders_header_and_entries_in_order() {
        let expected = "Usage: prog [options]\n\
                        Options:\n  \
                        -f, --fahrenheit TEMP\n      Convert TEMP from Fahrenheit to Celsius\n  \
                        -h, -?, --help\n      Show this help\n  \
                        --quiet\n      Be quiet\n  \
                        -n,  N\n      Count\n";
        assert_eq!(help_text(&table(), "prog"), expected);
    }

    #[test]
    fn writes_to_any_sink() {
        let mut out = Vec::new();
        render_help(&table(), "prog", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), help_text(&table(), "prog"));
    }

    #[test]
    fn long_tables_are_not_truncated() {
        let table: OptionTable = (0..500)
            .map(|i| {
                OptionDescriptor::new('x', "d".repeat(64)).long(format!("option-number-{i}"))
            })
            .collect();
        let text = help_text(&table, "prog");
        assert!(text.contains("--option-number-499\n"));
        assert_eq!(text.lines().count(), 2 + 2 * 500);
    }

    #[test]
    fn entry_spellings_and_placeholder() {
        let both = OptionDescriptor::new('o', "Output").short('o').long("out").value("FILE");
        let long_only = OptionDescriptor::new('q', "Quiet").long("quiet");
        let short_only = OptionDescriptor::new('v', "Verbose").short('v').short('V');
        assert_eq!(help_entry(&both), "  -o, --out FILE\n      Output\n");
        assert_eq!(help_entry(&long_only), "  --quiet\n      Quiet\n");
        assert_eq!(help_entry(&short_only), "  -v, -V, \n      Verbose\n");
    }

    #[test]
    fn empty_table_still_has_header() {
        assert_eq!(
            help_text(&OptionTable::default(), "prog"),
            "Usage: prog [options]\nOptions:\n"
        );
    }
}
