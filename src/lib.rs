#![doc = r##"
optscan — a small declarative command-line option scanner.

Declare a table of options, then walk an argument vector one option at a time.
Short flags (`-f`), bundled short flags (`-abc`), long flags (`--name`),
`--name=value`, attached short values (`-n5`) and required values taken from
the next argument are all handled. Malformed input never aborts the scan: it is
reported as a `Fetch` variant and the caller decides what to do with it.

Options must precede positionals. The first argument that does not start with
`-` stops scanning, and the session's cursor is left on it.

Quick start
-----------
```rust
use optscan::{Fetch, OptionDescriptor, OptionTable, ParseSession};

let table = OptionTable::new(vec![
    OptionDescriptor::new('o', "Write output to FILE")
        .short('o')
        .long("output")
        .value("FILE"),
    OptionDescriptor::new('v', "Verbose output").short('v'),
]);

let args = ["prog", "-v", "--output=out.txt", "input.txt"];
let mut session = ParseSession::new(&table, &args);

while session.fetch_next() {
    match session.current() {
        Fetch::Matched { identifier: 'v', .. } => { /* verbose */ }
        Fetch::Matched { identifier: 'o', value, .. } => assert_eq!(value, Some("out.txt")),
        other => panic!("unexpected: {other:?}"),
    }
}
assert_eq!(session.remaining(), &["input.txt"]);
```

Handling anomalies
------------------
```rust
use optscan::{Fetch, OptionDescriptor, OptionTable, ParseSession};

let table = OptionTable::new(vec![
    OptionDescriptor::new('n', "Count").short('n').value("N"),
]);
let args = ["prog", "-x", "-n"];

for fetch in ParseSession::new(&table, &args) {
    match fetch {
        Fetch::Unknown { spelling } => eprintln!("Unknown option '{spelling}'"),
        Fetch::MissingValue { spelling, .. } => eprintln!("Option '{spelling}' requires a value."),
        Fetch::UnexpectedValue { spelling, .. } => eprintln!("Option '{spelling}' takes no value."),
        Fetch::Matched { .. } | Fetch::EndOfInput => {}
    }
}
```

Tables as configuration
-----------------------
Tables serialize as a JSON array of descriptors:

```rust
let table = optscan::OptionTable::from_json_str(
    r#"[{"identifier": "h", "short_forms": ["h"], "long_form": "help", "description": "Show help"}]"#,
)?;
table.validate()?;
print!("{}", optscan::help_text(&table, "prog"));
# Ok::<(), optscan::Error>(())
```

Useful modules
--------------
- [`api`]: one-call scanning (`parse_all`) and help rendering.
- [`core`]: the table, the session and the help formatter.
- [`types`]: `OptionDescriptor`, `Fetch`, `Spelling`.
- [`error`]: crate-level `Error` and `Result`.
- [`temperature`]: conversions used by the `tempconv` demo binary.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod temperature;
pub mod types;

pub use api::{ParseReport, help_entry, help_text, parse_all, render_help};
pub use crate::core::session::ParseSession;
pub use crate::core::table::OptionTable;
pub use error::{Error, Result};
pub use types::{Fetch, OptionDescriptor, Spelling};
