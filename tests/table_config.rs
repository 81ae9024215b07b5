use std::io::Write;

use optscan::{Error, Fetch, OptionTable, ParseSession, help_text};

const TABLE_JSON: &str = r#"[
    {
        "identifier": "o",
        "short_forms": ["o"],
        "long_form": "output",
        "value_name": "FILE",
        "description": "Write to FILE"
    },
    {
        "identifier": "v",
        "short_forms": ["v", "V"],
        "description": "Verbose"
    }
]"#;

#[test]
fn table_loaded_from_file_drives_a_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TABLE_JSON.as_bytes()).unwrap();

    let table = OptionTable::from_json_path(file.path()).unwrap();
    table.validate().unwrap();

    let args = ["prog", "-Vo", "out.bin", "src"];
    let mut session = ParseSession::new(&table, &args);
    assert_eq!(session.next_fetch().identifier(), Some('v'));
    let fetch = session.next_fetch();
    assert_eq!(fetch.identifier(), Some('o'));
    assert_eq!(fetch.value(), Some("out.bin"));
    assert_eq!(session.next_fetch(), Fetch::EndOfInput);
    assert_eq!(session.remaining(), &["src"]);
}

#[test]
fn loaded_table_renders_help() {
    let table = OptionTable::from_json_str(TABLE_JSON).unwrap();
    assert_eq!(
        help_text(&table, "prog"),
        "Usage: prog [options]\nOptions:\n  -o, --output FILE\n      Write to FILE\n  -v, -V, \n      Verbose\n"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = OptionTable::from_json_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_table_file_is_rejected_by_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"identifier": "a", "short_forms": ["x"]}, {"identifier": "b", "short_forms": ["x"]}]"#)
        .unwrap();

    let table = OptionTable::from_json_path(file.path()).unwrap();
    assert!(matches!(
        table.validate(),
        Err(Error::DuplicateShortForm { short: 'x' })
    ));
}
