//! Unit tests for the token reference table loader

use std::io::Write;

use tempfile::NamedTempFile;
use versealign::lookup::{TokenTable, GREEK_LAYOUT, HEBREW_LAYOUT};

fn write_tsv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("write tsv line");
    }
    file
}

#[test]
fn test_load_hebrew_layout() {
    let file = write_tsv(&[
        "xml:id\tref\tclass\ttext\tafter",
        "o010010010011\tGEN 1:1!1\tword\tבְּרֵאשִׁית\t ",
        "o010010010012\tGEN 1:1!2\tword\tבָּרָא\t ",
        "o010010020011\tGEN 1:2!1\tword\tוְהָאָרֶץ\t ",
    ]);

    let mut table = TokenTable::default();
    let loaded = table.load_tsv(file.path(), HEBREW_LAYOUT).unwrap();
    assert_eq!(loaded, 3);
    assert_eq!(table.len(), 2);

    let tokens = table.get("GEN 1:1").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "בְּרֵאשִׁית");
    assert_eq!(tokens[0].id, "o010010010011");
    assert_eq!(tokens[1].text, "בָּרָא");
    assert!(tokens[0].range.is_none());
}

#[test]
fn test_load_greek_layout_reads_ninth_column() {
    let file = write_tsv(&[
        "xml:id\tref\tc2\tc3\tc4\tc5\tc6\tc7\ttext\tafter",
        "n66001001001\tJHN 1:1!1\tx\tx\tx\tx\tx\tx\tἘν\t ",
    ]);

    let mut table = TokenTable::default();
    table.load_tsv(file.path(), GREEK_LAYOUT).unwrap();
    let tokens = table.get("JHN 1:1").unwrap();
    assert_eq!(tokens[0].text, "Ἐν");
}

#[test]
fn test_sub_reference_suffix_is_stripped() {
    let file = write_tsv(&[
        "xml:id\tref\tc2\ttext",
        "a1\tGEN 2:3!7\tx\tfoo",
        "a2\tGEN 2:3\tx\tbar",
    ]);

    let mut table = TokenTable::default();
    table.load_tsv(file.path(), HEBREW_LAYOUT).unwrap();
    // Both rows land under the same verse reference, in file order.
    let tokens = table.get("GEN 2:3").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "bar");
}

#[test]
fn test_short_rows_are_skipped() {
    let file = write_tsv(&[
        "xml:id\tref\tc2\ttext",
        "bad-row",
        "a1\tGEN 1:1!1\tx\tok",
    ]);

    let mut table = TokenTable::default();
    let loaded = table.load_tsv(file.path(), HEBREW_LAYOUT).unwrap();
    assert_eq!(loaded, 1);
    assert_eq!(table.get("GEN 1:1").unwrap()[0].text, "ok");
}

#[test]
fn test_missing_file_is_an_error() {
    let mut table = TokenTable::default();
    let err = table.load_tsv(std::path::Path::new("/no/such/file.tsv"), HEBREW_LAYOUT);
    assert!(err.is_err());
    assert!(table.is_empty());
}
