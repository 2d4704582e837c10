use std::fs;

use clap::Parser;
use diarist::cli::args::DiaristArgs;
use diarist::cli::commands::execute_command;
use diarist::journal::JournalTable;
use tempfile::tempdir;

fn run(args: &[&str]) -> diarist::error::Result<()> {
    let mut argv = vec!["diarist", "-q"];
    argv.extend_from_slice(args);
    execute_command(DiaristArgs::try_parse_from(argv).unwrap())
}

#[test]
fn test_prepare_then_filter() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("raw.jsonl");
    let prepared = dir.path().join("prepared.jsonl");
    let filtered = dir.path().join("filtered.jsonl");

    fs::write(
        &raw,
        concat!(
            r#"{"date": "2022-11-02", "text": "We spent the whole afternoon in the garden planting tomatoes and talking about the summer."}"#,
            "\n",
            r#"{"date": "2023-03-14", "text": "Long meeting about the budget.\n\nThe coffee machine broke again and nobody knew how to fix it."}"#,
            "\n",
        ),
    )
    .unwrap();

    run(&[
        "prepare",
        raw.to_str().unwrap(),
        prepared.to_str().unwrap(),
    ])
    .unwrap();

    let table = JournalTable::from_jsonl(&prepared).unwrap();
    assert_eq!(table.len(), 2);
    let second = &table.rows()[1];
    assert_eq!(JournalTable::text_list(second, "sentences").unwrap().len(), 2);
    assert_eq!(JournalTable::text_list(second, "languages").unwrap().len(), 2);
    assert!(second.get_field("word_count").is_some());

    run(&[
        "filter",
        prepared.to_str().unwrap(),
        filtered.to_str().unwrap(),
        "--start",
        "2023-01-01",
    ])
    .unwrap();

    let table = JournalTable::from_jsonl(&filtered).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_analysis_commands() {
    let dir = tempdir().unwrap();
    let entry = dir.path().join("entry.txt");
    let journal = dir.path().join("journal.jsonl");

    fs::write(&entry, "The cats were running.\n\n\\- two mice").unwrap();
    fs::write(
        &journal,
        r#"{"date": "2023-05-01", "sentences": ["The cat sat."], "languages": ["eng"]}"#,
    )
    .unwrap();

    let entry = entry.to_str().unwrap();
    let journal = journal.to_str().unwrap();

    run(&["segment", entry]).unwrap();
    run(&["lemmatize", entry]).unwrap();
    run(&["stem", entry]).unwrap();
    run(&["-f", "json", "ngrams", journal, "-n", "3"]).unwrap();
    run(&["top-words", journal, "--limit", "5"]).unwrap();
}

#[test]
fn test_errors_propagate() {
    let dir = tempdir().unwrap();
    let journal = dir.path().join("journal.jsonl");
    fs::write(&journal, r#"{"date": "2023-05-01", "text": "raw"}"#).unwrap();

    assert!(run(&["ngrams", journal.to_str().unwrap()]).is_err());
    assert!(run(&["segment", dir.path().join("missing.txt").to_str().unwrap()]).is_err());

    let bad_config = dir.path().join("bad.json");
    fs::write(&bad_config, "{").unwrap();
    assert!(
        run(&[
            "--config",
            bad_config.to_str().unwrap(),
            "top-words",
            journal.to_str().unwrap()
        ])
        .is_err()
    );
}
