//! Integration tests for the `convert` and `inspect` subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;

fn cmd() -> Command {
    Command::cargo_bin("pdfdeck").unwrap()
}

/// A one-page dump: a "Hello" block and one PNG image.
const DUMP: &str = r#"{
    "pages": [
        {
            "width": 612.0,
            "height": 792.0,
            "blocks": [
                {
                    "bbox": { "x0": 72.0, "top": 72.0, "x1": 300.0, "bottom": 96.0 },
                    "lines": [
                        { "spans": [ { "text": "Hello", "size": 14.0, "font": "Times" } ] }
                    ]
                }
            ],
            "images": [
                {
                    "xref": 7,
                    "rects": [ { "x0": 100.0, "top": 200.0, "x1": 300.0, "bottom": 350.0 } ],
                    "data": "iVBORw0KGgo="
                }
            ]
        }
    ]
}"#;

#[test]
fn convert_writes_a_deck() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("pages.json");
    let output = dir.path().join("deck.pptx");
    std::fs::write(&dump, DUMP).unwrap();

    let assert = cmd()
        .arg("convert")
        .arg(&dump)
        .arg(&output)
        .arg("--quiet")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("1 page(s) -> 1 slide(s)"));

    let archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"ppt/slides/slide1.xml"));
    assert!(names.contains(&"ppt/media/image1.png"));
}

#[test]
fn convert_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .arg("convert")
        .arg(dir.path().join("absent.json"))
        .arg(dir.path().join("deck.pptx"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn convert_unparseable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("pages.json");
    std::fs::write(&dump, "not json").unwrap();

    cmd()
        .arg("convert")
        .arg(&dump)
        .arg(dir.path().join("deck.pptx"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load source dump"));
}

#[test]
fn convert_empty_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("pages.json");
    std::fs::write(&dump, r#"{ "pages": [] }"#).unwrap();

    cmd()
        .arg("convert")
        .arg(&dump)
        .arg(dir.path().join("deck.pptx"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pages"));
}

#[test]
fn inspect_prints_structure() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("pages.json");
    std::fs::write(&dump, DUMP).unwrap();

    cmd()
        .arg("inspect")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("pages: 1"))
        .stdout(predicate::str::contains("612 x 792 pt"))
        .stdout(predicate::str::contains("'Hello' font: Times size: 14pt"))
        .stdout(predicate::str::contains("images: 1"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("inspect"));
}
