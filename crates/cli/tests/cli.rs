// ABOUTME: Integration tests for the podfeed-cli binary.
// ABOUTME: Tests file and stdin input, output files, formatting flags, and error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn podfeed_cmd() -> Command {
    Command::cargo_bin("podfeed-cli").unwrap()
}

const FEED_JSON: &str = r#"{
  "channel": {
    "title": "Bookworm Podcast",
    "description": { "text": "<strong>Books</strong>", "cdata": true },
    "podcast_medium": "podcast",
    "items": [
      {
        "title": "Hello World",
        "enclosure": {
          "url": "https://example.com/hello.mp3",
          "length": 1024,
          "mime_type": "audio/mpeg"
        },
        "pub_date": "2021-07-08T15:20:10Z",
        "itunes_duration": 600.0
      }
    ]
  }
}"#;

fn write_feed(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("feed.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn encode_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_feed(&dir, FEED_JSON);

    podfeed_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd" xmlns:podcast="https://podcastindex.org/namespace/1.0"><channel>"#,
        ))
        .stdout(predicate::str::contains(
            "<description><![CDATA[<strong>Books</strong>]]></description>",
        ))
        .stdout(predicate::str::contains("<pubDate>Thu, 08 Jul 2021 15:20:10 GMT</pubDate>"))
        .stdout(predicate::str::contains("<itunes:duration>600</itunes:duration>"));
}

#[test]
fn encode_from_stdin_with_indent_and_declaration() {
    podfeed_cmd()
        .arg("-")
        .arg("--indent")
        .arg("2")
        .arg("--declaration")
        .write_stdin(FEED_JSON)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss",
        ))
        .stdout(predicate::str::contains("\n  <channel>\n    <description>"));
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_feed(&dir, FEED_JSON);
    let output = dir.path().join("feed.xml");

    podfeed_cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.ends_with("</channel></rss>"));
}

#[test]
fn namespace_flags() {
    let dir = TempDir::new().unwrap();
    let input = write_feed(&dir, FEED_JSON);

    podfeed_cmd()
        .arg(&input)
        .arg("--declare")
        .arg("googleplay")
        .arg("--suppress")
        .arg("itunes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"xmlns:googleplay="http://www.google.com/schemas/play-podcasts/1.0""#,
        ))
        .stdout(predicate::str::contains("xmlns:itunes").not());
}

#[test]
fn unknown_namespace_prefix_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_feed(&dir, FEED_JSON);

    podfeed_cmd()
        .arg(&input)
        .arg("--declare")
        .arg("media")
        .assert()
        .failure()
        .stderr(predicate::str::contains("media"));
}

#[test]
fn validation_failure_reports_element() {
    let dir = TempDir::new().unwrap();
    let input = write_feed(
        &dir,
        r#"{ "channel": { "items": [ { "enclosure": { "url": "", "length": 1, "mime_type": "audio/mpeg" } } ] } }"#,
    );

    podfeed_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("enclosure"));

    podfeed_cmd()
        .arg(&input)
        .arg("--no-validate")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<enclosure url="" length="1" type="audio/mpeg">"#));
}

#[test]
fn missing_file_fails() {
    podfeed_cmd()
        .arg("/nonexistent/feed.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn malformed_json_fails() {
    podfeed_cmd()
        .arg("-")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid feed JSON"));
}

#[test]
fn zero_indent_writes_single_line() {
    podfeed_cmd()
        .arg("-")
        .arg("--indent")
        .arg("0")
        .write_stdin(FEED_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("<channel><title>Bookworm Podcast</title>"))
        .stdout(predicate::str::contains("</channel></rss>\n"));
}
