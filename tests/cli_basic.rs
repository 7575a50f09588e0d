//! Integration tests for the `ytembed` binary.
//!
//! Everything here runs offline: ID extraction and embed assembly never
//! touch the network, and the metadata commands are only exercised on
//! their fail-fast configuration path.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `ytembed` binary.
fn ytembed() -> Command {
    Command::cargo_bin("ytembed").expect("binary 'ytembed' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    ytembed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ytembed"))
        .stdout(predicate::str::contains("id"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("thumbnail"))
        .stdout(predicate::str::contains("embed"))
        .stdout(predicate::str::contains("embed-url"));
}

#[test]
fn version_flag_shows_semver() {
    ytembed()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^ytembed \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    ytembed()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: ytembed"));
}

#[test]
fn invalid_subcommand_fails() {
    ytembed()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── id ──────────────────────────────────────────────────────────────────────

#[test]
fn id_extracts_from_short_url() {
    ytembed()
        .args(["id", "https://youtu.be/ZV1Ho07AnXg"])
        .assert()
        .success()
        .stdout("ZV1Ho07AnXg\n");
}

#[test]
fn id_extracts_from_watch_url() {
    ytembed()
        .args(["id", "https://www.youtube.com/watch?v=pxk4YF46rsA"])
        .assert()
        .success()
        .stdout("pxk4YF46rsA\n");
}

#[test]
fn id_discards_trailing_parameters() {
    ytembed()
        .args(["id", "http://www.youtube.com/v/ZU6zDg3oYH4&hl=en_US&fs=1&"])
        .assert()
        .success()
        .stdout("ZU6zDg3oYH4\n");
}

#[test]
fn id_fails_on_plain_text() {
    ytembed()
        .args(["id", "no link in here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no video ID found"));
}

// ─── embed / embed-url ───────────────────────────────────────────────────────

#[test]
fn embed_url_uses_default_player_params() {
    ytembed()
        .args(["embed-url", "https://youtu.be/pxk4YF46rsA"])
        .assert()
        .success()
        .stdout(
            "https://www.youtube.com/embed/pxk4YF46rsA?\
             modestbranding=1;controls=1;showinfo=0;rel=0;fs=1\n",
        );
}

#[test]
fn embed_url_accepts_custom_params() {
    ytembed()
        .args(["embed-url", "https://youtu.be/pxk4YF46rsA", "--params", "rel=0"])
        .assert()
        .success()
        .stdout("https://www.youtube.com/embed/pxk4YF46rsA?rel=0\n");
}

#[test]
fn embed_prints_iframe_markup() {
    ytembed()
        .args(["embed", "https://youtu.be/pxk4YF46rsA", "--class", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<iframe class='foo'"))
        .stdout(predicate::str::contains("frameborder='0'"))
        .stdout(predicate::str::contains(" allowfullscreen"))
        .stdout(predicate::str::contains(
            "src='https://www.youtube.com/embed/pxk4YF46rsA?",
        ));
}

#[test]
fn embed_attr_overrides_and_appends() {
    ytembed()
        .args([
            "embed",
            "https://youtu.be/pxk4YF46rsA",
            "--attr",
            "frameborder=1",
            "--attr",
            "data-test=1234",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("frameborder='1'"))
        .stdout(predicate::str::contains("data-test='1234'"))
        .stdout(predicate::str::contains("frameborder='0'").not());
}

// ─── metadata commands fail fast without a key ───────────────────────────────

#[test]
fn info_without_api_key_fails_fast() {
    ytembed()
        .env_remove("YOUTUBE_API_KEY")
        .args(["info", "https://youtu.be/pxk4YF46rsA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YOUTUBE_API_KEY"));
}

#[test]
fn thumbnail_without_api_key_fails_fast() {
    ytembed()
        .env_remove("YOUTUBE_API_KEY")
        .args(["thumbnail", "https://youtu.be/pxk4YF46rsA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YOUTUBE_API_KEY"));
}
