//! Integration tests for the `ask` and `rules` subcommands
//!
//! These drive the compiled binary; the interactive `chat` loop itself is
//! covered by the session tests, only its argument validation is driven here.

use assert_cmd::Command;
use predicates::prelude::*;

fn foliochat() -> Command {
    Command::cargo_bin("foliochat").expect("binary builds")
}

#[test]
fn ask_resolves_experience_question() {
    foliochat()
        .args(["ask", "tell me about your experience"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 years"));
}

#[test]
fn ask_is_case_insensitive() {
    foliochat()
        .args(["ask", "I love your SKILLS and TECH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TypeScript"));
}

#[test]
fn ask_unmatched_utterance_gets_default_reply() {
    foliochat()
        .args(["ask", "what is the weather like today?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("That's a great question!"));
}

#[test]
fn ask_first_listed_category_wins() {
    foliochat()
        .args(["ask", "tell me about your work on a project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 years"));
}

#[test]
fn ask_json_emits_structured_output() {
    let output = foliochat()
        .args(["ask", "how can I contact you?", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["utterance"], "how can I contact you?");
    assert_eq!(parsed["responder"], "keyword");
    assert!(parsed["reply"]
        .as_str()
        .unwrap()
        .contains("suliman.sultan@email.com"));
}

#[test]
fn ask_rejects_unknown_responder() {
    foliochat()
        .args(["ask", "hello", "--responder", "parrot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parrot"));
}

#[test]
fn ask_pool_responder_answers_from_pool() {
    let output = foliochat()
        .args(["ask", "hello", "--responder", "pool", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["responder"], "pool");
    assert!(!parsed["reply"].as_str().unwrap().is_empty());
}

#[test]
fn chat_rejects_delay_override_beyond_cap() {
    // The cap check runs before the interactive loop starts, so no input is
    // consumed.
    foliochat()
        .args(["chat", "--delay-ms", "999999999"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reply delay must be at most"));
}

#[test]
fn rules_lists_priority_order() {
    let assert = foliochat().args(["rules"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let experience = stdout.find("experience").expect("experience listed");
    let skills = stdout.find("skills").expect("skills listed");
    let project = stdout.find("project").expect("project listed");
    let contact = stdout.find("contact").expect("contact listed");

    assert!(experience < skills && skills < project && project < contact);
}

#[test]
fn rules_json_includes_default_reply() {
    let output = foliochat()
        .args(["rules", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["rules"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["rules"][0]["triggers"][0], "experience");
    assert!(parsed["default_reply"]
        .as_str()
        .unwrap()
        .contains("great question"));
}
