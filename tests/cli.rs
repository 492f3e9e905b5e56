//! End-to-end tests for the `humanizer` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn humanizer() -> Command {
    Command::cargo_bin("humanizer").unwrap()
}

#[test]
fn rewrites_trailing_words() {
    humanizer()
        .args(["--intensity", "light", "--seed", "1", "We", "do", "not", "utilize", "it."])
        .assert()
        .success()
        .stdout("We don't use it.\n");
}

#[test]
fn reads_input_flag_and_stdin() {
    humanizer()
        .args(["--intensity", "light", "-i", "It is not   true."])
        .assert()
        .success()
        .stdout("It's not true.\n");

    humanizer()
        .args(["--intensity", "light"])
        .write_stdin("They are going to leave it.\n")
        .assert()
        .success()
        .stdout("They're gonna leave it.\n");
}

#[test]
fn seeded_runs_repeat() {
    let text = "Furthermore, it is important to note that students should utilize advanced vocabulary \
                when they do not understand a concept, and this will significantly improve their writing.";
    let run = || humanizer().args(["--seed", "7", "-i", text]).output().unwrap().stdout;
    assert_eq!(run(), run());
}

#[test]
fn json_output_has_all_fields() {
    humanizer()
        .args(["--json", "--intensity", "light", "-i", "We do not utilize it."])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""plain": "We don't use it.""#))
        .stdout(predicate::str::contains(r#""html":"#))
        .stdout(predicate::str::contains(r#""changed_words": 2"#));
}

#[test]
fn diff_output_highlights_new_words() {
    humanizer()
        .args(["--diff", "--intensity", "light", "-i", "We do not utilize it."])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<span class="highlight">don't</span>"#));
}

#[test]
fn report_lists_passes_without_color() {
    humanizer()
        .args(["--report", "--no-color", "--intensity", "balanced", "-i", "We do not utilize it."])
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabulary"))
        .stdout(predicate::str::contains("burstiness"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn empty_input_exits_with_2() {
    humanizer().write_stdin("   \n").assert().code(2).stderr(predicate::str::contains("no input"));
}

#[test]
fn bad_arguments_exit_with_2() {
    humanizer().args(["--intensity", "extreme", "x"]).assert().code(2);
    humanizer().args(["--no-such-flag"]).assert().code(2);
}
