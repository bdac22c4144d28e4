use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn corpus_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
	let path = dir.path().join("corpus.txt");
	fs::write(&path, contents).expect("write corpus");
	path
}

fn charlm() -> Command {
	Command::cargo_bin("charlm-cli").expect("binary exists")
}

#[test]
fn deterministic_mode_prints_the_expected_text() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(&dir, "abcabcabcabc");

	charlm()
		.args(["3", "abc", "10", "deterministic"])
		.arg(&corpus)
		.assert()
		.success()
		.stdout("abcabcabca\n");
}

#[test]
fn deterministic_runs_are_reproducible() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(
		&dir,
		"it was the best of times, it was the worst of times, \
		 it was the age of wisdom, it was the age of foolishness",
	);

	let mut outputs = Vec::new();
	for _ in 0..2 {
		let output = charlm()
			.args(["4", "it was", "80", "deterministic"])
			.arg(&corpus)
			.assert()
			.success()
			.get_output()
			.stdout
			.clone();
		outputs.push(output);
	}
	assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn short_prompt_is_echoed_back() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(&dir, "abcabcabcabc");

	charlm()
		.args(["5", "abc", "50", "random"])
		.arg(&corpus)
		.assert()
		.success()
		.stdout("abc\n");
}

#[test]
fn non_numeric_window_length_is_rejected() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(&dir, "abcabcabcabc");

	charlm()
		.args(["three", "abc", "10", "deterministic"])
		.arg(&corpus)
		.assert()
		.failure();
}

#[test]
fn zero_window_length_is_fatal() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(&dir, "abcabcabcabc");

	charlm()
		.args(["0", "abc", "10", "deterministic"])
		.arg(&corpus)
		.assert()
		.failure()
		.stderr(predicate::str::contains("window length"));
}

#[test]
fn missing_corpus_is_fatal() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let missing = dir.path().join("missing.txt");

	charlm()
		.args(["3", "abc", "10", "random"])
		.arg(&missing)
		.assert()
		.failure()
		.stderr(predicate::str::contains("failed to train"));
}

#[test]
fn unknown_mode_is_rejected() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = corpus_file(&dir, "abcabcabcabc");

	charlm()
		.args(["3", "abc", "10", "sometimes"])
		.arg(&corpus)
		.assert()
		.failure();
}
