use std::fs;

use charlm_core::error::ModelError;
use charlm_core::model::generator::Generator;
use charlm_core::model::language_model::LanguageModel;
use tempfile::TempDir;

fn corpus_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
	let path = dir.path().join("corpus.txt");
	fs::write(&path, contents).expect("write corpus");
	path
}

#[test]
fn trains_from_a_corpus_file_and_generates() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = corpus_file(&dir, "abcabcabcabc");

	let model = LanguageModel::train_from_file(&path, 3).expect("train");
	assert_eq!(model.len(), 3);

	let mut generator = Generator::with_seed(model, 20);
	assert_eq!(generator.generate("abc", 10), "abcabcabca");
}

#[test]
fn seeded_generators_reproduce_across_instances() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let corpus = "it was the best of times, it was the worst of times, \
		it was the age of wisdom, it was the age of foolishness";
	let path = corpus_file(&dir, corpus);

	let mut first =
		Generator::with_seed(LanguageModel::train_from_file(&path, 4).expect("train"), 20);
	let mut second =
		Generator::with_seed(LanguageModel::train_from_file(&path, 4).expect("train"), 20);

	assert_eq!(first.generate("it was", 120), second.generate("it was", 120));
}

#[test]
fn unreadable_corpus_is_a_fatal_io_error() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let missing = dir.path().join("missing.txt");

	let result = LanguageModel::train_from_file(&missing, 3);
	match result {
		Err(ModelError::Io { path, .. }) => assert_eq!(path, missing),
		other => panic!("expected an io error, got {:?}", other),
	}
}

#[test]
fn zero_window_length_fails_before_reading_the_corpus() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let missing = dir.path().join("missing.txt");

	// The window length is rejected even though the file does not exist.
	let result = LanguageModel::train_from_file(&missing, 0);
	assert!(matches!(result, Err(ModelError::InvalidWindowLength)));
}

#[test]
fn empty_corpus_trains_an_empty_model() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = corpus_file(&dir, "");

	let model = LanguageModel::train_from_file(&path, 3).expect("train");
	assert!(model.is_empty());

	let mut generator = Generator::with_seed(model, 20);
	assert_eq!(generator.generate("abc", 10), "abc");
}
