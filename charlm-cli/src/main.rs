use std::path::PathBuf;

use anyhow::{Context, Result};
use charlm_core::model::generator::Generator;
use charlm_core::model::language_model::LanguageModel;
use clap::{Parser, ValueEnum};
use log::info;

/// Seed used in deterministic mode; reruns reproduce the same text.
const DETERMINISTIC_SEED: u64 = 20;

#[derive(Parser, Debug)]
#[command(author, version, about = "Character-level n-gram text generator", long_about = None)]
struct Cli {
	/// Context window length, in characters
	window_length: usize,

	/// Text to start generation from
	initial_text: String,

	/// Total length of the generated text, prompt included
	generated_length: usize,

	/// Random number generation mode
	#[arg(value_enum)]
	mode: Mode,

	/// Path to the training corpus
	corpus: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
	/// Unseeded generation, different output on every run
	Random,
	/// Fixed-seed generation, reproducible output
	Deterministic,
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	let model = LanguageModel::train_from_file(&cli.corpus, cli.window_length)
		.with_context(|| format!("failed to train on {}", cli.corpus.display()))?;
	info!(
		"trained on {}: {} distinct windows of length {}",
		cli.corpus.display(),
		model.len(),
		cli.window_length
	);

	let mut generator = match cli.mode {
		Mode::Random => Generator::new(model),
		Mode::Deterministic => Generator::with_seed(model, DETERMINISTIC_SEED),
	};

	println!("{}", generator.generate(&cli.initial_text, cli.generated_length));
	Ok(())
}
