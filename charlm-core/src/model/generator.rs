use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::language_model::LanguageModel;

/// Text generator driving repeated sampling over a trained model.
///
/// # Responsibilities
/// - Maintain a sliding window over the already-generated text
/// - Draw uniform values from an instance-scoped random source
/// - Extend an initial prompt one sampled character at a time
///
/// # Notes
/// - The random source is owned by the generator, never global. A fixed
///   seed reproduces the exact same output sequence across runs; if one
///   generator serves several calls, draws are consumed in call order.
/// - The model is read-only here; one compiled model could be shared by
///   several generators.
#[derive(Debug)]
pub struct Generator {
	model: LanguageModel,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator seeded from OS entropy.
	///
	/// Generating from this instance multiple times produces different
	/// random texts. Good for production.
	pub fn new(model: LanguageModel) -> Self {
		Self { model, rng: StdRng::from_os_rng() }
	}

	/// Creates a generator with a fixed seed.
	///
	/// Generating from models trained on the same corpus with the same
	/// seed produces the same texts every time. Good for debugging.
	pub fn with_seed(model: LanguageModel, seed: u64) -> Self {
		Self { model, rng: StdRng::seed_from_u64(seed) }
	}

	/// Returns the trained model backing this generator.
	pub fn model(&self) -> &LanguageModel {
		&self.model
	}

	/// Extends `initial_text` by repeated sampling until it reaches
	/// `target_length` characters in total, prompt included.
	///
	/// Each step looks up the last `window_length` characters of the text
	/// so far, draws a uniform value in [0, 1), samples the next character
	/// from the window's distribution and appends it.
	///
	/// # Behavior
	/// - A prompt shorter than the window length is returned unchanged:
	///   there is no full window to look up.
	/// - A window absent from the model stops generation; the text built
	///   so far is returned as-is. Unseen context is an expected
	///   termination condition, not an error.
	/// - A `target_length` no larger than the prompt length returns the
	///   prompt unchanged.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let window_length = self.model.window_length();
		let mut generated: Vec<char> = initial_text.chars().collect();
		if generated.len() < window_length {
			return initial_text.to_owned();
		}

		while generated.len() < target_length {
			let window: String = generated[generated.len() - window_length..].iter().collect();
			let distribution = match self.model.distribution(&window) {
				Some(distribution) => distribution,
				None => break,
			};
			let draw: f64 = self.rng.random();
			match distribution.sample(draw) {
				Some(chr) => generated.push(chr),
				None => break,
			}
		}

		generated.into_iter().collect()
	}
}
