use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::io;
use super::distribution::{CompiledDistribution, Distribution};

/// A trained character-level n-gram model.
///
/// Maps every window (fixed-length character sequence) observed in the
/// corpus to the compiled distribution of the characters that followed it.
///
/// # Responsibilities
/// - Build the frequency table in one streaming pass over a character source
/// - Compile every distribution before the model is handed out
/// - Serve read-only window lookups during generation
///
/// # Invariants
/// - `window_length` is always >= 1
/// - A window is present iff it was observed followed by at least one
///   character during training
/// - Every stored distribution is non-empty and compiled
#[derive(Clone, Debug)]
pub struct LanguageModel {
	/// Length of the context window, in characters.
	window_length: usize,

	/// Mapping from a window to its compiled next-character distribution.
	map: HashMap<String, CompiledDistribution>,
}

impl LanguageModel {
	/// Trains a model of the given window length from a character source.
	///
	/// Maintains a rolling buffer of the most recent `window_length`
	/// characters. Every character read once the buffer is full records one
	/// observation, keyed by the buffer's current contents, before the
	/// buffer slides forward. The first `window_length` characters only
	/// prime the buffer, and the final window of the source has no
	/// following character, so neither contributes an observation. Sources
	/// shorter than `window_length + 1` characters leave the model empty.
	///
	/// One left-to-right pass: O(source length) time. All counts are
	/// compiled before the model is returned, so it is read-only from birth.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn train<I>(source: I, window_length: usize) -> Result<Self>
	where
		I: IntoIterator<Item = char>,
	{
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}

		let mut counts: HashMap<String, Distribution> = HashMap::new();
		let mut window: VecDeque<char> = VecDeque::with_capacity(window_length);

		for chr in source {
			if window.len() == window_length {
				let key: String = window.iter().collect();
				counts.entry(key).or_insert_with(Distribution::new).update(chr);
				window.pop_front();
			}
			window.push_back(chr);
		}

		let map = counts
			.into_iter()
			.map(|(key, distribution)| (key, distribution.compile()))
			.collect();

		Ok(Self { window_length, map })
	}

	/// Trains a model from the text in the given corpus file.
	///
	/// # Errors
	/// - `ModelError::InvalidWindowLength` if `window_length` is 0,
	///   surfaced before the corpus is touched.
	/// - `ModelError::Io` if the corpus cannot be read; no recovery or
	///   partial training is attempted.
	pub fn train_from_file<P: AsRef<Path>>(path: P, window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}
		let contents = io::read_file(&path)
			.map_err(|source| ModelError::io(source, path.as_ref().to_path_buf()))?;
		Self::train(contents.chars(), window_length)
	}

	/// Returns the window length this model was trained with.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Looks up the compiled distribution for a window.
	///
	/// Returns `None` for windows never observed during training; the
	/// generator treats that as a normal stop condition, not an error.
	pub fn distribution(&self, window: &str) -> Option<&CompiledDistribution> {
		self.map.get(window)
	}

	/// Returns an iterator over all (window, distribution) pairs.
	pub fn distributions(&self) -> impl Iterator<Item = (&str, &CompiledDistribution)> {
		self.map.iter().map(|(key, distribution)| (key.as_str(), distribution))
	}

	/// Number of distinct windows in the model.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Whether the model holds no windows at all.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, distribution) in &self.map {
			writeln!(f, "{} : {}", key, distribution)?;
		}
		Ok(())
	}
}
