use std::fmt;

use super::char_data::{CharData, CharProb};

/// The observed next-character counts for one window.
///
/// Entries are kept in insertion order (first-observed character first).
/// This order carries through compilation to the cumulative-probability
/// sequence, so it directly determines sampling tie-breaks and must be
/// preserved.
///
/// ## Responsibilities
/// - Accumulate observation counts during training
/// - Compile counts into a read-only [`CompiledDistribution`]
///
/// ## Invariants
/// - All counts are strictly positive
/// - Counts sum to the number of times the window was observed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
	entries: Vec<CharData>,
}

impl Distribution {
	/// Creates a new empty distribution.
	pub(crate) fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records an observation of `chr` following this distribution's window.
	///
	/// - If the character was already observed, its count is increased.
	/// - Otherwise, a new entry is appended with an initial count of 1.
	pub(crate) fn update(&mut self, chr: char) {
		match self.entries.iter_mut().find(|entry| entry.chr() == chr) {
			Some(entry) => entry.increment(),
			None => self.entries.push(CharData::new(chr)),
		}
	}

	/// Total number of observations recorded for this window.
	pub fn total(&self) -> u64 {
		self.entries.iter().map(CharData::count).sum()
	}

	/// Returns the entries in insertion order.
	pub fn entries(&self) -> impl Iterator<Item = &CharData> {
		self.entries.iter()
	}

	/// Compiles the counts into probabilities and cumulative probabilities.
	///
	/// Walks the entries in insertion order, setting each probability to
	/// `count / total` and each cumulative probability to the running sum
	/// so far. Full floating-point precision is kept throughout; rounding
	/// intermediate values compounds across a distribution and makes the
	/// final cumulative probability diverge from 1.0.
	///
	/// # Notes
	/// - Pure function of the counts: compiling twice yields the same result.
	/// - The last entry's cumulative probability is 1.0 up to floating-point
	///   rounding; the sampler tolerates the residual (see
	///   [`CompiledDistribution::sample`]).
	pub fn compile(&self) -> CompiledDistribution {
		let total = self.total() as f64;
		let mut entries = Vec::with_capacity(self.entries.len());
		let mut running = 0.0_f64;
		for entry in &self.entries {
			let probability = entry.count() as f64 / total;
			running += probability;
			entries.push(CharProb::new(entry.chr(), probability, running));
		}
		CompiledDistribution { entries }
	}
}

/// The compiled, read-only distribution for one window.
///
/// Holds the derived probability view produced by [`Distribution::compile`].
/// Once built it is never mutated; generation only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledDistribution {
	entries: Vec<CharProb>,
}

impl CompiledDistribution {
	/// Selects a character from the distribution for a uniform draw in [0, 1).
	///
	/// Walks the entries in order and returns the first whose cumulative
	/// probability is strictly greater than `draw` (inverse-CDF lookup).
	///
	/// # Notes
	/// - If rounding leaves `draw` at or beyond the last cumulative
	///   probability, the last entry's character is returned. This fallback
	///   is deterministic and part of the contract; it is never an error.
	/// - Returns `None` only for an empty distribution, which a trained
	///   model never stores.
	pub fn sample(&self, draw: f64) -> Option<char> {
		let mut fallback: Option<char> = None;
		for entry in &self.entries {
			if entry.cumulative() > draw {
				return Some(entry.chr());
			}
			fallback = Some(entry.chr());
		}
		fallback
	}

	/// Returns the compiled entries in cumulative order.
	pub fn entries(&self) -> impl Iterator<Item = &CharProb> {
		self.entries.iter()
	}

	/// Number of distinct characters in the distribution.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the distribution has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for CompiledDistribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		Ok(())
	}
}
