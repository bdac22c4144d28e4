use std::fmt;

/// A single observed (character, count) pair within one window's distribution.
///
/// Counts are observed data, accumulated during training. Derived fields
/// (probability, cumulative probability) live in [`CharProb`] and only exist
/// once the distribution has been compiled.
///
/// ## Invariants
/// - `count` is strictly positive (an entry is only created on observation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharData {
	/// The observed character.
	chr: char,
	/// How many times this character was seen following the window.
	count: u64,
}

impl CharData {
	/// Creates a record for a character observed for the first time.
	pub(crate) fn new(chr: char) -> Self {
		Self { chr, count: 1 }
	}

	/// Records one more observation of this character.
	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	/// Returns the observed character.
	pub fn chr(&self) -> char {
		self.chr
	}

	/// Returns the observation count.
	pub fn count(&self) -> u64 {
		self.count
	}
}

/// A compiled (character, probability, cumulative probability) record.
///
/// Produced by probability compilation and read-only afterward. The
/// cumulative probability is the running sum of probabilities in the
/// distribution's insertion order, used for inverse-CDF sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct CharProb {
	chr: char,
	probability: f64,
	cumulative: f64,
}

impl CharProb {
	pub(crate) fn new(chr: char, probability: f64, cumulative: f64) -> Self {
		Self { chr, probability, cumulative }
	}

	/// Returns the character.
	pub fn chr(&self) -> char {
		self.chr
	}

	/// Returns the character's probability within its distribution.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Returns the running sum of probabilities up to and including this entry.
	pub fn cumulative(&self) -> f64 {
		self.cumulative
	}
}

impl fmt::Display for CharProb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {:.4} {:.4})", self.chr, self.probability, self.cumulative)
	}
}
