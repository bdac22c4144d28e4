use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during training setup or corpus I/O.
///
/// The taxonomy is intentionally small: short prompts, unseen windows and
/// sampling rounding edges are all defined fallback behaviors, not errors.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The requested context window length is zero.
	#[error("window length must be at least 1")]
	InvalidWindowLength,
	/// Filesystem error while reading the corpus.
	#[error("failed to read corpus {path:?}: {source}")]
	Io {
		/// Underlying IO error returned by the standard library.
		source: std::io::Error,
		/// Corpus path associated with the failure.
		path: PathBuf,
	},
}

impl ModelError {
	/// Helper constructor that attaches the corpus path when wrapping IO errors.
	pub fn io(source: std::io::Error, path: PathBuf) -> Self {
		Self::Io { source, path }
	}
}
