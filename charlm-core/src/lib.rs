//! Character-level n-gram language model library.
//!
//! This crate learns, from a text corpus, the empirical distribution of the
//! next character given the preceding fixed-length window of characters:
//! - A single streaming training pass over a character source
//! - Per-window distributions compiled into cumulative probabilities
//! - Inverse-CDF sampling to extend a prompt one character at a time
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core language model, distributions and generation logic.
///
/// This module exposes the trained model and generator interface while
/// keeping internal count representations private.
pub mod model;

/// Error type and crate-wide `Result` alias.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;
