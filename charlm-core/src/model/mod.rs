//! Top-level module for the character-level language model.
//!
//! This crate provides a fixed-window next-character model, including:
//! - Observed and compiled per-character records (`CharData`, `CharProb`)
//! - Insertion-ordered distributions with cumulative probabilities (`Distribution`)
//! - The trained window-to-distribution mapping (`LanguageModel`)
//! - A seedable text generator (`Generator`)

/// High-level interface for generating text from a trained model.
///
/// Drives repeated inverse-CDF sampling over a sliding window, with an
/// instance-scoped random source for reproducible output.
pub mod generator;

/// The trained model: a read-only mapping from fixed-length windows to
/// compiled distributions, built by one streaming pass over a corpus.
pub mod language_model;

/// Per-window character distributions.
///
/// Handles observation counting, probability compilation and
/// cumulative-probability sampling.
pub mod distribution;

/// Single-character records: observed counts and compiled probabilities.
pub mod char_data;
