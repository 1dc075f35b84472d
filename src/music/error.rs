// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for music theory lookups.

use thiserror::Error;

/// Errors raised by the theory library.
///
/// Unmatched chords and unsupported scale degrees are not errors; they
/// resolve to the "Unknown" definition or a single-note chord.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("too many distinct chords to encode (max {max})")]
    DictionaryFull { max: usize },
    #[error("unknown scale '{0}'")]
    UnknownScale(String),
    #[error("invalid note name '{0}'")]
    InvalidNote(String),
}
