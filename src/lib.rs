// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords, scales and progressions.

pub mod config;
pub mod music;

pub use config::TheoryConfig;
pub use music::{Chord, ChordDefinition, Chords, Note, Scale, ScaleName, Scales, TheoryError};
