// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! Chord identification over any voicing, the chord and scale catalogs,
//! scale matching for a set of notes, and roman-numeral descriptions of
//! chord progressions.

pub mod chord;
pub mod chord_def;
pub mod chords;
pub mod error;
pub mod interval;
pub mod note;
pub mod progression;
pub mod scale;
pub mod scale_def;

pub use chord::Chord;
pub use chord_def::{ChordDefinition, CHORD_DEFS};
pub use chords::{Chords, EncodedChords, MAX_ENCODED_CHORDS};
pub use error::TheoryError;
pub use interval::interval;
pub use note::{key_number, note_name, KeyNumber, Note};
pub use progression::{roman_numerals, MAJOR_PROGRESSIONS, MINOR_PROGRESSIONS};
pub use scale::{eligible_scales_for_notes, Scale, Scales};
pub use scale_def::{scale_notes, ScaleDefinition, ScaleDefinitions, ScaleName, SCALE_DEFS};
