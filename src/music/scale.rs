// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales anchored on a tonic, and matching notes against scales.
//!
//! Provides note-in-scale tests, one-step note correction, chords built on
//! scale degrees, and the search for every scale that can hold a set of
//! notes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Deref;

use tracing::debug;

use super::chord::Chord;
use super::chord_def::ChordDefinition;
use super::chords::Chords;
use super::note::{pitch_class_of, KeyNumber, Note};
use super::scale_def::{scale_chords, scale_notes, ScaleDefinition, ScaleName, SCALE_DEFS};

/// A scale shape anchored on a root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Tonic, as an absolute key or a pitch class
    pub root: KeyNumber,
    pub def: &'static ScaleDefinition,
}

impl Scale {
    /// Create a new scale from root and scale name
    pub fn new(root: KeyNumber, name: ScaleName) -> Self {
        Self {
            root,
            def: name.def(),
        }
    }

    /// Tonic note, octave discarded
    pub fn tonic(&self) -> Note {
        Note::of_key(self.root)
    }

    /// Offset of `note` above the root, 0-11
    fn relative_pitch_class(&self, note: KeyNumber) -> u8 {
        (pitch_class_of(note) + 12 - pitch_class_of(self.root)) % 12
    }

    /// Offset to apply to `note` to keep it in the scale.
    ///
    /// 0 when the note is in the scale, -1 otherwise (pull it down a
    /// half-step).
    pub fn offset_for_note(&self, note: KeyNumber) -> i32 {
        if self.def.in_scale[self.relative_pitch_class(note) as usize] {
            0
        } else {
            -1
        }
    }

    /// `note` moved down a half-step when it falls outside the scale.
    ///
    /// A single correction step: a note two half-steps out is not fully
    /// corrected.
    pub fn adjusted_note(&self, note: KeyNumber) -> KeyNumber {
        note + self.offset_for_note(note)
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: KeyNumber) -> bool {
        self.offset_for_note(note) == 0
    }

    /// Zero-based scale degree of a note, if it's in the scale
    pub fn degree_of(&self, note: KeyNumber) -> Option<usize> {
        let offset = self.relative_pitch_class(note);
        self.def.notes_in_scale().iter().position(|&pc| pc == offset)
    }

    /// Pitch classes of the scale on this root, tonic first
    pub fn notes(&self) -> Vec<u8> {
        scale_notes(self.tonic(), self.def.name).0
    }

    /// Triad (3 notes) built on `note` with this scale's harmony
    pub fn triad_chord_for_root(&self, note: KeyNumber) -> Chord {
        self.chord_for_root(note, 3)
    }

    /// Seventh chord (4 notes) built on `note`
    pub fn seventh_chord_for_root(&self, note: KeyNumber) -> Chord {
        self.chord_for_root(note, 4)
    }

    /// Ninth chord (5 notes) built on `note`
    pub fn ninth_chord_for_root(&self, note: KeyNumber) -> Chord {
        self.chord_for_root(note, 5)
    }

    fn chord_for_root(&self, note: KeyNumber, notes_in_chord: usize) -> Chord {
        let mut chord = Chord::new(vec![note]);
        let Some(table) = scale_chords(self.def.name) else {
            debug!(scale = %self.def.name, "no chord table for scale");
            return chord;
        };
        let Some(degree) = self.degree_of(note) else {
            debug!(note, scale = %self, "root is not in the scale");
            return chord;
        };
        let row = match notes_in_chord {
            0..=3 => 0, // triad
            4 => 1,     // 7th
            _ => 2,     // 9th
        };
        let abbrev = table[degree][row];
        if let Some(def) = ChordDefinition::by_abbrev(abbrev) {
            let mut last = note;
            for &step in def.half_steps {
                let Some(next) = last.checked_add(step as KeyNumber) else {
                    debug!(note, abbrev, "chord does not fit in the key range");
                    return Chord::new(vec![note]);
                };
                last = next;
                chord.keys.push(last);
            }
        }
        chord
    }

    /// Triads on the given zero-based degrees, rooted in the scale's octave
    pub fn progression_chords(&self, degrees: &[usize]) -> Chords {
        let notes = self.def.notes_in_scale();
        degrees
            .iter()
            .filter_map(|&degree| notes.get(degree % notes.len().max(1)))
            .map(|&offset| match self.root.checked_add(offset as KeyNumber) {
                Some(note) => self.triad_chord_for_root(note),
                None => {
                    debug!(root = self.root, offset, "degree does not fit in the key range");
                    Chord::new(vec![self.root])
                }
            })
            .collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic(), self.def.name)
    }
}

/// A list of scales
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scales(pub Vec<Scale>);

impl Scales {
    /// Only the scales flagged popular
    pub fn popular(&self) -> Scales {
        Scales(self.0.iter().copied().filter(|s| s.def.popular).collect())
    }

    /// Display names, in order
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(Scale::to_string).collect()
    }
}

impl Deref for Scales {
    type Target = [Scale];

    fn deref(&self) -> &[Scale] {
        &self.0
    }
}

impl IntoIterator for Scales {
    type Item = Scale;
    type IntoIter = std::vec::IntoIter<Scale>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scales {
    type Item = &'a Scale;
    type IntoIter = std::slice::Iter<'a, Scale>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Every scale, on every tonic present in `notes`, containing all of `notes`.
///
/// Negative values are ignored. Only pitch classes found in the input are
/// tried as tonics. Results are unique and sorted by display name.
pub fn eligible_scales_for_notes(notes: &[KeyNumber]) -> Scales {
    let wanted: BTreeSet<u8> = notes
        .iter()
        .filter(|&&n| n >= 0)
        .map(|&n| pitch_class_of(n))
        .collect();

    let mut found: BTreeMap<String, Scale> = BTreeMap::new();
    for &root in &wanted {
        for def in SCALE_DEFS.iter() {
            let (scale_keys, _) = scale_notes(Note::from_pitch_class(root), def.name);
            if wanted.iter().all(|pc| scale_keys.contains(pc)) {
                let scale = Scale {
                    root: root as KeyNumber,
                    def,
                };
                found.insert(scale.to_string(), scale);
            }
        }
    }
    debug!(notes = ?wanted, matches = found.len(), "eligible scales");
    Scales(found.into_values().collect())
}
