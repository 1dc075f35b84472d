// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sequences of chords, and their compact byte form.
//!
//! A chord sequence can be encoded as one byte per chord plus a dictionary
//! mapping each byte back to a chord name. The encoding only keeps names:
//! octaves and doubled notes are lost.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::ops::{Deref, DerefMut};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chord::Chord;
use super::error::TheoryError;
use super::note::KeyNumber;
use super::scale::{eligible_scales_for_notes, Scales};

/// Largest number of distinct chord names a byte dictionary can hold.
/// Code 0 is never assigned.
pub const MAX_ENCODED_CHORDS: usize = u8::MAX as usize;

/// An ordered list of chords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chords(pub Vec<Chord>);

impl Chords {
    /// Create a sequence from chords
    pub fn new(chords: Vec<Chord>) -> Self {
        Self(chords)
    }

    /// One chord per distinct abbreviated name, first occurrence kept.
    ///
    /// Callers that need a musical order should sort the result.
    pub fn uniques(&self) -> Chords {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|chord| seen.insert(chord.abbrev_name()))
            .cloned()
            .collect()
    }

    /// Sort in place on each chord's identified root; returns `self` for chaining.
    ///
    /// Chords without a root sort first.
    pub fn sorted_on_roots(&mut self) -> &mut Self {
        let mut keyed: Vec<(Option<u8>, Chord)> = self
            .0
            .drain(..)
            .map(|chord| (chord.definition().root_pitch_class(), chord))
            .collect();
        keyed.sort_by_key(|(root, _)| *root);
        self.0 = keyed.into_iter().map(|(_, chord)| chord).collect();
        self
    }

    /// Root pitch class of each chord, -1 for chords that could not be identified
    pub fn root_notes(&self) -> Vec<KeyNumber> {
        self.0
            .iter()
            .map(|chord| {
                chord
                    .definition()
                    .root_pitch_class()
                    .map_or(-1, |pc| pc as KeyNumber)
            })
            .collect()
    }

    /// Scales that contain the root of every chord
    pub fn eligible_scales(&self) -> Scales {
        let notes = self.uniques().sorted_on_roots().root_notes();
        eligible_scales_for_notes(&notes)
    }

    /// Encode as one byte per chord plus a code-to-name dictionary.
    ///
    /// Codes are assigned from 1 in first-seen order. Fails when the
    /// sequence has more than [`MAX_ENCODED_CHORDS`] distinct names.
    pub fn to_bytes(&self) -> Result<EncodedChords, TheoryError> {
        let mut codes: HashMap<String, u8> = HashMap::new();
        let mut dict = BTreeMap::new();
        let mut data = Vec::with_capacity(self.0.len());

        for chord in &self.0 {
            let name = chord.abbrev_name();
            let code = match codes.get(&name) {
                Some(&code) => code,
                None => {
                    if codes.len() >= MAX_ENCODED_CHORDS {
                        return Err(TheoryError::DictionaryFull {
                            max: MAX_ENCODED_CHORDS,
                        });
                    }
                    let code = codes.len() as u8 + 1;
                    codes.insert(name.clone(), code);
                    dict.insert(code, name);
                    code
                }
            };
            data.push(code);
        }

        Ok(EncodedChords { data, dict })
    }

    /// Decode chords from their byte form; chords come back in octave 0.
    ///
    /// Codes missing from the dictionary, or names that do not parse,
    /// become empty chords so the sequence keeps its length.
    pub fn from_bytes(encoded: &EncodedChords) -> Chords {
        encoded
            .data
            .iter()
            .map(|code| {
                let chord = encoded.dict.get(code).and_then(|name| Chord::from_abbrev(name));
                if chord.is_none() {
                    debug!(code, "byte code does not decode to a chord");
                }
                chord.unwrap_or_default()
            })
            .collect()
    }
}

impl fmt::Display for Chords {
    /// Comma separated abbreviated names ("Bmin,Dmaj,F#min"), skipping
    /// chords with fewer than two keys.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .0
            .iter()
            .filter(|chord| chord.keys.len() > 1)
            .map(Chord::abbrev_name)
            .collect();
        f.write_str(&names.join(","))
    }
}

impl Deref for Chords {
    type Target = Vec<Chord>;

    fn deref(&self) -> &Vec<Chord> {
        &self.0
    }
}

impl DerefMut for Chords {
    fn deref_mut(&mut self) -> &mut Vec<Chord> {
        &mut self.0
    }
}

impl FromIterator<Chord> for Chords {
    fn from_iter<I: IntoIterator<Item = Chord>>(iter: I) -> Self {
        Chords(iter.into_iter().collect())
    }
}

impl IntoIterator for Chords {
    type Item = Chord;
    type IntoIter = std::vec::IntoIter<Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chords {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Byte form of a chord sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedChords {
    /// One code per chord, in sequence order
    pub data: Vec<u8>,
    /// Code to abbreviated chord name
    pub dict: BTreeMap<u8, String>,
}

impl EncodedChords {
    /// Parse an encoded sequence from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse encoded chords")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize encoded chords")
    }
}
