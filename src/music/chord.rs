// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: sets of keys played together, and their identification.
//!
//! A chord is identified by the intervals between its distinct pitch
//! classes. Inversions are found by re-voicing the keys (sorted by pitch
//! class, then rotated) until a known shape matches; the key that ends up
//! first names the root.

use std::fmt;

use tracing::{debug, trace};

use super::chord_def::ChordDefinition;
use super::interval::{key_intervals, unique_pitch_classes};
use super::note::{key_number, note_name, pitch_class_of, KeyNumber, Note};

/// Keys pressed at the same time
#[derive(Debug, Clone, Default)]
pub struct Chord {
    /// Absolute keys of the voicing, in play order
    pub keys: Vec<KeyNumber>,
    intervals: Vec<i8>,
    /// Copy of `keys` the cached intervals were computed from
    interval_key_cache: Option<Vec<KeyNumber>>,
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Eq for Chord {}

impl Chord {
    /// Create a chord from absolute keys
    pub fn new(keys: Vec<KeyNumber>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Build a chord from a name such as "Bmin" or "F#maj7", rooted in octave 0.
    ///
    /// Returns `None` when the name is too short, the root letter is not a
    /// note, or the remainder is not a known abbreviation.
    pub fn from_abbrev(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.chars().count() < 2 {
            return None;
        }
        let mut chars = name.chars();
        let letter = chars.next()?;
        let rest = chars.as_str();
        let (root_name, abbrev) = match rest.strip_prefix('#') {
            Some(abbrev) => (format!("{}#", letter), abbrev),
            None => (letter.to_string(), rest),
        };
        let root = Note::from_str(&root_name)?;
        let Some(def) = ChordDefinition::by_abbrev(abbrev) else {
            debug!(name, "no chord abbreviation matches");
            return None;
        };

        let mut last = key_number(root, 0);
        let mut keys = Vec::with_capacity(def.half_steps.len() + 1);
        keys.push(last);
        for &step in def.half_steps {
            last += step as KeyNumber;
            keys.push(last);
        }
        Some(Self::new(keys))
    }

    /// Intervals between the distinct pitch classes of the keys.
    ///
    /// Octave duplicates are dropped, first occurrence wins. The result is
    /// cached until `keys` changes.
    pub fn intervals(&mut self) -> &[i8] {
        if !self.is_interval_cache_valid() {
            self.intervals = key_intervals(&unique_pitch_classes(&self.keys));
            self.interval_key_cache = Some(self.keys.clone());
        }
        &self.intervals
    }

    fn is_interval_cache_valid(&self) -> bool {
        self.interval_key_cache.as_ref() == Some(&self.keys)
    }

    /// Whether the current voicing has exactly the shape of `def`
    pub fn matches(&mut self, def: &ChordDefinition) -> bool {
        def.matches(self.intervals())
    }

    /// Identify the chord, re-voicing `keys` to the order that matched.
    ///
    /// Tries the keys as given, then sorted by pitch class, then each
    /// rotation of the sorted order. The returned definition is rooted on
    /// the first key of the matching voicing. When nothing matches the keys
    /// are left as given and the "Unknown" definition is returned.
    pub fn def(&mut self) -> ChordDefinition {
        let original = self.keys.clone();
        if let Some(def) = self.find_voicing() {
            return def;
        }
        debug!(keys = ?original, "no chord shape matches");
        self.keys = original;
        ChordDefinition::unknown()
    }

    /// Identify the chord without touching `keys`
    pub fn definition(&self) -> ChordDefinition {
        self.clone().def()
    }

    fn find_voicing(&mut self) -> Option<ChordDefinition> {
        if let Some(def) = self.lookup() {
            return Some(def);
        }
        if self.keys.len() < 2 {
            return None;
        }

        // stable, so octave doublings keep their relative order
        self.keys.sort_by_key(|&key| pitch_class_of(key));
        if let Some(def) = self.lookup() {
            return Some(def);
        }

        let mut retries = self.keys.len();
        while retries > 0 {
            self.keys.rotate_left(1);
            trace!(keys = ?self.keys, "trying rotated voicing");
            if let Some(def) = self.lookup() {
                return Some(def);
            }
            retries -= 1;
        }
        None
    }

    fn lookup(&mut self) -> Option<ChordDefinition> {
        let first = *self.keys.first()?;
        ChordDefinition::by_intervals(self.intervals()).map(|def| def.with_root(Note::of_key(first)))
    }

    /// Root and abbreviation of the identified chord ("Bmin")
    pub fn abbrev_name(&self) -> String {
        self.definition().abbrev_name()
    }

    /// Lowest pitch class among the keys
    pub fn root(&self) -> Option<u8> {
        self.keys.iter().map(|&key| pitch_class_of(key)).min()
    }

    /// Lowest sounding key
    pub fn bass(&self) -> Option<KeyNumber> {
        self.keys.iter().copied().min()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut voiced = self.clone();
        let def = voiced.def();
        let names: Vec<String> = voiced.keys.iter().map(|&key| note_name(key)).collect();
        write!(f, "{} - \"{}\"", def, names.join(", "))
    }
}
