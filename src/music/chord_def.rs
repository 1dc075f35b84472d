// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord shapes known to the library.
//!
//! Each shape is the list of half-steps between consecutive notes of the
//! chord stacked from its root. Entries are immutable; a root is attached
//! to a copy with [`ChordDefinition::with_root`].

use std::fmt;

use super::note::Note;

/// Name used for chords that match no known shape
pub const UNKNOWN_CHORD: &str = "Unknown";

/// A chord shape, optionally anchored on a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordDefinition {
    /// English name, e.g. "Minor Seventh"
    pub name: &'static str,
    /// Abbreviation appended to the root, e.g. "min7"
    pub abbrev: &'static str,
    /// Root note when the definition was resolved from actual keys
    pub root: Option<Note>,
    /// Half-steps between consecutive chord notes, starting from the root
    pub half_steps: &'static [u8],
}

impl ChordDefinition {
    const fn new(name: &'static str, abbrev: &'static str, half_steps: &'static [u8]) -> Self {
        Self {
            name,
            abbrev,
            root: None,
            half_steps,
        }
    }

    /// The definition returned when nothing matches
    pub const fn unknown() -> Self {
        Self::new(UNKNOWN_CHORD, "", &[])
    }

    /// Whether this is the "Unknown" placeholder
    pub fn is_unknown(&self) -> bool {
        self.half_steps.is_empty()
    }

    /// Copy of this definition anchored on `root`
    pub fn with_root(&self, root: Note) -> Self {
        Self {
            root: Some(root),
            ..*self
        }
    }

    /// Root pitch class, if any
    pub fn root_pitch_class(&self) -> Option<u8> {
        self.root.map(Note::pitch_class)
    }

    /// Root followed by abbreviation ("F#min"); empty for unknown chords
    pub fn abbrev_name(&self) -> String {
        match self.root {
            Some(root) => format!("{}{}", root, self.abbrev),
            None => self.abbrev.to_string(),
        }
    }

    /// Whether `intervals` is exactly this shape
    pub fn matches(&self, intervals: &[i8]) -> bool {
        self.half_steps.len() == intervals.len()
            && self
                .half_steps
                .iter()
                .zip(intervals)
                .all(|(&step, &interval)| step as i8 == interval)
    }

    /// Catalog entry with the given abbreviation, ignoring case
    pub fn by_abbrev(abbrev: &str) -> Option<&'static ChordDefinition> {
        CHORD_DEFS
            .iter()
            .find(|def| def.abbrev.eq_ignore_ascii_case(abbrev))
    }

    /// First catalog entry whose shape is exactly `intervals`
    pub fn by_intervals(intervals: &[i8]) -> Option<&'static ChordDefinition> {
        CHORD_DEFS.iter().find(|def| def.matches(intervals))
    }
}

impl fmt::Display for ChordDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write!(f, "{} {}", root, self.name),
            None => f.write_str(self.name),
        }
    }
}

/// Every chord shape the library recognizes, in lookup order
pub static CHORD_DEFS: &[ChordDefinition] = &[
    // Triads and dyads
    ChordDefinition::new("Major", "maj", &[4, 3]),
    ChordDefinition::new("Minor", "min", &[3, 4]),
    ChordDefinition::new("Fifth", "5", &[7]),
    ChordDefinition::new("Diminished", "dim", &[3, 3]),
    ChordDefinition::new("Augmented", "aug", &[4, 4]),
    ChordDefinition::new("Suspended Second", "sus2", &[2, 5]),
    ChordDefinition::new("Suspended Fourth", "sus4", &[5, 2]),
    // Sixths and sevenths
    ChordDefinition::new("Sixth", "6", &[4, 3, 2]),
    ChordDefinition::new("Minor Sixth", "min6", &[3, 4, 2]),
    ChordDefinition::new("Seventh", "7", &[4, 3, 3]),
    ChordDefinition::new("Major Seventh", "maj7", &[4, 3, 4]),
    ChordDefinition::new("Minor Seventh", "min7", &[3, 4, 3]),
    ChordDefinition::new("Minor Major Seventh", "minmaj7", &[3, 4, 4]),
    ChordDefinition::new("Half Diminished Seventh", "m7b5", &[3, 3, 4]),
    ChordDefinition::new("Diminished Seventh", "dim7", &[3, 3, 3]),
    ChordDefinition::new("Augmented Seventh", "aug7", &[4, 4, 2]),
    ChordDefinition::new("Augmented Major Seventh", "maj7#5", &[4, 4, 3]),
    // Ninths
    ChordDefinition::new("Added Ninth", "add9", &[4, 3, 7]),
    ChordDefinition::new("Ninth", "9", &[4, 3, 3, 4]),
    ChordDefinition::new("Major Ninth", "maj9", &[4, 3, 4, 3]),
    ChordDefinition::new("Minor Ninth", "min9", &[3, 4, 3, 4]),
    ChordDefinition::new("Seventh Flat Ninth", "7b9", &[4, 3, 3, 3]),
    ChordDefinition::new("Minor Seventh Flat Ninth", "min7b9", &[3, 4, 3, 3]),
    ChordDefinition::new("Minor Major Ninth", "minmaj9", &[3, 4, 4, 3]),
    ChordDefinition::new("Half Diminished Ninth", "m9b5", &[3, 3, 4, 4]),
    ChordDefinition::new("Half Diminished Flat Ninth", "m7b5b9", &[3, 3, 4, 3]),
    ChordDefinition::new("Diminished Seventh Flat Ninth", "dim7b9", &[3, 3, 3, 4]),
    ChordDefinition::new("Augmented Major Ninth", "maj9#5", &[4, 4, 3, 3]),
    ChordDefinition::new("Major Seventh Sharp Ninth", "maj7#9", &[4, 3, 4, 4]),
    // Extended
    ChordDefinition::new("Eleventh", "11", &[4, 3, 3, 4, 3]),
    ChordDefinition::new("Minor Eleventh", "min11", &[3, 4, 3, 4, 3]),
    // 11th omitted
    ChordDefinition::new("Thirteenth", "13", &[4, 3, 3, 4, 7]),
    ChordDefinition::new("Minor Thirteenth", "min13", &[3, 4, 3, 4, 7]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_unambiguous() {
        let mut abbrevs = HashSet::new();
        let mut shapes = HashSet::new();
        for def in CHORD_DEFS {
            assert!(abbrevs.insert(def.abbrev.to_lowercase()), "duplicate abbrev {}", def.abbrev);
            assert!(shapes.insert(def.half_steps), "duplicate shape for {}", def.name);
            assert!(def.root.is_none());
        }
    }

    #[test]
    fn test_catalog_steps_stay_distinct() {
        for def in CHORD_DEFS {
            let mut seen = [false; 12];
            seen[0] = true;
            let mut sum = 0usize;
            for &step in def.half_steps {
                assert!((1..=8).contains(&step), "{} has step {}", def.name, step);
                sum += step as usize;
                assert!(!seen[sum % 12], "{} revisits a pitch class", def.name);
                seen[sum % 12] = true;
            }
        }
    }

    #[test]
    fn test_with_root_leaves_catalog_untouched() {
        let minor = ChordDefinition::by_abbrev("min").unwrap();
        let b_minor = minor.with_root(Note::B);
        assert_eq!(b_minor.root, Some(Note::B));
        assert_eq!(b_minor.to_string(), "B Minor");
        assert_eq!(minor.root, None);
        assert_eq!(ChordDefinition::by_abbrev("MIN").unwrap().root, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChordDefinition::unknown().to_string(), "Unknown");
        let def = ChordDefinition::by_abbrev("maj7").unwrap();
        assert_eq!(def.to_string(), "Major Seventh");
        assert_eq!(def.with_root(Note::Cs).to_string(), "C# Major Seventh");
    }

    #[test]
    fn test_abbrev_name() {
        let def = ChordDefinition::by_abbrev("min").unwrap().with_root(Note::Fs);
        assert_eq!(def.abbrev_name(), "F#min");
        assert_eq!(ChordDefinition::unknown().abbrev_name(), "");
    }

    #[test]
    fn test_by_intervals() {
        assert_eq!(ChordDefinition::by_intervals(&[4, 3]).unwrap().name, "Major");
        assert_eq!(ChordDefinition::by_intervals(&[3, 4, 3]).unwrap().name, "Minor Seventh");
        assert!(ChordDefinition::by_intervals(&[1]).is_none());
        assert!(ChordDefinition::by_intervals(&[]).is_none());
        assert!(ChordDefinition::by_intervals(&[-9, 4]).is_none());
    }
}
