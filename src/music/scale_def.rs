// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale shapes known to the library.
//!
//! A scale shape is the sequence of half-steps between its consecutive
//! notes, ending with the step back to the octave, so the steps always sum
//! to 12. Membership flags are derived from the steps at compile time.

use std::fmt;
use std::sync::OnceLock;

use super::error::TheoryError;
use super::note::Note;

/// English names of the known scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaleName {
    Major,
    NaturalMinor, // Aeolian
    HarmonicMinor,
    MelodicMinor, // Ascending form
    WholeTone,
    Diminished,
    MajorPentatonic,
    MinorPentatonic,
    Dorian,
    JapInSen,
    MajorBebop,
    DominantBebop,
    Blues,
    Arabic,
    Enigmatic,
    Neapolitan,
    NeapolitanMinor,
    HungarianMinor,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian, // Hypodorian
}

impl ScaleName {
    /// Get a human-readable name for this scale
    pub fn name(self) -> &'static str {
        match self {
            ScaleName::Major => "Major",
            ScaleName::NaturalMinor => "Natural Minor",
            ScaleName::HarmonicMinor => "Harmonic Minor",
            ScaleName::MelodicMinor => "Melodic Minor",
            ScaleName::WholeTone => "Whole Tone",
            ScaleName::Diminished => "Diminished",
            ScaleName::MajorPentatonic => "Major Pentatonic",
            ScaleName::MinorPentatonic => "Minor Pentatonic",
            ScaleName::Dorian => "Dorian",
            ScaleName::JapInSen => "Jap In Sen",
            ScaleName::MajorBebop => "Major Bebop",
            ScaleName::DominantBebop => "Dominant Bebop",
            ScaleName::Blues => "Blues",
            ScaleName::Arabic => "Arabic",
            ScaleName::Enigmatic => "Enigmatic",
            ScaleName::Neapolitan => "Neapolitan",
            ScaleName::NeapolitanMinor => "Neapolitan Minor",
            ScaleName::HungarianMinor => "Hungarian Minor",
            ScaleName::Phrygian => "Phrygian",
            ScaleName::Lydian => "Lydian",
            ScaleName::Mixolydian => "Mixolydian",
            ScaleName::Locrian => "Locrian",
        }
    }

    /// Look a scale up by its exact English name ("Natural Minor")
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        SCALE_DEFS
            .iter()
            .map(|def| def.name)
            .find(|scale| scale.name() == name)
            .ok_or_else(|| TheoryError::UnknownScale(name.to_string()))
    }

    /// Catalog entry for this scale
    pub fn def(self) -> &'static ScaleDefinition {
        // catalog order follows the enum
        &SCALE_DEFS[self as usize]
    }
}

impl fmt::Display for ScaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scale shape: name, spacing and membership
#[derive(Debug)]
pub struct ScaleDefinition {
    pub name: ScaleName,
    /// Half-steps between adjacent notes, closing step to the octave included
    pub half_steps: &'static [u8],
    /// Membership of each pitch class, relative to the root
    pub in_scale: [bool; 12],
    /// Commonly used scale
    pub popular: bool,
    /// Greek mode
    pub greek: bool,
    notes_cache: OnceLock<Vec<u8>>,
}

impl PartialEq for ScaleDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.half_steps == other.half_steps
            && self.in_scale == other.in_scale
            && self.popular == other.popular
            && self.greek == other.greek
    }
}

impl Eq for ScaleDefinition {}

impl ScaleDefinition {
    const fn new(name: ScaleName, half_steps: &'static [u8], popular: bool, greek: bool) -> Self {
        Self {
            name,
            half_steps,
            in_scale: membership(half_steps),
            popular,
            greek,
            notes_cache: OnceLock::new(),
        }
    }

    /// Pitch classes (0-11, relative to the root) in the scale, ascending
    pub fn notes_in_scale(&self) -> &[u8] {
        self.notes_cache.get_or_init(|| {
            (0..12u8)
                .filter(|&pc| self.in_scale[pc as usize])
                .collect()
        })
    }

    /// Number of notes in the scale
    pub fn len(&self) -> usize {
        self.notes_in_scale().len()
    }

    /// Whether the scale has no notes (never the case for catalog entries)
    pub fn is_empty(&self) -> bool {
        self.notes_in_scale().is_empty()
    }
}

const fn membership(half_steps: &[u8]) -> [bool; 12] {
    let mut in_scale = [false; 12];
    in_scale[0] = true;
    let mut pc = 0usize;
    let mut i = 0;
    while i < half_steps.len() {
        pc = (pc + half_steps[i] as usize) % 12;
        in_scale[pc] = true;
        i += 1;
    }
    in_scale
}

/// Every scale the library knows, in [`ScaleName`] order
pub static SCALE_DEFS: [ScaleDefinition; 22] = [
    ScaleDefinition::new(ScaleName::Major, &[2, 2, 1, 2, 2, 2, 1], true, false),
    ScaleDefinition::new(ScaleName::NaturalMinor, &[2, 1, 2, 2, 1, 2, 2], true, false),
    ScaleDefinition::new(ScaleName::HarmonicMinor, &[2, 1, 2, 2, 1, 3, 1], false, false),
    ScaleDefinition::new(ScaleName::MelodicMinor, &[2, 1, 2, 2, 2, 2, 1], false, false),
    ScaleDefinition::new(ScaleName::WholeTone, &[2, 2, 2, 2, 2, 2], false, false),
    ScaleDefinition::new(ScaleName::Diminished, &[2, 1, 2, 1, 2, 1, 2, 1], false, false),
    ScaleDefinition::new(ScaleName::MajorPentatonic, &[2, 2, 3, 2, 3], false, false),
    ScaleDefinition::new(ScaleName::MinorPentatonic, &[3, 2, 2, 3, 2], true, false),
    ScaleDefinition::new(ScaleName::Dorian, &[2, 1, 2, 2, 2, 1, 2], false, true),
    ScaleDefinition::new(ScaleName::JapInSen, &[1, 4, 2, 3, 2], false, false),
    ScaleDefinition::new(ScaleName::MajorBebop, &[2, 2, 1, 2, 1, 1, 2, 1], false, false),
    ScaleDefinition::new(ScaleName::DominantBebop, &[2, 2, 1, 2, 2, 1, 1, 1], false, false),
    ScaleDefinition::new(ScaleName::Blues, &[3, 2, 1, 1, 3, 2], true, false),
    ScaleDefinition::new(ScaleName::Arabic, &[1, 3, 1, 2, 1, 3, 1], false, false),
    ScaleDefinition::new(ScaleName::Enigmatic, &[1, 3, 2, 2, 2, 1, 1], false, false),
    ScaleDefinition::new(ScaleName::Neapolitan, &[1, 2, 2, 2, 2, 2, 1], false, false),
    ScaleDefinition::new(ScaleName::NeapolitanMinor, &[1, 2, 2, 2, 1, 3, 1], false, false),
    ScaleDefinition::new(ScaleName::HungarianMinor, &[2, 1, 3, 1, 1, 3, 1], false, false),
    ScaleDefinition::new(ScaleName::Phrygian, &[1, 2, 2, 2, 1, 2, 2], false, true),
    ScaleDefinition::new(ScaleName::Lydian, &[2, 2, 2, 1, 2, 2, 1], false, false),
    ScaleDefinition::new(ScaleName::Mixolydian, &[2, 2, 1, 2, 2, 1, 2], false, false),
    ScaleDefinition::new(ScaleName::Locrian, &[1, 2, 2, 1, 2, 2, 2], false, true),
];

/// Filter helpers over a list of scale definitions
pub trait ScaleDefinitions {
    /// Only the commonly used scales
    fn popular(&self) -> Vec<&ScaleDefinition>;
    /// Only the Greek modes
    fn greek(&self) -> Vec<&ScaleDefinition>;
}

impl ScaleDefinitions for [ScaleDefinition] {
    fn popular(&self) -> Vec<&ScaleDefinition> {
        self.iter().filter(|def| def.popular).collect()
    }

    fn greek(&self) -> Vec<&ScaleDefinition> {
        self.iter().filter(|def| def.greek).collect()
    }
}

/// Notes of a scale built on `tonic`, as pitch classes and note names.
///
/// One note per step; the closing step back to the tonic is not repeated.
pub fn scale_notes(tonic: Note, scale: ScaleName) -> (Vec<u8>, Vec<Note>) {
    let steps = scale.def().half_steps;
    let mut pc = tonic.pitch_class();
    let mut keys = Vec::with_capacity(steps.len());
    keys.push(pc);
    for &step in &steps[..steps.len().saturating_sub(1)] {
        pc = (pc + step) % 12;
        keys.push(pc);
    }
    let notes = keys.iter().map(|&pc| Note::from_pitch_class(pc)).collect();
    (keys, notes)
}

/// Chord abbreviations built on each degree of a scale: `[triad, seventh, ninth]`.
///
/// `None` for scales without a harmonized chord table.
pub fn scale_chords(scale: ScaleName) -> Option<&'static [[&'static str; 3]]> {
    let table: &'static [[&'static str; 3]] = match scale {
        ScaleName::Major => &[
            ["maj", "maj7", "maj9"],
            ["min", "min7", "min9"],
            ["min", "min7", "min7b9"],
            ["maj", "maj7", "maj9"],
            ["maj", "7", "9"],
            ["min", "min7", "min9"],
            ["dim", "m7b5", "m7b5b9"],
        ],
        ScaleName::NaturalMinor => &[
            ["min", "min7", "min9"],
            ["dim", "m7b5", "m7b5b9"],
            ["maj", "maj7", "maj9"],
            ["min", "min7", "min9"],
            ["min", "min7", "min7b9"],
            ["maj", "maj7", "maj9"],
            ["maj", "7", "9"],
        ],
        ScaleName::HarmonicMinor => &[
            ["min", "minmaj7", "minmaj9"],
            ["dim", "m7b5", "m7b5b9"],
            ["aug", "maj7#5", "maj9#5"],
            ["min", "min7", "min9"],
            ["maj", "7", "7b9"],
            ["maj", "maj7", "maj7#9"],
            ["dim", "dim7", "dim7b9"],
        ],
        ScaleName::MelodicMinor => &[
            ["min", "minmaj7", "minmaj9"],
            ["min", "min7", "min7b9"],
            ["aug", "maj7#5", "maj9#5"],
            ["maj", "7", "9"],
            ["maj", "7", "9"],
            ["dim", "m7b5", "m9b5"],
            ["dim", "m7b5", "m7b5b9"],
        ],
        _ => return None,
    };
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chord_def::ChordDefinition;

    #[test]
    fn test_catalog_order_follows_names() {
        for (i, def) in SCALE_DEFS.iter().enumerate() {
            assert_eq!(def.name as usize, i);
            assert_eq!(def.name.def().name, def.name);
        }
    }

    #[test]
    fn test_steps_reach_the_octave() {
        for def in SCALE_DEFS.iter() {
            let total: u32 = def.half_steps.iter().map(|&s| s as u32).sum();
            assert_eq!(total, 12, "{}", def.name);
            assert!(def.half_steps.iter().all(|&s| s > 0), "{}", def.name);
            assert_eq!(def.len(), def.half_steps.len(), "{}", def.name);
        }
    }

    #[test]
    fn test_major_membership() {
        assert_eq!(
            ScaleName::Major.def().in_scale,
            [true, false, true, false, true, true, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_notes_in_scale() {
        assert_eq!(ScaleName::Major.def().notes_in_scale(), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(ScaleName::NaturalMinor.def().notes_in_scale(), &[0, 2, 3, 5, 7, 8, 10]);
        // cached value is stable
        let first = ScaleName::Blues.def().notes_in_scale().to_vec();
        assert_eq!(ScaleName::Blues.def().notes_in_scale(), first.as_slice());
    }

    #[test]
    fn test_scale_notes() {
        let cases = [
            (Note::C, ScaleName::Major, vec![0, 2, 4, 5, 7, 9, 11], "C D E F G A B"),
            (Note::C, ScaleName::MelodicMinor, vec![0, 2, 3, 5, 7, 9, 11], "C D D# F G A B"),
            (Note::B, ScaleName::Major, vec![11, 1, 3, 4, 6, 8, 10], "B C# D# E F# G# A#"),
            (Note::B, ScaleName::NaturalMinor, vec![11, 1, 2, 4, 6, 7, 9], "B C# D E F# G A"),
        ];
        for (tonic, scale, want_keys, want_names) in cases {
            let (keys, notes) = scale_notes(tonic, scale);
            assert_eq!(keys, want_keys, "{} {}", tonic, scale);
            let names: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
            assert_eq!(names.join(" "), want_names);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ScaleName::from_name("Natural Minor"), Ok(ScaleName::NaturalMinor));
        assert_eq!(ScaleName::from_name("Jap In Sen"), Ok(ScaleName::JapInSen));
        assert_eq!(
            ScaleName::from_name("natural minor"),
            Err(TheoryError::UnknownScale("natural minor".to_string()))
        );
    }

    #[test]
    fn test_popular_definitions() {
        let names: Vec<ScaleName> = SCALE_DEFS.popular().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                ScaleName::Major,
                ScaleName::NaturalMinor,
                ScaleName::MinorPentatonic,
                ScaleName::Blues
            ]
        );
    }

    #[test]
    fn test_greek_definitions() {
        let names: Vec<ScaleName> = SCALE_DEFS.greek().iter().map(|d| d.name).collect();
        assert_eq!(names, vec![ScaleName::Dorian, ScaleName::Phrygian, ScaleName::Locrian]);
    }

    #[test]
    fn test_scale_chords_resolve() {
        for def in SCALE_DEFS.iter() {
            let Some(table) = scale_chords(def.name) else {
                continue;
            };
            assert_eq!(table.len(), def.len(), "{}", def.name);
            for degree in table {
                for abbrev in degree {
                    assert!(ChordDefinition::by_abbrev(abbrev).is_some(), "{}", abbrev);
                }
            }
        }
        assert!(scale_chords(ScaleName::Blues).is_none());
    }
}
