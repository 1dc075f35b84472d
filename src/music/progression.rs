// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progressions and their roman-numeral description.
//!
//! Major chord: I, II, III... Minor chord: i, ii, iii...
//! Augmented: I+. Diminished: vii°. Altered degrees carry a b or # prefix.

use super::chords::Chords;
use super::note::{KeyNumber, Note};
use super::scale::eligible_scales_for_notes;
use super::scale_def::{scale_notes, ScaleName};

/// Common progressions in major keys, as zero-based scale degrees
pub const MAJOR_PROGRESSIONS: &[&[usize]] = &[
    &[0, 3],
    &[3, 0],
    &[5, 3, 0, 4],
    &[0, 0, 3, 5],
    &[5, 4, 3, 2],
    &[2, 4],
    &[0, 5, 3, 4], // 50s progression
    &[0, 4, 5, 3],
    &[2, 4, 5, 3],
    &[4, 2, 5, 0],
    &[2, 0, 4, 5],
    &[0, 2, 3, 5],
    &[0, 3, 4, 3],
    &[0, 3, 2, 5],
    &[0, 5, 3, 2],
    &[0, 3, 0, 4],
    &[5, 4, 0, 3],
    &[4, 3, 4, 0],
    &[3, 4, 2, 0],
    &[3, 4, 2, 3],
];

/// Common progressions in minor keys, as zero-based scale degrees
pub const MINOR_PROGRESSIONS: &[&[usize]] = &[
    &[0, 3],
    &[3, 0],
    &[5, 3, 0, 4],
    &[0, 0, 3, 5],
    &[5, 4, 3, 2],
    &[2, 4],
    &[0, 5, 3, 4],
    &[0, 4, 5, 3],
    &[4, 2, 5, 0],
    &[2, 0, 4, 5],
    &[0, 2, 3, 5],
    &[0, 3, 4, 3],
    &[0, 3, 2, 5],
    &[0, 5, 3, 2],
    &[0, 3, 0, 4],
    &[3, 4, 0, 0],
    &[5, 4, 0, 2],
    &[0, 5, 2, 2],
    &[3, 0, 3, 4],
    &[4, 3, 4, 0],
    &[4, 3, 5, 4],
    &[0, 4, 3, 4],
];

/// Roman numeral for each degree of a scale, if the scale has a table
pub fn roman_numerals(scale: ScaleName) -> Option<&'static [&'static str]> {
    let numerals: &'static [&'static str] = match scale {
        ScaleName::Major => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
        ScaleName::Dorian => &["i", "ii", "bIII", "IV", "v", "vi°", "bVII"],
        ScaleName::Phrygian => &["i", "bII", "bIII", "iv", "v°", "bVI", "bvii"],
        ScaleName::Lydian => &["I", "II", "iii", "#iv°", "V", "vi", "vii"],
        ScaleName::Mixolydian => &["I", "ii", "iii°", "IV", "v", "vi", "bVII"],
        ScaleName::MinorPentatonic => &["i", "III", "iv", "v", "VII"],
        ScaleName::HarmonicMinor => &["i", "ii°", "III+", "iv", "V", "VI", "bvii°"],
        ScaleName::MelodicMinor => &["i", "ii", "III+", "IV", "V", "bvi°", "bvii°"],
        ScaleName::NaturalMinor => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
        ScaleName::MajorPentatonic => &["i", "ii", "iii", "V", "vi"],
        ScaleName::Locrian => &["i°", "bII", "biii", "iv", "bV", "bVI", "bvii"],
        ScaleName::Blues => &["i°", "bIII", "IV", "bV", "V", "bVII", "I"],
        _ => return None,
    };
    Some(numerals)
}

/// Label for a degree: its roman numeral when known, else the index
fn degree_label(numerals: Option<&[&str]>, degree: Option<usize>) -> String {
    match (numerals, degree) {
        (Some(numerals), Some(idx)) if idx < numerals.len() => numerals[idx].to_string(),
        (_, Some(idx)) => idx.to_string(),
        (_, None) => "?".to_string(),
    }
}

impl Chords {
    /// Describe the progression in every popular scale that fits its roots.
    ///
    /// First line: the root of each chord. Then one line per scale with the
    /// degree of each root, followed by `" in <scale>"`. Chords with no keys
    /// or no identified root are left out.
    pub fn progression_desc(&self) -> String {
        let roots: Vec<Note> = self
            .iter()
            .filter(|chord| !chord.keys.is_empty())
            .filter_map(|chord| chord.definition().root)
            .collect();

        let mut out: String = roots.iter().map(|root| format!("{} ", root)).collect();
        out.push('\n');

        let notes: Vec<KeyNumber> = roots.iter().map(|n| n.pitch_class() as KeyNumber).collect();
        for scale in eligible_scales_for_notes(&notes).popular() {
            let (scale_keys, _) = scale_notes(scale.tonic(), scale.def.name);
            let numerals = roman_numerals(scale.def.name);
            for root in &roots {
                let degree = scale_keys.iter().position(|&pc| pc == root.pitch_class());
                out.push_str(&degree_label(numerals, degree));
                out.push(' ');
            }
            out.push_str(&format!(" in {}\n", scale));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chord::Chord;
    use crate::music::note::key_number;
    use crate::music::scale::Scale;
    use crate::music::scale_def::SCALE_DEFS;

    fn k(name: &str, octave: i32) -> KeyNumber {
        key_number(Note::from_str(name).unwrap(), octave)
    }

    #[test]
    fn test_progression_desc() {
        let chords = Chords::new(vec![
            Chord::new(vec![k("B", 0), k("D", 1), k("F#", 1)]),
            Chord::new(vec![k("D", 0), k("F#", 0), k("A", 0)]),
            Chord::new(vec![k("F#", 0), k("A", 0), k("C#", 1)]),
            Chord::new(vec![k("E", 0), k("G#", 0), k("B", 0)]),
        ]);
        let want = "B D F# E \n".to_string()
            + "i° bIII V IV  in B Blues\n"
            + "i III v iv  in B Minor Pentatonic\n"
            + "i III v iv  in B Natural Minor\n"
            + "vi I iii ii  in D Major\n"
            + "v VII ii° i  in E Natural Minor\n"
            + "iv VI i VII  in F# Natural Minor\n";
        assert_eq!(chords.progression_desc(), want);
    }

    #[test]
    fn test_progression_desc_empty() {
        assert_eq!(Chords::default().progression_desc(), "\n");
        let unknown = Chords::new(vec![Chord::new(vec![k("C#", 3), k("D", 3)]), Chord::default()]);
        assert_eq!(unknown.progression_desc(), "\n");
    }

    #[test]
    fn test_roman_numerals_cover_scale_degrees() {
        for def in SCALE_DEFS.iter() {
            if let Some(numerals) = roman_numerals(def.name) {
                assert!(numerals.len() >= def.len(), "{}", def.name);
            }
        }
        assert!(roman_numerals(ScaleName::Arabic).is_none());
    }

    #[test]
    fn test_degree_label_fallback() {
        assert_eq!(degree_label(roman_numerals(ScaleName::Major), Some(4)), "V");
        assert_eq!(degree_label(None, Some(4)), "4");
        assert_eq!(degree_label(roman_numerals(ScaleName::MinorPentatonic), Some(6)), "6");
        assert_eq!(degree_label(None, None), "?");
    }

    #[test]
    fn test_progressions_realize_in_scale() {
        let c_major = Scale::new(k("C", 3), ScaleName::Major);
        let fifties = c_major.progression_chords(MAJOR_PROGRESSIONS[6]);
        assert_eq!(fifties.to_string(), "Cmaj,Amin,Fmaj,Gmaj");

        let a_minor = Scale::new(k("A", 2), ScaleName::NaturalMinor);
        for degrees in MINOR_PROGRESSIONS {
            let chords = a_minor.progression_chords(degrees);
            assert_eq!(chords.len(), degrees.len());
            for chord in &chords {
                assert!(!chord.definition().is_unknown());
            }
        }
    }
}
