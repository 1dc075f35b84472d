// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and absolute note numbers.
//!
//! An absolute note is `pitch_class + 12 * octave`, so `0` is C0, `11` is B0
//! and `50` is D4. Helpers here never fail: out-of-range values are folded
//! back into the 12-tone range.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute note number (pitch class plus 12 per octave)
pub type KeyNumber = i32;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Note of an absolute key, octave discarded
    pub fn of_key(key: KeyNumber) -> Self {
        Note::from_pitch_class(pitch_class_of(key))
    }

    /// Parse note from string (e.g., "C", "c#", "Db", "Fs")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" | "B#" | "BS" => Some(Note::C),
            "C#" | "CS" | "DB" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "DS" | "EB" => Some(Note::Ds),
            "E" | "FB" => Some(Note::E),
            "F" | "E#" | "ES" => Some(Note::F),
            "F#" | "FS" | "GB" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "GS" | "AB" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "AS" | "BB" => Some(Note::As),
            "B" | "CB" => Some(Note::B),
            _ => None,
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: i32) -> Self {
        Note::from_pitch_class((self.pitch_class() as i32 + semitones).rem_euclid(12) as u8)
    }

    /// Absolute key of this note in the given octave
    pub fn key(self, octave: i32) -> KeyNumber {
        key_number(self, octave)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        };
        f.write_str(name)
    }
}

/// Pitch class (0-11) of an absolute key, negative keys included
pub fn pitch_class_of(key: KeyNumber) -> u8 {
    key.rem_euclid(12) as u8
}

/// Octave of an absolute key
pub fn octave_of(key: KeyNumber) -> i32 {
    key.div_euclid(12)
}

/// Absolute key for a note in an octave
pub fn key_number(note: Note, octave: i32) -> KeyNumber {
    note.pitch_class() as KeyNumber + 12 * octave
}

/// Render an absolute key as note name plus octave ("D4")
pub fn note_name(key: KeyNumber) -> String {
    format!("{}{}", Note::of_key(key), octave_of(key))
}

/// Name of a zero-based scale degree
pub fn scale_degree_name(pos: i32) -> &'static str {
    match pos {
        0 => "Tonic",
        1 => "Supertonic",
        2 => "Mediant",
        3 => "Subdominant",
        4 => "Dominant",
        5 => "Submediant",
        6 => "Leading tone/Subtonic",
        7 => "Tonic (octave)",
        _ => "Out of scale",
    }
}

/// English ordinal for a zero-based position ("1st", "2nd", "12th", ...)
pub fn ordinal_position_name(pos: i32) -> String {
    if pos < 0 {
        return "invalid position".to_string();
    }
    let n = pos as i64 + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
