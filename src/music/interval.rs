// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Half-step intervals between consecutive pitch classes.

use super::note::{pitch_class_of, KeyNumber};

/// Largest ascending step kept as-is; wider steps are read as descents.
pub const MAX_ASCENDING_STEP: i8 = 8;

/// Interval from pitch class `from` to pitch class `to`.
///
/// The ascending distance is used when it is at most
/// [`MAX_ASCENDING_STEP`]. Otherwise the negated raw difference is returned:
/// a descent of 1-3 half-steps becomes a small positive step, and an ascent
/// of 9-11 half-steps becomes negative, which no chord shape contains.
pub fn interval(from: u8, to: u8) -> i8 {
    let raw = (to % 12) as i8 - (from % 12) as i8;
    let up = raw.rem_euclid(12);
    if up > MAX_ASCENDING_STEP {
        -raw
    } else {
        up
    }
}

/// Intervals between each consecutive pair of pitch classes.
///
/// Fewer than two pitch classes yield an empty sequence.
pub fn key_intervals(pitch_classes: &[u8]) -> Vec<i8> {
    pitch_classes
        .windows(2)
        .map(|pair| interval(pair[0], pair[1]))
        .collect()
}

/// Pitch classes of `keys` in first-seen order, octave duplicates removed.
pub fn unique_pitch_classes(keys: &[KeyNumber]) -> Vec<u8> {
    let mut seen = [false; 12];
    let mut out = Vec::with_capacity(keys.len().min(12));
    for &key in keys {
        let pc = pitch_class_of(key);
        if !seen[pc as usize] {
            seen[pc as usize] = true;
            out.push(pc);
        }
    }
    out
}
