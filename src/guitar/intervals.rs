//! Interval, chord and scale tables.
//!
//! Chord and scale types are stored as interval names and resolved to pitch
//! classes against a root. The tables are meant as lookup data only, they do
//! not try to validate whether a chord name makes musical sense.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::{FretChartError, Result};
use crate::guitar::music_note::{PitchClass, get_keynote_by_value};

lazy_static! {
    pub static ref INTERVALS: HashMap<&'static str, u8> = {
        let mut m = HashMap::new();
        m.insert("1", 0);
        m.insert("b2", 1);
        m.insert("2", 2);
        m.insert("#2", 3);
        m.insert("b3", 3);
        m.insert("3", 4);
        m.insert("4", 5);
        m.insert("#4", 6);
        m.insert("b5", 6);
        m.insert("5", 7);
        m.insert("#5", 8);
        m.insert("b6", 8);
        m.insert("6", 9);
        m.insert("bb7", 9);
        m.insert("b7", 10);
        m.insert("7", 11);
        m.insert("b9", 1);
        m.insert("9", 2);
        m.insert("#9", 3);
        m.insert("11", 5);
        m.insert("#11", 6);
        m.insert("b13", 8);
        m.insert("13", 9);
        m
    };

    /// Sharps that have a flat spelling in the tables above.
    pub static ref SHARP_TO_FLAT: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("#2", "b3");
        m.insert("#4", "b5");
        m.insert("#5", "b6");
        m.insert("#9", "b3");
        m.insert("#11", "b5");
        m
    };

    pub static ref CHORD_TYPES: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("M", vec!["1", "3", "5"]);
        m.insert("m", vec!["1", "b3", "5"]);
        m.insert("dim", vec!["1", "b3", "b5"]);
        m.insert("aug", vec!["1", "3", "#5"]);
        m.insert("sus2", vec!["1", "2", "5"]);
        m.insert("sus4", vec!["1", "4", "5"]);
        m.insert("5", vec!["1", "5"]);
        m.insert("6", vec!["1", "3", "5", "6"]);
        m.insert("m6", vec!["1", "b3", "5", "6"]);
        m.insert("7", vec!["1", "3", "5", "b7"]);
        m.insert("M7", vec!["1", "3", "5", "7"]);
        m.insert("m7", vec!["1", "b3", "5", "b7"]);
        m.insert("mM7", vec!["1", "b3", "5", "7"]);
        m.insert("dim7", vec!["1", "b3", "b5", "bb7"]);
        m.insert("m7b5", vec!["1", "b3", "b5", "b7"]);
        m.insert("7sus4", vec!["1", "4", "5", "b7"]);
        m.insert("add9", vec!["1", "3", "5", "9"]);
        m.insert("madd9", vec!["1", "b3", "5", "9"]);
        m.insert("9", vec!["1", "3", "5", "b7", "9"]);
        m.insert("M9", vec!["1", "3", "5", "7", "9"]);
        m.insert("m9", vec!["1", "b3", "5", "b7", "9"]);
        m.insert("7#9", vec!["1", "3", "5", "b7", "#9"]);
        m.insert("11", vec!["1", "5", "b7", "9", "11"]);
        m.insert("13", vec!["1", "3", "5", "b7", "9", "13"]);
        m
    };

    pub static ref SCALE_TYPES: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("major", vec!["1", "2", "3", "4", "5", "6", "7"]);
        m.insert("natural minor", vec!["1", "2", "b3", "4", "5", "b6", "b7"]);
        m.insert("harmonic minor", vec!["1", "2", "b3", "4", "5", "b6", "7"]);
        m.insert("melodic minor", vec!["1", "2", "b3", "4", "5", "6", "7"]);
        m.insert("dorian", vec!["1", "2", "b3", "4", "5", "6", "b7"]);
        m.insert("phrygian", vec!["1", "b2", "b3", "4", "5", "b6", "b7"]);
        m.insert("lydian", vec!["1", "2", "3", "#4", "5", "6", "7"]);
        m.insert("mixolydian", vec!["1", "2", "3", "4", "5", "6", "b7"]);
        m.insert("locrian", vec!["1", "b2", "b3", "4", "b5", "b6", "b7"]);
        m.insert("major pentatonic", vec!["1", "2", "3", "5", "6"]);
        m.insert("minor pentatonic", vec!["1", "b3", "4", "5", "b7"]);
        m.insert("blues", vec!["1", "b3", "4", "b5", "5", "b7"]);
        m.insert("whole tone", vec!["1", "2", "3", "#4", "#5", "b7"]);
        m.insert(
            "chromatic",
            vec!["1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7"],
        );
        m
    };
}

/// Canonical interval name for each semitone distance above the root.
const CANONICAL_INTERVALS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

const NUMERALS: [(&str, u8); 7] = [
    ("I", 0),
    ("II", 2),
    ("III", 4),
    ("IV", 5),
    ("V", 7),
    ("VI", 9),
    ("VII", 11),
];

/// Semitone distance of an interval name, with sharps normalised to flats.
pub fn interval_semitones(name: &str) -> Result<u8> {
    let name = name.trim();
    let normalised = SHARP_TO_FLAT.get(name).copied().unwrap_or(name);
    INTERVALS
        .get(normalised)
        .copied()
        .ok_or_else(|| FretChartError::UnknownInterval(name.to_string()))
}

/// Inverse of [`interval_semitones`] for distances inside one octave.
pub fn interval_name(semitones: u8) -> &'static str {
    CANONICAL_INTERVALS[(semitones % 12) as usize]
}

fn resolve(root: PitchClass, intervals: &[&str]) -> Result<Vec<PitchClass>> {
    intervals
        .iter()
        .map(|name| Ok(root.add(interval_semitones(name)? as i32)))
        .collect()
}

/// Pitch classes of a chord, root first, in table order.
pub fn chord_pitch_classes(root: &str, chord_type: &str) -> Result<Vec<PitchClass>> {
    let intervals = CHORD_TYPES
        .get(chord_type)
        .ok_or_else(|| FretChartError::UnknownChordType(chord_type.to_string()))?;
    resolve(get_keynote_by_value(root)?, intervals)
}

/// Pitch classes of a scale, root first, in ascending order.
pub fn scale_pitch_classes(root: &str, scale_type: &str) -> Result<Vec<PitchClass>> {
    let intervals = SCALE_TYPES
        .get(scale_type)
        .ok_or_else(|| FretChartError::UnknownScaleType(scale_type.to_string()))?;
    resolve(get_keynote_by_value(root)?, intervals)
}

/// Sorted chord type names, for listing in a front end.
pub fn chord_type_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CHORD_TYPES.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn scale_type_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SCALE_TYPES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Converts Roman numerals into chord roots in a key,
/// e.g. `["I", "IV", "V"]` in D gives D, G, A.
///
/// Numerals are case-insensitive and may carry a `b` or `#` prefix (`bVII`).
pub fn chord_roots_from_progression(numerals: &[&str], key_root: &str) -> Result<Vec<PitchClass>> {
    let root = get_keynote_by_value(key_root)?;

    numerals
        .iter()
        .map(|numeral| {
            let trimmed = numeral.trim();
            let (shift, body) = if let Some(rest) = trimmed.strip_prefix('b') {
                (-1, rest)
            } else if let Some(rest) = trimmed.strip_prefix('#') {
                (1, rest)
            } else {
                (0, trimmed)
            };

            let upper = body.to_uppercase();
            let degree = NUMERALS
                .iter()
                .find(|(name, _)| *name == upper)
                .map(|(_, semitones)| *semitones)
                .ok_or_else(|| FretChartError::UnknownNumeral(numeral.to_string()))?;

            Ok(root.add(degree as i32 + shift))
        })
        .collect()
}
