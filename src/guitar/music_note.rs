use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FretChartError, Result};

lazy_static! {
    /// Note name to semitones above C. 以C为0来计算
    pub static ref KEYNOTES: HashMap<&'static str, u8> = {
        let mut m = HashMap::new();
        m.insert("C", 0);
        m.insert("B#", 0);
        m.insert("C#", 1);
        m.insert("Db", 1);
        m.insert("D", 2);
        m.insert("D#", 3);
        m.insert("Eb", 3);
        m.insert("E", 4);
        m.insert("Fb", 4);
        m.insert("F", 5);
        m.insert("E#", 5);
        m.insert("F#", 6);
        m.insert("Gb", 6);
        m.insert("G", 7);
        m.insert("G#", 8);
        m.insert("Ab", 8);
        m.insert("A", 9);
        m.insert("A#", 10);
        m.insert("Bb", 10);
        m.insert("B", 11);
        m.insert("Cb", 11);
        m
    };
}

/// Sharp spelling of every pitch class, indexed by semitones above C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve equal-tempered note identities, counted in semitones
/// above C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any semitone count into `[0, 12)`.
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// 给当前音添加一个音程，大三度为4，小三度为3，其它类推
    pub fn add(self, semitones: i32) -> PitchClass {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Semitones from `self` up to `other`, in `[0, 12)`.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretChartError;

    fn from_str(s: &str) -> Result<Self> {
        get_keynote_by_value(s)
    }
}

/// Transforms a note name such as `"C"`, `"f#"`, `"Bb"` or `"Fs"` into a
/// pitch class.
///
/// The letter is case-insensitive because tunings are often written with a
/// lowercase high string (`E-A-D-G-B-e`). A trailing `s` is read as a sharp.
pub fn get_keynote_by_value(value: &str) -> Result<PitchClass> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    let letter = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(FretChartError::UnknownNote(value.to_string())),
    };

    let accidental = match chars.as_str() {
        "" => "",
        "#" | "s" | "♯" => "#",
        "b" | "♭" => "b",
        _ => return Err(FretChartError::UnknownNote(value.to_string())),
    };

    let key = format!("{}{}", letter, accidental);
    KEYNOTES
        .get(key.as_str())
        .map(|&num| PitchClass(num))
        .ok_or_else(|| FretChartError::UnknownNote(value.to_string()))
}

/// Returns the sharp note name of a pitch class.
pub fn get_keynote(pitch_class: PitchClass) -> &'static str {
    pitch_class.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_creation() {
        assert_eq!(PitchClass::new(0).value(), 0);
        assert_eq!(PitchClass::new(14).value(), 2);
        assert_eq!(PitchClass::new(-1).value(), 11);
    }

    #[test]
    fn test_get_keynote_by_value() {
        assert_eq!(get_keynote_by_value("C").unwrap().value(), 0);
        assert_eq!(get_keynote_by_value("e").unwrap().value(), 4);
        assert_eq!(get_keynote_by_value("F#").unwrap().value(), 6);
        assert_eq!(get_keynote_by_value("Gb").unwrap().value(), 6);
        assert_eq!(get_keynote_by_value("Fs").unwrap().value(), 6);
        assert_eq!(get_keynote_by_value(" A ").unwrap().value(), 9);
        assert_eq!(get_keynote_by_value("Cb").unwrap().value(), 11);
    }

    #[test]
    fn test_unknown_note_names() {
        for bad in ["H", "", "C##", "X", "1", "Bbb"] {
            assert!(
                matches!(get_keynote_by_value(bad), Err(FretChartError::UnknownNote(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_add_interval() {
        let c = PitchClass::new(0);
        assert_eq!(c.add(4).name(), "E");
        assert_eq!(PitchClass::new(9).add(4).name(), "C#");
        assert_eq!(c.interval_to(PitchClass::new(7)), 7);
        assert_eq!(PitchClass::new(7).interval_to(c), 5);
    }

    #[test]
    fn test_names_round_trip_through_table() {
        for semitones in 0..12 {
            let pc = PitchClass::new(semitones);
            assert_eq!(get_keynote_by_value(get_keynote(pc)).unwrap(), pc);
        }
    }
}
