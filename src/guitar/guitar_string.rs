// GuitarString.rs

use std::ops::Range;

use crate::error::{FretChartError, Result};
use crate::guitar::music_note::{PitchClass, get_keynote_by_value};

/// Represents an instrument string with its open-string pitch class and index.
///
/// Params:
/// - base_note: Pitch class of the open string. 空弦音
/// - string_index: Position in the tuning, string 0 comes first. 弦的索引,与调弦的顺序相同
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuitarString {
    base_note: PitchClass,
    string_index: usize,
}

impl GuitarString {
    pub fn new(base_note: PitchClass, string_index: usize) -> Self {
        GuitarString {
            base_note,
            string_index,
        }
    }

    pub fn get_base_note(&self) -> PitchClass {
        self.base_note
    }

    pub fn get_string_index(&self) -> usize {
        self.string_index
    }

    /// Pitch class sounded at `fret`.
    pub fn note_at(&self, fret: usize) -> PitchClass {
        self.base_note.add((fret % 12) as i32)
    }

    /// Lowest fret inside `frets` that sounds `note`.
    pub fn get_fret_by_note(&self, note: PitchClass, mut frets: Range<usize>) -> Option<usize> {
        frets.find(|&fret| self.note_at(fret) == note)
    }
}

/// Creates the strings of an instrument from a list of note names.
///
/// Any unrecognised name is reported as an invalid tuning token.
pub fn create_guitar_strings(notes: &[&str]) -> Result<Vec<GuitarString>> {
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let base_note = get_keynote_by_value(note).map_err(|e| FretChartError::InvalidTuning {
                token: note.to_string(),
                reason: e.to_string(),
            })?;
            Ok(GuitarString::new(base_note, index))
        })
        .collect()
}

/// Splits a hyphen separated tuning such as `"E-A-D-G-B-E"`.
pub fn split_tuning(tuning: &str) -> Vec<&str> {
    tuning.split('-').map(str::trim).collect()
}

pub fn parse_tuning(tuning: &str) -> Result<Vec<PitchClass>> {
    let notes = split_tuning(tuning);
    Ok(create_guitar_strings(&notes)?
        .iter()
        .map(GuitarString::get_base_note)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_guitar_strings() {
        let strings = create_guitar_strings(&["E", "A", "D", "G", "B", "e"]).unwrap();
        assert_eq!(strings.len(), 6);
        assert_eq!(strings[0].get_base_note().value(), 4);
        assert_eq!(strings[5].get_base_note().value(), 4);
        assert_eq!(strings[3].get_string_index(), 3);
    }

    #[test]
    fn test_invalid_tuning_token() {
        let err = create_guitar_strings(&["E", "A", "H", "G"]).unwrap_err();
        match err {
            FretChartError::InvalidTuning { token, .. } => assert_eq!(token, "H"),
            other => panic!("unexpected error: {other}"),
        }
        // 末尾多一个连字符时会得到空音名
        assert!(parse_tuning("E-A-D-").is_err());
    }

    #[test]
    fn test_get_fret_by_note() {
        let a_string = GuitarString::new(PitchClass::new(9), 1);
        assert_eq!(a_string.get_fret_by_note(PitchClass::new(0), 0..12), Some(3));
        assert_eq!(a_string.get_fret_by_note(PitchClass::new(9), 0..12), Some(0));
        assert_eq!(a_string.get_fret_by_note(PitchClass::new(0), 0..3), None);
        assert_eq!(a_string.note_at(15).name(), "C");
    }

    #[test]
    fn test_parse_tuning() {
        let tuning = parse_tuning("D-A-D-F#-A-D").unwrap();
        let values: Vec<u8> = tuning.iter().map(|pc| pc.value()).collect();
        assert_eq!(values, vec![2, 9, 2, 6, 9, 2]);
    }
}
