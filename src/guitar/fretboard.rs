// src/guitar/fretboard.rs

use ndarray::{Array2, ArrayView1};
use std::ops::Range;

use crate::error::{FretChartError, Result};
use crate::guitar::guitar_string::{GuitarString, create_guitar_strings};
use crate::guitar::intervals::interval_name;
use crate::guitar::music_note::PitchClass;

pub const MIN_STRINGS: usize = 3;
pub const MAX_STRINGS: usize = 12;
pub const MIN_FRETS: usize = 3;
pub const MAX_FRETS: usize = 36;

/// Pitch class of every `(string, fret)` position of one instrument.
///
/// Rows are strings in tuning order, columns are frets `0..=fret_count`
/// with the open string at column 0, so a row holds `fret_count + 1` entries.
#[derive(Debug, Clone)]
pub struct FretboardTable {
    guitar_strings: Vec<GuitarString>,
    fret_count: usize,
    pitches: Array2<u8>,
}

impl FretboardTable {
    /// Builds the table from note names, e.g. `["E", "A", "D", "G", "B", "E"]`.
    pub fn build(tuning: &[&str], fret_count: usize) -> Result<Self> {
        let guitar_strings = create_guitar_strings(tuning)?;
        Self::from_guitar_strings(guitar_strings, fret_count)
    }

    pub fn from_pitch_classes(tuning: &[PitchClass], fret_count: usize) -> Result<Self> {
        let guitar_strings = tuning
            .iter()
            .enumerate()
            .map(|(index, &note)| GuitarString::new(note, index))
            .collect();
        Self::from_guitar_strings(guitar_strings, fret_count)
    }

    fn from_guitar_strings(guitar_strings: Vec<GuitarString>, fret_count: usize) -> Result<Self> {
        let string_count = guitar_strings.len();
        if !(MIN_STRINGS..=MAX_STRINGS).contains(&string_count) {
            return Err(FretChartError::InvalidGeometry(format!(
                "instrument must have between {} and {} strings, got {}",
                MIN_STRINGS, MAX_STRINGS, string_count
            )));
        }
        if !(MIN_FRETS..=MAX_FRETS).contains(&fret_count) {
            return Err(FretChartError::InvalidGeometry(format!(
                "instrument must have between {} and {} frets, got {}",
                MIN_FRETS, MAX_FRETS, fret_count
            )));
        }

        let pitches = Array2::from_shape_fn((string_count, fret_count + 1), |(s, f)| {
            guitar_strings[s].note_at(f).value()
        });

        Ok(FretboardTable {
            guitar_strings,
            fret_count,
            pitches,
        })
    }

    pub fn string_count(&self) -> usize {
        self.guitar_strings.len()
    }

    /// Highest fret on the board.
    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    /// Number of columns per string, open string included.
    pub fn fret_total(&self) -> usize {
        self.fret_count + 1
    }

    pub fn guitar_strings(&self) -> &[GuitarString] {
        &self.guitar_strings
    }

    pub fn tuning(&self) -> Vec<PitchClass> {
        self.guitar_strings
            .iter()
            .map(GuitarString::get_base_note)
            .collect()
    }

    pub fn pitch_at(&self, string_index: usize, fret: usize) -> PitchClass {
        PitchClass::new(self.pitches[[string_index, fret]] as i32)
    }

    pub fn row(&self, string_index: usize) -> ArrayView1<'_, u8> {
        self.pitches.row(string_index)
    }

    /// Lowest fret in `frets` (clamped to the board) where the string sounds `note`.
    pub fn find_fret(
        &self,
        string_index: usize,
        note: PitchClass,
        frets: Range<usize>,
    ) -> Option<usize> {
        let end = frets.end.min(self.fret_total());
        self.guitar_strings[string_index].get_fret_by_note(note, frets.start..end)
    }

    /// Note names for each position, string-major.
    pub fn note_names(&self) -> Vec<Vec<&'static str>> {
        self.pitches
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&pc| PitchClass::new(pc as i32).name()).collect())
            .collect()
    }

    /// Interval names relative to `root` for each position, string-major.
    pub fn intervals_relative_to(&self, root: PitchClass) -> Vec<Vec<&'static str>> {
        self.pitches
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&pc| interval_name(root.interval_to(PitchClass::new(pc as i32))))
                    .collect()
            })
            .collect()
    }
}
