use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{FretChartError, Result};
use crate::guitar::fretboard::FretboardTable;
use crate::guitar::music_note::PitchClass;
use crate::hand::fret_window::window_for;

/// One `(string, fret)` position. Fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotePosition {
    pub string_index: usize,
    pub fret: usize,
}

impl NotePosition {
    pub fn new(string_index: usize, fret: usize) -> Self {
        NotePosition { string_index, fret }
    }

    pub fn is_open(&self) -> bool {
        self.fret == 0
    }
}

/// Required pitch classes of a chord or arpeggio, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSpec {
    pitch_classes: Vec<PitchClass>,
}

impl ChordSpec {
    pub fn new(pitch_classes: Vec<PitchClass>) -> Result<Self> {
        if pitch_classes.is_empty() {
            return Err(FretChartError::EmptySpec);
        }
        Ok(ChordSpec { pitch_classes })
    }

    pub fn root(&self) -> PitchClass {
        self.pitch_classes[0]
    }

    pub fn len(&self) -> usize {
        self.pitch_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitch_classes.is_empty()
    }

    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.pitch_classes.contains(&pitch_class)
    }

    /// Moves the note at `inversion` to the front and keeps the rest in order.
    ///
    /// Returns a new spec; `self` is left untouched.
    pub fn inverted(&self, inversion: usize) -> Result<ChordSpec> {
        if inversion >= self.len() {
            return Err(FretChartError::InvalidInversion {
                inversion,
                len: self.len(),
            });
        }
        let mut pitch_classes = self.pitch_classes.clone();
        let moved = pitch_classes.remove(inversion);
        pitch_classes.insert(0, moved);
        Ok(ChordSpec { pitch_classes })
    }
}

/// A set of positions, at most one per string, kept sorted by string.
///
/// Two voicings are equal when they hold the same positions, however they
/// were found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Voicing {
    positions: Vec<NotePosition>,
}

impl Voicing {
    pub fn new(mut positions: Vec<NotePosition>) -> Self {
        positions.sort();
        positions.dedup();
        Voicing { positions }
    }

    pub fn positions(&self) -> &[NotePosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get_string_indices(&self) -> Vec<usize> {
        self.positions.iter().map(|pos| pos.string_index).collect()
    }

    pub fn has_duplicate_strings(&self) -> bool {
        let unique_count = self
            .positions
            .iter()
            .map(|pos| pos.string_index)
            .collect::<HashSet<_>>()
            .len();
        unique_count != self.positions.len()
    }

    pub fn has_open_string(&self) -> bool {
        self.positions.iter().any(NotePosition::is_open)
    }

    /// Number of positions that need a finger.
    pub fn fretted_count(&self) -> usize {
        self.positions.iter().filter(|pos| !pos.is_open()).count()
    }

    pub fn min_fret(&self) -> Option<usize> {
        self.positions.iter().map(|pos| pos.fret).min()
    }

    /// True when the strings form one unbroken run.
    pub fn is_contiguous(&self) -> bool {
        self.positions
            .windows(2)
            .all(|pair| pair[1].string_index == pair[0].string_index + 1)
    }

    /// Every fretted position lies inside the hand window of the others.
    pub fn is_within_span(&self, total_frets: usize, span: usize) -> bool {
        let fretted: Vec<usize> = self
            .positions
            .iter()
            .filter(|pos| !pos.is_open())
            .map(|pos| pos.fret)
            .collect();
        let window = window_for(&fretted, total_frets, span);
        fretted.iter().all(|fret| window.contains(fret))
    }

    /// Pitch classes sounded, in string order.
    pub fn pitch_classes(&self, table: &FretboardTable) -> Vec<PitchClass> {
        self.positions
            .iter()
            .map(|pos| table.pitch_at(pos.string_index, pos.fret))
            .collect()
    }

    /// Two neighbouring sounded strings repeat the same pitch class.
    pub fn has_adjacent_unison(&self, table: &FretboardTable) -> bool {
        self.pitch_classes(table)
            .windows(2)
            .any(|pair| pair[0] == pair[1])
    }

    pub fn sounds_all(&self, table: &FretboardTable, chord: &ChordSpec) -> bool {
        let sounded: HashSet<PitchClass> = self.pitch_classes(table).into_iter().collect();
        chord.pitch_classes().iter().all(|pc| sounded.contains(pc))
    }
}
