// src/hand/barre.rs

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::guitar::guitar_chord::{NotePosition, Voicing};

/// 按弦状态，不在指法里的弦没有状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressState {
    Pressed,
    Barre,
}

/// A barre held by one finger, given by its lowest and highest string at the
/// barre fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Barre {
    pub low: NotePosition,
    pub high: NotePosition,
}

impl Barre {
    pub fn fret(&self) -> usize {
        self.low.fret
    }

    pub fn strings(&self) -> RangeInclusive<usize> {
        self.low.string_index..=self.high.string_index
    }
}

/// A barre chord split into individually fretted notes and the barre.
///
/// Strings inside the barre bounds that are not in `fretted` are held by the
/// barre finger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BarreVoicing {
    pub fretted: Vec<NotePosition>,
    pub barre: Barre,
}

impl BarreVoicing {
    /// Splits a voicing at its lowest fret.
    ///
    /// Returns `None` when fewer than two strings share the lowest fret.
    pub fn decompose(voicing: &Voicing) -> Option<BarreVoicing> {
        let barre_fret = voicing.min_fret()?;

        let (barred, fretted): (Vec<NotePosition>, Vec<NotePosition>) = voicing
            .positions()
            .iter()
            .copied()
            .partition(|pos| pos.fret == barre_fret);

        if barred.len() < 2 {
            return None;
        }

        // positions 已按弦索引排序
        let low = *barred.first()?;
        let high = *barred.last()?;

        Some(BarreVoicing {
            fretted,
            barre: Barre { low, high },
        })
    }

    pub fn barre_fret(&self) -> usize {
        self.barre.fret()
    }

    pub fn press_state(&self, string_index: usize) -> Option<PressState> {
        if self.fretted.iter().any(|pos| pos.string_index == string_index) {
            Some(PressState::Pressed)
        } else if self.barre.strings().contains(&string_index) {
            Some(PressState::Barre)
        } else {
            None
        }
    }

    /// Every sounded position, barred strings included, sorted by string.
    pub fn positions(&self) -> Vec<NotePosition> {
        let mut positions: Vec<NotePosition> = self
            .barre
            .strings()
            .filter(|&s| self.press_state(s) == Some(PressState::Barre))
            .map(|s| NotePosition::new(s, self.barre_fret()))
            .collect();
        positions.extend(self.fretted.iter().copied());
        positions.sort();
        positions
    }
}

/// Barre shape test for a voicing.
///
/// No open strings, one contiguous run of strings, at least two strings on
/// the lowest fret and at most `max_extra_notes` strings above it.
pub fn is_barre_shape(voicing: &Voicing, max_extra_notes: usize) -> bool {
    if voicing.has_open_string() || !voicing.is_contiguous() {
        return false;
    }
    let Some(min_fret) = voicing.min_fret() else {
        return false;
    };
    let barre_notes = voicing
        .positions()
        .iter()
        .filter(|pos| pos.fret == min_fret)
        .count();
    barre_notes > 1 && voicing.len() - barre_notes <= max_extra_notes
}
