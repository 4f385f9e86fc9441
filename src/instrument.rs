// src/instrument.rs

use tracing::debug;

use crate::config::{SearchConfig, preset};
use crate::error::{FretChartError, Result};
use crate::guitar::fretboard::FretboardTable;
use crate::guitar::guitar_chord::{ChordSpec, NotePosition};
use crate::guitar::guitar_string::split_tuning;
use crate::guitar::intervals::{chord_pitch_classes, scale_pitch_classes};
use crate::guitar::music_note::PitchClass;
use crate::search::chord_search::{ChordVoicings, chord_voicings, find_voicings};
use crate::tracer::arpeggio::trace_arpeggio;
use crate::tracer::scale::trace_scale;

/// One tuned instrument with its search settings.
///
/// The fretboard table is built once in the constructor; every query after
/// that only reads it.
#[derive(Debug, Clone)]
pub struct Instrument {
    table: FretboardTable,
    config: SearchConfig,
}

impl Instrument {
    /// `tuning` is hyphen separated from the lowest string, e.g. `"E-A-D-G-B-E"`.
    pub fn new(tuning: &str, fret_count: usize) -> Result<Self> {
        let notes = split_tuning(tuning);
        let table = FretboardTable::build(&notes, fret_count)?;
        debug!(tuning, fret_count, "built fretboard");
        Ok(Instrument {
            table,
            config: SearchConfig::default(),
        })
    }

    pub fn from_preset(name: &str) -> Result<Self> {
        let preset = preset(name)?;
        Self::new(preset.tuning, preset.fret_count)
    }

    pub fn from_table(table: FretboardTable) -> Self {
        Instrument {
            table,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &FretboardTable {
        &self.table
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Voicings of a named chord, e.g. `chord("C", "M7", 0, None)`.
    ///
    /// `inversion` picks which chord tone becomes the bass. With
    /// `starting_string` set only that string carries the bass note.
    pub fn chord(
        &self,
        root: &str,
        chord_type: &str,
        inversion: usize,
        starting_string: Option<usize>,
    ) -> Result<ChordVoicings> {
        let chord = ChordSpec::new(chord_pitch_classes(root, chord_type)?)?.inverted(inversion)?;
        debug!(root, chord_type, inversion, ?starting_string, "chord query");
        self.chord_from_spec(&chord, starting_string)
    }

    pub fn chord_from_pitch_classes(
        &self,
        pitch_classes: &[PitchClass],
        inversion: usize,
        starting_string: Option<usize>,
    ) -> Result<ChordVoicings> {
        let chord = ChordSpec::new(pitch_classes.to_vec())?.inverted(inversion)?;
        self.chord_from_spec(&chord, starting_string)
    }

    fn chord_from_spec(
        &self,
        chord: &ChordSpec,
        starting_string: Option<usize>,
    ) -> Result<ChordVoicings> {
        let Some(string_index) = starting_string else {
            return chord_voicings(&self.table, chord, &self.config);
        };

        match find_voicings(&self.table, chord, string_index, &self.config) {
            Err(FretChartError::RootNotOnString { root, string_index }) => {
                debug!(%root, string_index, "root missing on requested string");
                Ok(ChordVoicings::default())
            }
            result => result,
        }
    }

    pub fn scale(&self, root: &str, scale_type: &str) -> Result<Vec<NotePosition>> {
        let scale = scale_pitch_classes(root, scale_type)?;
        let positions = trace_scale(&self.table, &scale);
        debug!(root, scale_type, positions = positions.len(), "scale query");
        Ok(positions)
    }

    pub fn scale_from_pitch_classes(&self, pitch_classes: &[PitchClass]) -> Vec<NotePosition> {
        trace_scale(&self.table, pitch_classes)
    }

    /// Arpeggio of a named chord type.
    pub fn arpeggio(&self, root: &str, chord_type: &str) -> Result<Vec<NotePosition>> {
        let arpeggio = chord_pitch_classes(root, chord_type)?;
        let positions = trace_arpeggio(&self.table, &arpeggio, self.config.arpeggio_span);
        debug!(root, chord_type, positions = positions.len(), "arpeggio query");
        Ok(positions)
    }

    pub fn arpeggio_from_pitch_classes(&self, pitch_classes: &[PitchClass]) -> Vec<NotePosition> {
        trace_arpeggio(&self.table, pitch_classes, self.config.arpeggio_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guitar::guitar_chord::Voicing;

    fn voicing(pairs: &[(usize, usize)]) -> Voicing {
        Voicing::new(pairs.iter().map(|&(s, f)| NotePosition::new(s, f)).collect())
    }

    #[test]
    fn test_named_chord() {
        let guitar = Instrument::new("E-A-D-G-B-E", 22).unwrap();
        let result = guitar.chord("C", "M", 0, Some(1)).unwrap();
        assert!(result.fretted.contains(&voicing(&[(1, 3), (2, 2), (3, 0), (4, 1), (5, 0)])));
    }

    #[test]
    fn test_inversion_changes_bass() {
        let guitar = Instrument::new("E-A-D-G-B-E", 22).unwrap();
        // 第一转位：E在最低音
        let result = guitar.chord("C", "M", 1, Some(0)).unwrap();
        assert!(!result.is_empty());
        for v in &result.fretted {
            let bass = v.positions()[0];
            assert_eq!(guitar.table().pitch_at(bass.string_index, bass.fret), PitchClass::new(4));
        }

        assert!(matches!(
            guitar.chord("C", "M", 3, None),
            Err(FretChartError::InvalidInversion { inversion: 3, len: 3 })
        ));
    }

    #[test]
    fn test_configuration_errors() {
        assert!(matches!(
            Instrument::new("E-A-H", 22),
            Err(FretChartError::InvalidTuning { .. })
        ));
        assert!(matches!(
            Instrument::new("E-A-D-G", 2),
            Err(FretChartError::InvalidGeometry(_))
        ));

        let bass = Instrument::from_preset("Standard bass").unwrap();
        assert!(matches!(
            bass.chord("C", "M", 0, Some(4)),
            Err(FretChartError::InvalidStartingString { string_index: 4, string_count: 4 })
        ));
        assert!(matches!(
            bass.chord("C", "M13#99", 0, None),
            Err(FretChartError::UnknownChordType(_))
        ));
        assert!(matches!(bass.scale("X", "major"), Err(FretChartError::UnknownNote(_))));
    }

    #[test]
    fn test_missing_root_is_empty_result() {
        let short = Instrument::new("E-A-D", 3).unwrap();
        let result = short.chord("C", "M", 0, Some(2)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_pitch_class_variants_match_named() {
        let guitar = Instrument::from_preset("Drop D").unwrap();
        let c_major: Vec<PitchClass> = [0, 4, 7].iter().map(|&v| PitchClass::new(v)).collect();

        assert_eq!(
            guitar.chord("C", "M", 0, None).unwrap(),
            guitar.chord_from_pitch_classes(&c_major, 0, None).unwrap()
        );
        assert_eq!(
            guitar.arpeggio("C", "M").unwrap(),
            guitar.arpeggio_from_pitch_classes(&c_major)
        );
    }
}
