//! Search settings and instrument presets.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::{FretChartError, Result};
use crate::hand::fret_window::{DEFAULT_ARPEGGIO_SPAN, DEFAULT_CHORD_SPAN};

/// Tunable constants of the voicing search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum stretch in frets between the outermost fretted notes of a chord.
    pub chord_span: usize,
    /// Reject chord voicings stretching further than `chord_span`. Off by
    /// default: the fret ranges already bound the hand.
    pub enforce_chord_span: bool,
    /// Reach below an arpeggio anchor fret (it reaches `+ 2` further above).
    pub arpeggio_span: usize,
    /// Chord fret windows are twice this wide.
    pub range_above_below: usize,
    /// Fretted notes a plain (non-barre) voicing may hold.
    pub max_fretted_notes: usize,
    /// Notes a barre voicing may hold above its barre.
    pub max_barre_extra_notes: usize,
    /// Reject voicings whose neighbouring strings sound the same pitch class.
    pub reject_adjacent_unisons: bool,
    /// Search each starting string on its own thread.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            chord_span: DEFAULT_CHORD_SPAN,
            enforce_chord_span: false,
            arpeggio_span: DEFAULT_ARPEGGIO_SPAN,
            range_above_below: 2,
            max_fretted_notes: 4,
            max_barre_extra_notes: 3,
            reject_adjacent_unisons: false,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A named instrument: fret count and hyphen separated tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentPreset {
    pub name: &'static str,
    pub fret_count: usize,
    pub tuning: &'static str,
}

lazy_static! {
    pub static ref INSTRUMENT_PRESETS: Vec<InstrumentPreset> = {
        let presets = [
            ("Standard guitar", 22, "E-A-D-G-B-E"),
            ("Open D", 22, "D-A-D-F#-A-D"),
            ("Drop D", 22, "D-A-D-G-B-E"),
            ("Standard bass", 22, "E-A-D-G"),
            ("6-string bass", 22, "B-E-A-D-G-E"),
            ("Nick Drake", 22, "C-G-C-F-C-E"),
            ("Midwest emo 1", 22, "F-A-C-G-C-E"),
            ("Midwest emo 2", 22, "D-A-E-A-C#-E"),
            ("Midwest emo 3", 22, "D-A-D-G-A-D"),
            ("7-string guitar", 24, "B-E-A-D-G-B-E"),
            ("8-string guitar", 24, "F#-B-E-A-D-G-B-E"),
            ("9-string guitar", 24, "B-F#-B-E-A-D-G-B-E"),
            ("Baritone", 22, "B-E-A-D-G-B"),
        ];
        presets
            .into_iter()
            .map(|(name, fret_count, tuning)| InstrumentPreset { name, fret_count, tuning })
            .collect()
    };
}

pub fn preset(name: &str) -> Result<&'static InstrumentPreset> {
    INSTRUMENT_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| FretChartError::UnknownPreset(name.to_string()))
}

pub fn preset_names() -> Vec<&'static str> {
    INSTRUMENT_PRESETS.iter().map(|preset| preset.name).collect()
}
