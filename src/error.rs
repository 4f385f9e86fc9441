//! Error types for fret_chart_rust
//!
//! Everything here is a configuration error raised before a search starts,
//! except `RootNotOnString`, which the chord search uses to skip a starting
//! string. An empty search result is never an error.

use thiserror::Error;

use crate::guitar::music_note::PitchClass;

#[derive(Debug, Error)]
pub enum FretChartError {
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    #[error("Unknown interval name: {0}")]
    UnknownInterval(String),

    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),

    #[error("Unknown instrument preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown progression numeral: {0}")]
    UnknownNumeral(String),

    /// 调弦里有无法识别的音名
    #[error("Invalid tuning token '{token}': {reason}")]
    InvalidTuning { token: String, reason: String },

    #[error("Invalid instrument geometry: {0}")]
    InvalidGeometry(String),

    #[error("Inversion {inversion} cannot be built from a {len}-note chord")]
    InvalidInversion { inversion: usize, len: usize },

    #[error("Starting string {string_index} is out of range for {string_count} strings")]
    InvalidStartingString {
        string_index: usize,
        string_count: usize,
    },

    #[error("Pitch class list is empty")]
    EmptySpec,

    #[error("Root {root} does not occur below the octave on string {string_index}")]
    RootNotOnString {
        root: PitchClass,
        string_index: usize,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretChartError>;
