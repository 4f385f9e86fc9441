//! Chord voicing, scale and arpeggio search for fretted instruments.
//!
//! ```no_run
//! use fret_chart_rust::Instrument;
//!
//! let guitar = Instrument::new("E-A-D-G-B-E", 22)?;
//! let voicings = guitar.chord("C", "M", 0, None)?;
//! println!("{} shapes", voicings.len());
//! # Ok::<(), fret_chart_rust::FretChartError>(())
//! ```

pub mod config;
pub mod error;
pub mod guitar;
pub mod hand;
pub mod instrument;
pub mod search;
pub mod tracer;

pub use config::{INSTRUMENT_PRESETS, InstrumentPreset, SearchConfig};
pub use error::{FretChartError, Result};
pub use guitar::fretboard::FretboardTable;
pub use guitar::guitar_chord::{ChordSpec, NotePosition, Voicing};
pub use guitar::music_note::PitchClass;
pub use hand::barre::{Barre, BarreVoicing, PressState};
pub use instrument::Instrument;
pub use search::chord_search::{ChordVoicings, chord_voicings, find_voicings};
pub use tracer::arpeggio::trace_arpeggio;
pub use tracer::scale::trace_scale;
