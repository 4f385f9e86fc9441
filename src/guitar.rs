//! 吉他模块
//!
//! 音高、音程表、琴弦和指板

pub mod fretboard;
pub mod guitar_chord;
pub mod guitar_string;
pub mod intervals;
pub mod music_note;
