//! 音阶和琶音在指板上的位置

pub mod arpeggio;
pub mod scale;
