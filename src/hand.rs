//! 左手模块
//!
//! 手的跨度窗口和横按

pub mod barre;
pub mod fret_window;
