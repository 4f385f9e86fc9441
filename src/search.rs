//! 和弦指法搜索

pub mod chord_search;
pub mod combinations;
pub mod fret_range;
