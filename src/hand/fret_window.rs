// src/hand/fret_window.rs

/// 四个手指从最外侧的按弦手指算起最多能再伸展四个品格
pub const DEFAULT_CHORD_SPAN: usize = 4;
pub const DEFAULT_ARPEGGIO_SPAN: usize = 3;

/// Frets a hand can still reach once `placed_frets` are held down.
///
/// `total_frets` is the number of fret columns, open string included.
/// Nothing constrains the hand until a fretted note exists, so an empty list
/// (or only open strings) allows every fret. Otherwise the window runs from
/// `max - span` (at least fret 1) to `min + span`, and fret 0 is always added
/// back because open strings cost nothing.
pub fn window_for(placed_frets: &[usize], total_frets: usize, span: usize) -> Vec<usize> {
    let fretted: Vec<usize> = placed_frets.iter().copied().filter(|&f| f != 0).collect();

    let (Some(&min_fret), Some(&max_fret)) = (fretted.iter().min(), fretted.iter().max()) else {
        return (0..total_frets).collect();
    };

    if total_frets == 0 {
        return Vec::new();
    }

    let lower_bound = max_fret.saturating_sub(span).max(1);
    let upper_bound = min_fret.saturating_add(span).min(total_frets - 1);

    let mut allowed = vec![0];
    allowed.extend(lower_bound..=upper_bound);
    allowed
}

/// Frets searched around a single anchor fret while tracing an arpeggio.
///
/// The window reaches two frets further above the anchor than below it,
/// which follows how ascending arpeggio fingerings creep up the neck.
pub fn window_for_anchor(anchor_fret: usize, total_frets: usize, span: usize) -> Vec<usize> {
    if total_frets == 0 {
        return Vec::new();
    }
    let lower_bound = anchor_fret.saturating_sub(span);
    let upper_bound = anchor_fret.saturating_add(span).saturating_add(2).min(total_frets - 1);
    (lower_bound..=upper_bound).collect()
}
