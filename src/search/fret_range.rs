// src/search/fret_range.rs

/// A window of frets searched on the strings above the root, together with
/// the root fret it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FretRange {
    pub frets: Vec<usize>,
    pub root_fret: usize,
    /// The root is voiced an octave up, at `root_fret = natural fret + 12`.
    pub uses_high_root: bool,
}

/// Frets at or above this column only repeat shapes found an octave lower.
pub fn usable_fret_limit(range_above_below: usize, total_frets: usize) -> usize {
    11usize
        .saturating_add(range_above_below.saturating_mul(2))
        .min(total_frets)
}

/// All candidate windows for a root found at `root_fret` (below the octave).
///
/// Windows are `2 * range_above_below` frets wide. A root close to the nut
/// also gets windows near the octave, where the root is taken at
/// `root_fret + 12` and the open strings can still be reached.
pub fn fret_ranges(
    root_fret: usize,
    range_above_below: usize,
    total_frets: usize,
) -> Vec<FretRange> {
    let width = range_above_below.saturating_mul(2);
    let limit = usable_fret_limit(range_above_below, total_frets);
    let mut ranges = Vec::new();

    let window = |start: usize, with_open: bool| -> Vec<usize> {
        let mut frets: Vec<usize> = if with_open && start > 0 { vec![0] } else { Vec::new() };
        frets.extend(start..start.saturating_add(width).min(limit));
        frets
    };

    if root_fret <= range_above_below {
        // 根音靠近琴枕
        for start in 0..=root_fret {
            ranges.push(FretRange {
                frets: window(start, false),
                root_fret,
                uses_high_root: false,
            });
        }

        // 根音在高八度上，高音弦仍可以用空弦
        let high_root = root_fret + 12;
        if high_root < total_frets {
            for start in (root_fret + 13).saturating_sub(width)..12 {
                ranges.push(FretRange {
                    frets: window(start, true),
                    root_fret: high_root,
                    uses_high_root: true,
                });
            }
        }
    } else {
        for start in root_fret.saturating_sub(width).max(1)..=root_fret {
            ranges.push(FretRange {
                frets: window(start, true),
                root_fret,
                uses_high_root: false,
            });
        }
    }

    ranges.retain(|range| range.frets.iter().any(|&f| f != 0));
    ranges
}
