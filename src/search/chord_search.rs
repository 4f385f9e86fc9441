// src/search/chord_search.rs

use serde::Serialize;
use std::collections::BTreeSet;
use std::panic;
use std::thread;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::{FretChartError, Result};
use crate::guitar::fretboard::FretboardTable;
use crate::guitar::guitar_chord::{ChordSpec, NotePosition, Voicing};
use crate::hand::barre::{BarreVoicing, is_barre_shape};
use crate::search::combinations::{cartesian_product, subsets_in_size_range};
use crate::search::fret_range::{FretRange, fret_ranges};

/// Playable shapes of one chord: plain fretted voicings and barre voicings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChordVoicings {
    pub fretted: Vec<Voicing>,
    pub barre: Vec<BarreVoicing>,
}

impl ChordVoicings {
    pub fn len(&self) -> usize {
        self.fretted.len() + self.barre.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fretted.is_empty() && self.barre.is_empty()
    }

    /// Unions `other` into `self`, dropping shapes already present.
    pub fn merge(&mut self, other: ChordVoicings) {
        self.fretted.extend(other.fretted);
        self.fretted.sort();
        self.fretted.dedup();
        self.barre.extend(other.barre);
        self.barre.sort();
        self.barre.dedup();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rejected,
    Fretted,
    Barre,
}

fn classify(
    voicing: &Voicing,
    table: &FretboardTable,
    chord: &ChordSpec,
    config: &SearchConfig,
) -> Shape {
    // 规则1：和弦里的每个音都要出现
    if !voicing.sounds_all(table, chord) {
        return Shape::Rejected;
    }

    // 规则2：相邻弦不能是同一个音
    if config.reject_adjacent_unisons && voicing.has_adjacent_unison(table) {
        return Shape::Rejected;
    }

    // 可选：手指跨度超过 chord_span 的指法不要
    if config.enforce_chord_span && !voicing.is_within_span(table.fret_total(), config.chord_span) {
        return Shape::Rejected;
    }

    // 规则3：横按
    if is_barre_shape(voicing, config.max_barre_extra_notes) {
        return Shape::Barre;
    }

    // 四个手指按不下更多的音
    if voicing.fretted_count() > config.max_fretted_notes {
        return Shape::Rejected;
    }

    Shape::Fretted
}

/// A window is only worth expanding if every non-root chord note can be
/// found on some higher string inside it.
fn range_covers_chord(
    table: &FretboardTable,
    chord: &ChordSpec,
    range: &FretRange,
    starting_string: usize,
) -> bool {
    chord.pitch_classes()[1..].iter().all(|&pc| {
        (starting_string + 1..table.string_count())
            .any(|s| range.frets.iter().any(|&f| table.pitch_at(s, f) == pc))
    })
}

/// Finds every voicing whose root sits on `starting_string` and whose other
/// notes are taken from the strings above it.
///
/// Returns `RootNotOnString` when the root does not occur below the octave on
/// that string; callers searching the whole instrument skip such strings.
pub fn find_voicings(
    table: &FretboardTable,
    chord: &ChordSpec,
    starting_string: usize,
    config: &SearchConfig,
) -> Result<ChordVoicings> {
    let string_count = table.string_count();
    if starting_string >= string_count {
        return Err(FretChartError::InvalidStartingString {
            string_index: starting_string,
            string_count,
        });
    }

    let root = chord.root();
    let root_fret = table
        .find_fret(starting_string, root, 0..12)
        .ok_or(FretChartError::RootNotOnString {
            root,
            string_index: starting_string,
        })?;

    let higher_strings: Vec<usize> = (starting_string + 1..string_count).collect();
    let subsets = subsets_in_size_range(&higher_strings, chord.len() - 1, higher_strings.len());

    let mut fretted: BTreeSet<Voicing> = BTreeSet::new();
    let mut barre: BTreeSet<Voicing> = BTreeSet::new();

    for range in fret_ranges(root_fret, config.range_above_below, table.fret_total()) {
        if !range_covers_chord(table, chord, &range, starting_string) {
            trace!(?range, "fret range cannot complete the chord");
            continue;
        }

        // 每根弦上属于和弦的品位
        let chord_frets: Vec<Vec<usize>> = higher_strings
            .iter()
            .map(|&s| {
                range
                    .frets
                    .iter()
                    .copied()
                    .filter(|&f| chord.contains(table.pitch_at(s, f)))
                    .collect()
            })
            .collect();

        for subset in &subsets {
            let pools: Vec<&[usize]> = subset
                .iter()
                .map(|&s| chord_frets[s - starting_string - 1].as_slice())
                .collect();

            for frets in cartesian_product(pools) {
                let mut positions = Vec::with_capacity(subset.len() + 1);
                positions.push(NotePosition::new(starting_string, range.root_fret));
                positions.extend(subset.iter().zip(frets).map(|(&s, f)| NotePosition::new(s, f)));
                let voicing = Voicing::new(positions);

                match classify(&voicing, table, chord, config) {
                    Shape::Fretted => {
                        fretted.insert(voicing);
                    }
                    Shape::Barre => {
                        barre.insert(voicing);
                    }
                    Shape::Rejected => {}
                }
            }
        }
    }

    debug!(
        starting_string,
        root_fret,
        fretted = fretted.len(),
        barre = barre.len(),
        "searched starting string"
    );

    let mut barre_voicings: Vec<BarreVoicing> =
        barre.iter().filter_map(BarreVoicing::decompose).collect();
    barre_voicings.sort();

    Ok(ChordVoicings {
        fretted: fretted.into_iter().collect(),
        barre: barre_voicings,
    })
}

/// Voicings from every starting string that leaves enough strings above it
/// for the rest of the chord, deduplicated across starting strings.
pub fn chord_voicings(
    table: &FretboardTable,
    chord: &ChordSpec,
    config: &SearchConfig,
) -> Result<ChordVoicings> {
    let string_count = table.string_count();
    if chord.len() > string_count {
        debug!(notes = chord.len(), string_count, "chord has more notes than strings");
        return Ok(ChordVoicings::default());
    }
    let starting_strings: Vec<usize> = (0..=string_count - chord.len()).collect();

    let partials: Vec<Result<ChordVoicings>> = if config.parallel {
        thread::scope(|scope| {
            let handles: Vec<_> = starting_strings
                .iter()
                .map(|&s| scope.spawn(move || find_voicings(table, chord, s, config)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect()
        })
    } else {
        starting_strings
            .iter()
            .map(|&s| find_voicings(table, chord, s, config))
            .collect()
    };

    let mut all = ChordVoicings::default();
    for partial in partials {
        match partial {
            Ok(voicings) => all.merge(voicings),
            Err(FretChartError::RootNotOnString { root, string_index }) => {
                debug!(%root, string_index, "skipping starting string without root");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guitar::music_note::PitchClass;

    fn standard_guitar() -> FretboardTable {
        FretboardTable::build(&["E", "A", "D", "G", "B", "E"], 22).unwrap()
    }

    fn chord(values: &[i32]) -> ChordSpec {
        ChordSpec::new(values.iter().map(|&v| PitchClass::new(v)).collect()).unwrap()
    }

    fn voicing(pairs: &[(usize, usize)]) -> Voicing {
        Voicing::new(pairs.iter().map(|&(s, f)| NotePosition::new(s, f)).collect())
    }

    #[test]
    fn test_open_c_major_from_a_string() {
        let table = standard_guitar();
        let config = SearchConfig::default();
        let result = find_voicings(&table, &chord(&[0, 4, 7]), 1, &config).unwrap();

        assert!(result.fretted.contains(&voicing(&[(1, 3), (2, 2), (3, 0), (4, 1), (5, 0)])));
        assert!(result.fretted.contains(&voicing(&[(1, 3), (2, 2), (3, 0), (4, 1)])));
        assert!(
            result
                .fretted
                .iter()
                .all(|v| v.positions()[0].string_index == 1)
        );
    }

    #[test]
    fn test_open_e_major_is_not_a_barre() {
        let table = standard_guitar();
        let config = SearchConfig::default();
        let result = find_voicings(&table, &chord(&[4, 8, 11]), 0, &config).unwrap();

        let open_e = voicing(&[(0, 0), (1, 2), (2, 2), (3, 1), (4, 0), (5, 0)]);
        assert!(result.fretted.contains(&open_e));
        assert!(
            result
                .barre
                .iter()
                .all(|b| b.positions().iter().all(|pos| pos.fret != 0))
        );
    }

    #[test]
    fn test_f_major_barre() {
        let table = standard_guitar();
        let config = SearchConfig::default();
        let result = find_voicings(&table, &chord(&[5, 9, 0]), 0, &config).unwrap();

        let f_major = voicing(&[(0, 1), (1, 3), (2, 3), (3, 2), (4, 1), (5, 1)]);
        let f_barre = BarreVoicing::decompose(&f_major).unwrap();
        assert!(result.barre.contains(&f_barre));
        // 横按和弦不会同时出现在普通和弦里
        assert!(!result.fretted.contains(&f_major));
    }

    #[test]
    fn test_root_not_on_string() {
        // 品数不足一个八度时根音可能不存在
        let table = FretboardTable::build(&["E", "A", "D"], 3).unwrap();
        let config = SearchConfig::default();
        let err = find_voicings(&table, &chord(&[0, 4, 7]), 2, &config).unwrap_err();
        assert!(matches!(err, FretChartError::RootNotOnString { string_index: 2, .. }));

        let err = find_voicings(&table, &chord(&[0, 4, 7]), 3, &config).unwrap_err();
        assert!(matches!(err, FretChartError::InvalidStartingString { .. }));
    }

    #[test]
    fn test_plain_voicing_rules() {
        let table = standard_guitar();
        let c_major = chord(&[0, 4, 7]);
        let result = chord_voicings(&table, &c_major, &SearchConfig::default()).unwrap();

        assert!(!result.fretted.is_empty());
        for v in &result.fretted {
            assert!(v.sounds_all(&table, &c_major), "{:?} is incomplete", v);
            assert!(v.fretted_count() <= 4, "{:?} needs too many fingers", v);
            assert!(!v.has_duplicate_strings());
        }
        for b in &result.barre {
            let frets: Vec<usize> = b.positions().iter().map(|pos| pos.fret).collect();
            assert_eq!(b.barre_fret(), *frets.iter().min().unwrap());
            assert!(b.barre.low.string_index < b.barre.high.string_index);
            assert!(frets.iter().all(|&f| f != 0));
            assert!(b.fretted.iter().all(|pos| pos.fret > b.barre_fret()));
        }
    }

    #[test]
    fn test_wider_ranges_keep_every_complete_voicing() {
        let table = standard_guitar();
        let c_major = chord(&[0, 4, 7]);
        let wide = SearchConfig {
            range_above_below: 3,
            ..SearchConfig::default()
        };
        let result = chord_voicings(&table, &c_major, &wide).unwrap();
        // 320个普通指法加14个横按
        assert_eq!(result.len(), 334);

        // 打开跨度限制后只会更少
        let limited = SearchConfig {
            enforce_chord_span: true,
            ..wide
        };
        let pruned = chord_voicings(&table, &c_major, &limited).unwrap();
        assert!(pruned.len() < result.len());
        assert!(pruned.fretted.iter().all(|v| result.fretted.contains(v)));
        assert!(pruned.barre.iter().all(|b| result.barre.contains(b)));
    }

    #[test]
    fn test_no_duplicates_and_deterministic() {
        let table = standard_guitar();
        let g_major = chord(&[7, 11, 2]);
        let first = chord_voicings(&table, &g_major, &SearchConfig::default()).unwrap();
        let second = chord_voicings(&table, &g_major, &SearchConfig::default()).unwrap();
        assert_eq!(first, second);

        let unique: BTreeSet<&Voicing> = first.fretted.iter().collect();
        assert_eq!(unique.len(), first.fretted.len());
        let unique_barre: BTreeSet<&BarreVoicing> = first.barre.iter().collect();
        assert_eq!(unique_barre.len(), first.barre.len());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = standard_guitar();
        let a_minor = chord(&[9, 0, 4]);
        let sequential = chord_voicings(&table, &a_minor, &SearchConfig::default()).unwrap();
        let parallel_config = SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        };
        let parallel = chord_voicings(&table, &a_minor, &parallel_config).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_adjacent_unison_rule() {
        let table = standard_guitar();
        let c_major = chord(&[0, 4, 7]);
        let strict = SearchConfig {
            reject_adjacent_unisons: true,
            ..SearchConfig::default()
        };
        let loose = chord_voicings(&table, &c_major, &SearchConfig::default()).unwrap();
        let filtered = chord_voicings(&table, &c_major, &strict).unwrap();

        assert!(filtered.fretted.len() < loose.fretted.len());
        assert!(filtered.fretted.iter().all(|v| !v.has_adjacent_unison(&table)));
        assert!(filtered.fretted.iter().all(|v| loose.fretted.contains(v)));
    }

    #[test]
    fn test_chord_wider_than_instrument() {
        let table = FretboardTable::build(&["G", "D", "A"], 12).unwrap();
        let config = SearchConfig::default();
        let result = chord_voicings(&table, &chord(&[0, 4, 7, 11]), &config).unwrap();
        assert!(result.is_empty());
    }
}
