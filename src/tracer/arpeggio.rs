use tracing::trace;

use crate::guitar::fretboard::FretboardTable;
use crate::guitar::guitar_chord::NotePosition;
use crate::guitar::music_note::PitchClass;
use crate::hand::fret_window::window_for_anchor;

/// Walks the strings in order collecting arpeggio notes inside a moving hand
/// window.
///
/// The first window is anchored on the first occurrence of the root on
/// string 0. On each string, the first note found becomes the new anchor;
/// further notes on that string are kept only if they also fall inside the
/// re-anchored window. When a string has none of the sought note, the tracer
/// skips that note once and rescans the same string before moving on.
///
/// Positions come back in discovery order and may repeat pitch classes.
pub fn trace_arpeggio(
    table: &FretboardTable,
    arpeggio: &[PitchClass],
    span: usize,
) -> Vec<NotePosition> {
    let mut positions = Vec::new();
    if arpeggio.is_empty() {
        return positions;
    }

    let total_frets = table.fret_total();
    let anchor = table.find_fret(0, arpeggio[0], 0..total_frets).unwrap_or(0);
    let mut allowed_frets = window_for_anchor(anchor, total_frets, span);

    let mut string_index = 0;
    let mut arpeggio_index = 0;
    let mut retry = false;

    while string_index < table.string_count() {
        let scan = allowed_frets.clone();
        let mut first_fret_on_string: Option<usize> = None;

        for fret in scan {
            if first_fret_on_string.is_some() && !allowed_frets.contains(&fret) {
                continue;
            }

            let search_note = arpeggio[arpeggio_index % arpeggio.len()];
            if table.pitch_at(string_index, fret) == search_note {
                positions.push(NotePosition::new(string_index, fret));
                arpeggio_index += 1;

                if first_fret_on_string.is_none() {
                    first_fret_on_string = Some(fret);
                    allowed_frets = window_for_anchor(fret, total_frets, span);
                }
            }
        }

        if first_fret_on_string.is_some() {
            retry = false;
            string_index += 1;
        } else if retry {
            // 已经换过一次音了，放弃这根弦
            trace!(string_index, "no arpeggio note on string");
            retry = false;
            string_index += 1;
        } else {
            // 这根弦上没找到，换下一个音再试一次
            arpeggio_index += 1;
            retry = true;
        }
    }

    positions
}
