use crate::guitar::fretboard::FretboardTable;
use crate::guitar::guitar_chord::NotePosition;
use crate::guitar::music_note::PitchClass;

/// Every position on the board that belongs to the scale, string by string
/// and fret by fret. No hand span applies, this is a map of the whole neck.
pub fn trace_scale(table: &FretboardTable, scale: &[PitchClass]) -> Vec<NotePosition> {
    let mut positions = Vec::new();

    for string_index in 0..table.string_count() {
        for fret in 0..table.fret_total() {
            if scale.contains(&table.pitch_at(string_index, fret)) {
                positions.push(NotePosition::new(string_index, fret));
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(values: &[i32]) -> Vec<PitchClass> {
        values.iter().map(|&v| PitchClass::new(v)).collect()
    }

    #[test]
    fn test_c_major_on_low_e_string() {
        let table = FretboardTable::build(&["E", "A", "D", "G", "B", "E"], 22).unwrap();
        let positions = trace_scale(&table, &pcs(&[0, 2, 4, 5, 7, 9, 11]));

        let low_e: Vec<usize> = positions
            .iter()
            .filter(|pos| pos.string_index == 0)
            .map(|pos| pos.fret)
            .collect();
        assert_eq!(&low_e[..8], &[0, 1, 3, 5, 7, 8, 10, 12]);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_scale() {
        let table = FretboardTable::build(&["E", "A", "D", "G"], 20).unwrap();
        assert!(trace_scale(&table, &[]).is_empty());
    }

    #[test]
    fn test_chromatic_scale_covers_board() {
        let table = FretboardTable::build(&["G", "D", "A", "E"], 12).unwrap();
        let all: Vec<PitchClass> = (0..12).map(PitchClass::new).collect();
        assert_eq!(trace_scale(&table, &all).len(), 4 * 13);
    }
}
