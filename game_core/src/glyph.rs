//! Score digit glyphs
//!
//! Each digit is a 3x5 grid of square cells, stored row-major as a string of
//! `'1'` (lit) and `'0'` (dark).

pub const GLYPH_COLUMNS: usize = 3;
pub const GLYPH_ROWS: usize = 5;
/// Side of one glyph cell in arena units
pub const GLYPH_CELL: f32 = 10.0;

const DIGIT_PATTERNS: [&str; 10] = [
    "111101101101111",
    "010010010010010",
    "111001111100111",
    "111001111001111",
    "101101111001001",
    "111100111001111",
    "111100111101111",
    "111001001001001",
    "111101111101111",
    "111101111001111",
];

/// Bitmap for a single decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    digit: u8,
    cells: [bool; GLYPH_COLUMNS * GLYPH_ROWS],
}

impl Glyph {
    /// Glyph for `digit`, or `None` when it is not 0-9
    pub fn for_digit(digit: u8) -> Option<Self> {
        let pattern = DIGIT_PATTERNS.get(digit as usize)?;
        let mut cells = [false; GLYPH_COLUMNS * GLYPH_ROWS];
        for (cell, bit) in cells.iter_mut().zip(pattern.bytes()) {
            *cell = bit == b'1';
        }
        Some(Self { digit, cells })
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn width() -> f32 {
        GLYPH_COLUMNS as f32 * GLYPH_CELL
    }

    pub fn height() -> f32 {
        GLYPH_ROWS as f32 * GLYPH_CELL
    }

    /// `(column, row)` of every lit cell
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(|(i, _)| (i % GLYPH_COLUMNS, i / GLYPH_COLUMNS))
    }
}

/// Glyphs for the decimal digits of `value`, most significant first
pub fn digits_of(value: u32) -> Vec<Glyph> {
    value
        .to_string()
        .bytes()
        .filter_map(|b| Glyph::for_digit(b - b'0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_glyph() {
        for digit in 0..10 {
            let glyph = Glyph::for_digit(digit).unwrap();
            assert_eq!(glyph.digit(), digit);
            assert!(glyph.lit_cells().count() > 0);
        }
        assert!(Glyph::for_digit(10).is_none());
    }

    #[test]
    fn test_one_is_the_middle_column() {
        let one = Glyph::for_digit(1).unwrap();
        let cells: Vec<_> = one.lit_cells().collect();
        assert_eq!(cells, vec![(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_eight_lights_all_but_two_cells() {
        let eight = Glyph::for_digit(8).unwrap();
        assert_eq!(eight.lit_cells().count(), 13);
        assert!(!eight.lit_cells().any(|c| c == (1, 1) || c == (1, 3)));
    }

    #[test]
    fn test_glyph_dimensions() {
        assert_eq!(Glyph::width(), 30.0);
        assert_eq!(Glyph::height(), 50.0);
    }

    #[test]
    fn test_digits_of() {
        let digits: Vec<u8> = digits_of(107).iter().map(Glyph::digit).collect();
        assert_eq!(digits, vec![1, 0, 7]);
        assert_eq!(digits_of(0).len(), 1);
    }
}
