use strum::{Display, EnumIter};

use crate::GlyphError;

/// One contribution graph column is a week, so every glyph is seven cells tall.
pub const GLYPH_HEIGHT: usize = 7;

/// Bitmap of a single letter. Rows run Sunday to Saturday, columns run week by week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [&'static [u8]; GLYPH_HEIGHT],
}

impl Glyph {
    const fn new(rows: [&'static [u8]; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[&'static [u8]; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Filled cells as `(row, column)` pairs, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == 1)
                .map(move |(column, _)| (row, column))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    pub const fn glyph(&self) -> &'static Glyph {
        match self {
            Letter::A => &GLYPH_A,
            Letter::B => &GLYPH_B,
            Letter::C => &GLYPH_C,
            Letter::D => &GLYPH_D,
            Letter::E => &GLYPH_E,
            Letter::F => &GLYPH_F,
            Letter::G => &GLYPH_G,
            Letter::H => &GLYPH_H,
            Letter::I => &GLYPH_I,
            Letter::J => &GLYPH_J,
            Letter::K => &GLYPH_K,
            Letter::L => &GLYPH_L,
            Letter::M => &GLYPH_M,
            Letter::N => &GLYPH_N,
            Letter::O => &GLYPH_O,
            Letter::P => &GLYPH_P,
            Letter::Q => &GLYPH_Q,
            Letter::R => &GLYPH_R,
            Letter::S => &GLYPH_S,
            Letter::T => &GLYPH_T,
            Letter::U => &GLYPH_U,
            Letter::V => &GLYPH_V,
            Letter::W => &GLYPH_W,
            Letter::X => &GLYPH_X,
            Letter::Y => &GLYPH_Y,
            Letter::Z => &GLYPH_Z,
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = GlyphError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Ok(match character {
            'A' => Letter::A,
            'B' => Letter::B,
            'C' => Letter::C,
            'D' => Letter::D,
            'E' => Letter::E,
            'F' => Letter::F,
            'G' => Letter::G,
            'H' => Letter::H,
            'I' => Letter::I,
            'J' => Letter::J,
            'K' => Letter::K,
            'L' => Letter::L,
            'M' => Letter::M,
            'N' => Letter::N,
            'O' => Letter::O,
            'P' => Letter::P,
            'Q' => Letter::Q,
            'R' => Letter::R,
            'S' => Letter::S,
            'T' => Letter::T,
            'U' => Letter::U,
            'V' => Letter::V,
            'W' => Letter::W,
            'X' => Letter::X,
            'Y' => Letter::Y,
            'Z' => Letter::Z,
            other => return Err(GlyphError::UnknownGlyph(other)),
        })
    }
}

pub fn glyph(character: char) -> Result<&'static Glyph, GlyphError> {
    Letter::try_from(character).map(|letter| letter.glyph())
}

const GLYPH_A: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
]);

const GLYPH_B: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_C: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
]);

const GLYPH_D: Glyph = Glyph::new([
    &[1, 1, 0, 0],
    &[1, 0, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 1, 0],
    &[1, 1, 0, 0],
]);

const GLYPH_E: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
]);

const GLYPH_F: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
]);

const GLYPH_G: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_H: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
]);

const GLYPH_I: Glyph = Glyph::new([&[1], &[1], &[1], &[1], &[1], &[1], &[1]]);

const GLYPH_J: Glyph = Glyph::new([
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_K: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 1, 0],
    &[1, 1, 0, 0],
    &[1, 0, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
]);

const GLYPH_L: Glyph = Glyph::new([
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
]);

const GLYPH_M: Glyph = Glyph::new([
    &[1, 0, 0, 0, 1],
    &[1, 1, 0, 1, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
]);

const GLYPH_N: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 1, 0, 1],
    &[1, 1, 0, 1],
    &[1, 1, 1, 1],
    &[1, 0, 1, 1],
    &[1, 0, 1, 1],
    &[1, 0, 0, 1],
]);

const GLYPH_O: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_P: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
]);

const GLYPH_Q: Glyph = Glyph::new([
    &[0, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 1, 1],
    &[0, 1, 1, 1],
]);

const GLYPH_R: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[1, 1, 0, 0],
    &[1, 0, 1, 0],
    &[1, 0, 0, 1],
]);

const GLYPH_S: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_T: Glyph = Glyph::new([
    &[1, 1, 1, 1, 1],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
]);

const GLYPH_U: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_V: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[0, 1, 1, 0],
    &[0, 1, 1, 0],
]);

const GLYPH_W: Glyph = Glyph::new([
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 1, 0, 1],
    &[0, 1, 1, 1, 0],
]);

const GLYPH_X: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[0, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
]);

const GLYPH_Y: Glyph = Glyph::new([
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[1, 1, 1, 1],
]);

const GLYPH_Z: Glyph = Glyph::new([
    &[1, 1, 1, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[0, 1, 1, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
    &[1, 1, 1, 1],
]);

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_glyph_is_rectangular() {
        for letter in Letter::iter() {
            let glyph = letter.glyph();
            assert!(glyph.width() > 0, "{letter} is empty");
            for row in glyph.rows() {
                assert_eq!(row.len(), glyph.width(), "ragged row in {letter}");
                assert!(row.iter().all(|cell| *cell <= 1), "non-binary cell in {letter}");
            }
        }
    }

    #[test]
    fn letters_round_trip_through_their_character() {
        for letter in Letter::iter() {
            let character = letter.to_string().chars().next().unwrap();
            assert_eq!(Letter::try_from(character).unwrap(), letter);
        }
    }

    #[test]
    fn known_widths() {
        assert_eq!(glyph('I').unwrap().width(), 1);
        assert_eq!(glyph('M').unwrap().width(), 5);
        assert_eq!(glyph('T').unwrap().width(), 5);
        assert_eq!(glyph('W').unwrap().width(), 5);
        assert_eq!(glyph('A').unwrap().width(), 4);
    }

    #[test]
    fn lowercase_and_symbols_are_unknown() {
        assert_eq!(glyph('a'), Err(GlyphError::UnknownGlyph('a')));
        assert_eq!(glyph('!'), Err(GlyphError::UnknownGlyph('!')));
        assert_eq!(glyph(' '), Err(GlyphError::UnknownGlyph(' ')));
    }

    #[test]
    fn filled_cells_are_row_major() {
        let cells = glyph('L').unwrap().filled_cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (6, 0),
                (6, 1),
                (6, 2),
                (6, 3)
            ]
        );
    }
}
