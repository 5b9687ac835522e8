use std::fmt::{Display, Write};

use gol::Life;

/// Text drawn for each cell, including any spacing after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: String,
    pub dead: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: "■ ".to_owned(),
            dead: "□ ".to_owned(),
        }
    }
}

/// One screenful: a generation header, a blank line, then the grid row by
/// row.
#[derive(Clone, Copy)]
pub struct Frame<'a, const W: usize, const H: usize> {
    life: &'a Life<W, H>,
    glyphs: &'a Glyphs,
}

impl<'a, const W: usize, const H: usize> Frame<'a, W, H> {
    pub fn new(life: &'a Life<W, H>, glyphs: &'a Glyphs) -> Self {
        Self { life, glyphs }
    }
}

impl<const W: usize, const H: usize> Display for Frame<'_, W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Generation: {}", self.life.generation())?;
        f.write_char('\n')?;
        for y in 0..self.life.height() as isize {
            for x in 0..self.life.width() as isize {
                let glyph = match self.life.get_cell(x, y) {
                    true => &self.glyphs.alive,
                    false => &self.glyphs.dead,
                };
                f.write_str(glyph)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol::{Board, Pattern};

    fn ascii() -> Glyphs {
        Glyphs {
            alive: "#".to_owned(),
            dead: ".".to_owned(),
        }
    }

    #[test]
    fn test_small_frame() {
        let mut life = Life::<3, 2>::new();
        life.set_cell(1, 0, true);
        life.set_cell(2, 1, true);
        let frame = Frame::new(&life, &ascii()).to_string();
        assert_eq!(frame, "Generation: 0\n\n.#.\n..#\n");
    }

    #[test]
    fn test_header_follows_generation() {
        let mut life = Life::<3, 3>::new();
        life.compute_n_generations(12);
        let frame = Frame::new(&life, &ascii()).to_string();
        assert!(frame.starts_with("Generation: 12\n\n"));
    }

    #[test]
    fn test_default_glyphs() {
        let mut board = Board::new();
        board.place(&Pattern::glider(), board.center());
        let frame = Frame::new(&board, &Glyphs::default()).to_string();
        let rows: Vec<&str> = frame.lines().skip(2).collect();
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|row| row.chars().count() == 50));
        assert_eq!(frame.matches('■').count(), 5);
        assert_eq!(frame.matches('□').count(), 25 * 25 - 5);
        assert_eq!(rows[11].chars().nth(24), Some('■'));
    }
}
