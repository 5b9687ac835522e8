use itertools::Itertools;

use crate::Pattern;

pub const WIDTH: usize = 25;
pub const HEIGHT: usize = 25;

/// The board the terminal app runs on.
pub type Board = Life<WIDTH, HEIGHT>;

type Cells<const W: usize, const H: usize> = [[bool; W]; H];

/// A `W`x`H` toroidal Life grid, double buffered so that stepping never
/// allocates.
#[derive(Clone, Debug)]
pub struct Life<const W: usize, const H: usize> {
    buffers: [Cells<W, H>; 2],
    active: usize,
    generation: u64,
}

impl<const W: usize, const H: usize> Default for Life<W, H> {
    fn default() -> Self {
        const { assert!(W > 0 && H > 0, "a Life grid needs at least one cell") };
        Self {
            buffers: [[[false; W]; H]; 2],
            active: 0,
            generation: 0,
        }
    }
}

impl<const W: usize, const H: usize> Life<W, H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn center(&self) -> (isize, isize) {
        ((W / 2) as isize, (H / 2) as isize)
    }

    /// Out of range coordinates read as dead.
    pub fn get_cell(&self, x: isize, y: isize) -> bool {
        index::<W, H>(x, y).is_some_and(|(x, y)| self.cells()[y][x])
    }

    /// Out of range coordinates are ignored.
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) {
        if let Some((x, y)) = index::<W, H>(x, y) {
            self.buffers[self.active][y][x] = alive;
        }
    }

    pub fn clear(&mut self) {
        log::debug!("clearing board at generation {}", self.generation);
        for buffer in &mut self.buffers {
            *buffer = [[false; W]; H];
        }
        self.active = 0;
        self.generation = 0;
    }

    /// Live cells among the eight neighbours of `(x, y)`, wrapping around the
    /// edges. Any coordinate is accepted and first reduced onto the torus.
    pub fn count_neighbors(&self, x: isize, y: isize) -> usize {
        live_neighbours(self.cells(), x, y)
    }

    pub fn next_generation(&mut self) {
        let [a, b] = &mut self.buffers;
        let (current, next) = match self.active {
            0 => (&*a, b),
            _ => (&*b, a),
        };
        for (y, row) in next.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let neighbours = live_neighbours(current, x as isize, y as isize);
                *cell = survives(current[y][x], neighbours);
            }
        }
        self.active ^= 1;
        self.generation += 1;
        log::trace!("advanced to generation {}", self.generation);
    }

    /// Steps `n` times and returns how many steps were taken. Non-positive
    /// counts do nothing.
    pub fn compute_n_generations(&mut self, n: i64) -> u64 {
        if n <= 0 {
            return 0;
        }
        let n = n as u64;
        for _ in 0..n {
            self.next_generation();
        }
        log::debug!("advanced {n} generations, now at {}", self.generation);
        n
    }

    pub fn population(&self) -> usize {
        self.cells().iter().flatten().filter(|&&alive| alive).count()
    }

    /// Live cells as `(x, y)`, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        (0..H)
            .cartesian_product(0..W)
            .filter(|&(y, x)| self.cells()[y][x])
            .map(|(y, x)| (x as isize, y as isize))
    }

    /// Sets every cell of `pattern` alive around `(cx, cy)`. Cells falling off
    /// the grid are dropped like any other out of range `set_cell`.
    pub fn place(&mut self, pattern: &Pattern, (cx, cy): (isize, isize)) {
        for (dx, dy) in pattern.offsets() {
            self.set_cell(cx + dx, cy + dy, true);
        }
    }
}

impl<const W: usize, const H: usize> Life<W, H> {
    fn cells(&self) -> &Cells<W, H> {
        &self.buffers[self.active]
    }
}

fn index<const W: usize, const H: usize>(x: isize, y: isize) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|&x| x < W)?;
    let y = usize::try_from(y).ok().filter(|&y| y < H)?;
    Some((x, y))
}

fn wrap<const W: usize, const H: usize>(x: isize, y: isize) -> (usize, usize) {
    (
        x.rem_euclid(W as isize) as usize,
        y.rem_euclid(H as isize) as usize,
    )
}

fn neighbourhood() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
}

fn live_neighbours<const W: usize, const H: usize>(
    cells: &Cells<W, H>,
    x: isize,
    y: isize,
) -> usize {
    let (x, y) = wrap::<W, H>(x, y);
    neighbourhood()
        .map(|(dy, dx)| {
            let nx = (x + W).wrapping_add_signed(dx) % W;
            let ny = (y + H).wrapping_add_signed(dy) % H;
            (nx, ny)
        })
        .filter(|&(nx, ny)| cells[ny][nx])
        .count()
}

fn survives(alive: bool, neighbours: usize) -> bool {
    matches!((alive, neighbours), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_rejects_out_of_range() {
        assert_eq!(index::<3, 2>(2, 1), Some((2, 1)));
        assert_eq!(index::<3, 2>(3, 0), None);
        assert_eq!(index::<3, 2>(0, 2), None);
        assert_eq!(index::<3, 2>(-1, 0), None);
        assert_eq!(index::<3, 2>(isize::MIN, isize::MAX), None);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap::<5, 3>(-1, -1), (4, 2));
        assert_eq!(wrap::<5, 3>(5, 3), (0, 0));
        assert_eq!(wrap::<5, 3>(-11, 7), (4, 1));
    }

    #[test]
    fn test_neighbourhood_has_eight_offsets() {
        let offsets = neighbourhood().collect_vec();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all_unique());
    }

    #[test]
    fn test_rules() {
        for neighbours in 0..=8 {
            assert_eq!(survives(true, neighbours), neighbours == 2 || neighbours == 3);
            assert_eq!(survives(false, neighbours), neighbours == 3);
        }
    }
}
