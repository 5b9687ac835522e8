use itertools::Itertools;

/// Live cells as `(dx, dy)` offsets from an anchor, kept in row-major order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<(isize, isize)>,
}

impl Pattern {
    pub fn glider() -> Self {
        [(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)]
            .into_iter()
            .collect()
    }

    pub fn blinker() -> Self {
        [(-1, 0), (0, 0), (1, 0)].into_iter().collect()
    }

    pub fn block() -> Self {
        [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect()
    }

    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.offsets.iter().copied()
    }
}

impl FromIterator<(isize, isize)> for Pattern {
    fn from_iter<T: IntoIterator<Item = (isize, isize)>>(iter: T) -> Self {
        let offsets = iter
            .into_iter()
            .sorted_by_key(|&(x, y)| (y, x))
            .dedup()
            .collect();
        Self { offsets }
    }
}
