/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

/// Converts `(x, y)` coordinates into a row-major `ndarray` index.
///
/// Boards are stored with shape `(height, width)`, so the backing slice is
/// ordered `y * width + x`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const SURROUNDING: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds neighbours of a cell, either all eight or only the four orthogonal ones.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(i8, i8)],
    index: u8,
}

impl NeighborIter {
    pub fn surrounding(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &SURROUNDING)
    }

    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ORTHOGONAL)
    }

    fn new(center: Coord2, bounds: Coord2, deltas: &'static [(i8, i8)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_skips_out_of_bounds() {
        let corner: Vec<_> = NeighborIter::surrounding((0, 0), (10, 10)).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1), (1, 1)]);

        let middle = NeighborIter::surrounding((5, 5), (10, 10)).count();
        assert_eq!(middle, 8);

        let far_corner = NeighborIter::surrounding((9, 9), (10, 10)).count();
        assert_eq!(far_corner, 3);
    }

    #[test]
    fn orthogonal_yields_only_edge_neighbours() {
        let edge: Vec<_> = NeighborIter::orthogonal((0, 4), (10, 10)).collect();
        assert_eq!(edge, vec![(1, 4), (0, 3), (0, 5)]);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 7).to_nd_index(), [7, 3]);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(10, 12), 120);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
