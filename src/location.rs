pub(crate) type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(column, row)` in a forest. The first character of the first line is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Step by `rhs`, given as `(columns, rows)`.
    ///
    /// Stepping off the top or left edge wraps around to a huge coordinate, which never holds a node.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}
