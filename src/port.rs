//! The four diagonal directions letters connect through.

use strum::VariantArray;

use crate::location::Location;

/// Offset in `(columns, rows)` reached by leaving a node through port number `direction`.
///
/// Odd directions lean left and even ones right; directions below 3 lean up and the rest down.
pub fn diagonal_offset(direction: u8) -> (isize, isize) {
    (
        1 - (direction % 2) as isize * 2,
        1 - isize::from(direction < 3) * 2,
    )
}

/// One of the four diagonal connectors a letter may expose, numbered 1 through 4.
///
/// Two nodes are joined only when each exposes the port facing the other, see [`Port::invert`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Port {
    /// Port 1, toward the previous column of the previous row.
    UpLeft = 1,
    /// Port 2, toward the next column of the previous row.
    UpRight = 2,
    /// Port 3, toward the previous column of the next row.
    DownLeft = 3,
    /// Port 4, toward the next column of the next row.
    DownRight = 4,
}

impl Port {
    /// The static array of all "forward" ports.
    ///
    /// Stepping through a forward port lands on the next row down, so every link has exactly one forward end.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::DownLeft, Self::DownRight];

    /// The port number, between 1 and 4 inclusive.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Attempt the step from `location` through this port and return the resultant [`Location`].
    pub fn attempt_from(self, location: Location) -> Location {
        location.offset_by(diagonal_offset(self.number()))
    }

    /// The port a neighbour must expose to connect back through `self`, numbered `5 - self`.
    pub fn invert(self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }
}
