use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::port::Port;
use crate::port::Port::{DownLeft, DownRight, UpLeft, UpRight};

const ALL: &[Port] = &[UpLeft, UpRight, DownLeft, DownRight];
const UP: &[Port] = &[UpLeft, UpRight];
const DOWN: &[Port] = &[DownLeft, DownRight];
const RISING: &[Port] = &[UpRight, DownLeft];
const FALLING: &[Port] = &[UpLeft, DownRight];
const RIGHT: &[Port] = &[UpRight, DownRight];

/// The letters a forest may be grown from. `B`, `D` and `O` are not part of the alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray, EnumString, IntoStaticStr, Display)]
pub enum Letter {
    /// Ports 3 and 4.
    A,
    /// Ports 2 and 4.
    C,
    /// Ports 2 and 4.
    E,
    /// Ports 2 and 3.
    F,
    /// Port 2.
    G,
    /// All four ports.
    H,
    /// All four ports.
    I,
    /// Ports 1 and 3.
    J,
    /// All four ports.
    K,
    /// Ports 1 and 4.
    L,
    /// Ports 3 and 4.
    M,
    /// Ports 2 and 3.
    N,
    /// Port 3.
    P,
    /// Port 4.
    Q,
    /// Ports 3 and 4.
    R,
    /// Ports 2 and 3.
    S,
    /// Ports 1 and 2.
    T,
    /// Ports 1 and 2.
    U,
    /// Ports 1 and 2.
    V,
    /// Ports 1 and 2.
    W,
    /// All four ports.
    X,
    /// Ports 1 and 2.
    Y,
    /// Ports 1 and 4.
    Z,
}

impl Letter {
    /// The ports this letter's shape exposes, in ascending order.
    pub fn ports(self) -> &'static [Port] {
        match self {
            Self::H | Self::I | Self::K | Self::X => ALL,
            Self::A | Self::M | Self::R => DOWN,
            Self::C | Self::E => RIGHT,
            Self::F | Self::N | Self::S => RISING,
            Self::L | Self::Z => FALLING,
            Self::T | Self::U | Self::V | Self::W | Self::Y => UP,
            Self::G => &[UpRight],
            Self::J => &[UpLeft, DownLeft],
            Self::P => &[DownLeft],
            Self::Q => &[DownRight],
        }
    }

    /// Whether this letter has a connector on `port`.
    pub fn exposes(self, port: Port) -> bool {
        self.ports().contains(&port)
    }

    /// The character this letter is written as in a grid.
    pub fn as_char(self) -> char {
        let name: &'static str = self.into();
        char::from(name.as_bytes()[0])
    }
}

impl TryFrom<char> for Letter {
    type Error = strum::ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_str(value.encode_utf8(&mut [0; 4]))
    }
}
