//! Names and numbering of the cube's colors, facelets and pieces, and the
//! fixed tables tying facelet positions to pieces.
//!
//! Facelets are numbered face by face in the order U, R, F, D, L, B, nine per
//! face, row major as seen when looking straight at the face in the usual
//! net:
//!
//! ```text
//!              |************|
//!              |*U1**U2**U3*|
//!              |************|
//!              |*U4**U5**U6*|
//!              |************|
//!              |*U7**U8**U9*|
//!              |************|
//! |************|************|************|************|
//! |*L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
//! |************|************|************|************|
//! |*L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
//! |************|************|************|************|
//! |*L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
//! |************|************|************|************|
//!              |************|
//!              |*D1**D2**D3*|
//!              |************|
//!              |*D4**D5**D6*|
//!              |************|
//!              |*D7**D8**D9*|
//!              |************|
//! ```

use std::fmt::{self, Display};

use thiserror::Error;

/// Number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Number of corner positions (and corner pieces).
pub const CORNER_COUNT: usize = 8;

/// Number of edge positions (and edge pieces).
pub const EDGE_COUNT: usize = 12;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{index} is not a valid {kind} index")]
pub struct InvalidIndex {
    pub kind: &'static str,
    pub index: u8,
}

/// Declares a fieldless enum whose variants double as array offsets.
macro_rules! indexed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $count:expr;
        $($(#[$variant_meta:meta])* $variant:ident),* $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),*
        }

        impl $name {
            /// Every value, in index order.
            pub const ALL: [Self; $count] = {
                let v = [$(Self::$variant),*];

                let mut i = 0;
                while i < v.len() {
                    assert!(i == v[i] as usize);
                    i += 1;
                }

                v
            };

            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.into_iter().find(|v| v.name() == name)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::defs::InvalidIndex;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::ALL
                    .get(usize::from(value))
                    .copied()
                    .ok_or($crate::defs::InvalidIndex {
                        kind: $kind,
                        index: value,
                    })
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use indexed_enum;

indexed_enum!(
    /// The color of a facelet, named after the face carrying it on a solved
    /// cube.
    Color, "color", 6;
    U, R, F, D, L, B,
);

indexed_enum!(
    /// Corner positions, and the corner pieces that belong in them.
    Corner, "corner", CORNER_COUNT;
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
);

indexed_enum!(
    /// Edge positions, and the edge pieces that belong in them.
    Edge, "edge", EDGE_COUNT;
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
);

impl Color {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Color::U => 'U',
            Color::R => 'R',
            Color::F => 'F',
            Color::D => 'D',
            Color::L => 'L',
            Color::B => 'B',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Color::U),
            'R' => Some(Color::R),
            'F' => Some(Color::F),
            'D' => Some(Color::D),
            'L' => Some(Color::L),
            'B' => Some(Color::B),
            _ => None,
        }
    }
}

/// A facelet position, `0..54`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet(u8);

impl Facelet {
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < FACELET_COUNT {
            Some(Facelet(index))
        } else {
            None
        }
    }

    /// The facelet numbered `n` (`1..=9`) on `face`.
    ///
    /// # Panics
    ///
    /// If `n` is not in `1..=9`.
    #[must_use]
    pub const fn on(face: Color, n: u8) -> Self {
        assert!(n >= 1 && n <= 9);
        Facelet(face as u8 * 9 + n - 1)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The face this facelet lies on.
    #[must_use]
    pub const fn face(self) -> Color {
        Color::ALL[self.0 as usize / 9]
    }
}

impl Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face(), self.0 % 9 + 1)
    }
}

const fn fc(face: Color, n: u8) -> Facelet {
    Facelet::on(face, n)
}

/// The facelets of each corner position, starting with the U or D facelet and
/// going clockwise.
pub const CORNER_FACELET: [[Facelet; 3]; CORNER_COUNT] = {
    use Color::{B, D, F, L, R, U};
    [
        [fc(U, 9), fc(R, 1), fc(F, 3)],
        [fc(U, 7), fc(F, 1), fc(L, 3)],
        [fc(U, 1), fc(L, 1), fc(B, 3)],
        [fc(U, 3), fc(B, 1), fc(R, 3)],
        [fc(D, 3), fc(F, 9), fc(R, 7)],
        [fc(D, 1), fc(L, 9), fc(F, 7)],
        [fc(D, 7), fc(B, 9), fc(L, 7)],
        [fc(D, 9), fc(R, 9), fc(B, 7)],
    ]
};

/// The colors of each corner piece, in the same order as `CORNER_FACELET`.
pub const CORNER_COLOR: [[Color; 3]; CORNER_COUNT] = {
    use Color::{B, D, F, L, R, U};
    [
        [U, R, F],
        [U, F, L],
        [U, L, B],
        [U, B, R],
        [D, F, R],
        [D, L, F],
        [D, B, L],
        [D, R, B],
    ]
};

/// The facelets of each edge position. The first facelet is the one whose
/// color decides the edge's flip.
pub const EDGE_FACELET: [[Facelet; 2]; EDGE_COUNT] = {
    use Color::{B, D, F, L, R, U};
    [
        [fc(U, 6), fc(R, 2)],
        [fc(U, 8), fc(F, 2)],
        [fc(U, 4), fc(L, 2)],
        [fc(U, 2), fc(B, 2)],
        [fc(D, 6), fc(R, 8)],
        [fc(D, 2), fc(F, 8)],
        [fc(D, 4), fc(L, 8)],
        [fc(D, 8), fc(B, 8)],
        [fc(F, 6), fc(R, 4)],
        [fc(F, 4), fc(L, 6)],
        [fc(B, 6), fc(L, 4)],
        [fc(B, 4), fc(R, 6)],
    ]
};

/// The colors of each edge piece, in the same order as `EDGE_FACELET`.
pub const EDGE_COLOR: [[Color; 2]; EDGE_COUNT] = {
    use Color::{B, D, F, L, R, U};
    [
        [U, R],
        [U, F],
        [U, L],
        [U, B],
        [D, R],
        [D, F],
        [D, L],
        [D, B],
        [F, R],
        [F, L],
        [B, L],
        [B, R],
    ]
};
