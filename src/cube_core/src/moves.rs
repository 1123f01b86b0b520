//! Face turns and sequences of them.

use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    cubie::CubieCube,
    defs::{Corner, Edge, indexed_enum},
};

indexed_enum!(
    /// The six faces that can be turned.
    Face, "face", 6;
    U, R, F, D, L, B,
);

/// Which way to turn a face. `Prime` is a counter-clockwise quarter turn and
/// `Double` a half turn.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Normal,
    Double,
    Prime,
}

impl Direction {
    /// Number of clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Normal => 1,
            Direction::Double => 2,
            Direction::Prime => 3,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown face in move {0:?}")]
    UnknownFace(String),
    #[error("Unknown turn amount in move {0:?}")]
    UnknownDirection(String),
}

/// A face equipped with a direction.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub face: Face,
    pub dir: Direction,
}

/// All 18 face turns, grouped by face.
pub const ALL_MOVES: [Move; 18] = {
    let mut moves = [Move::new(Face::U, Direction::Normal); 18];
    let mut i = 0;
    while i < 18 {
        let dir = match i % 3 {
            0 => Direction::Normal,
            1 => Direction::Double,
            _ => Direction::Prime,
        };
        moves[i] = Move::new(Face::ALL[i / 3], dir);
        i += 1;
    }
    moves
};

impl Move {
    #[must_use]
    pub const fn new(face: Face, dir: Direction) -> Self {
        Self { face, dir }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            dir: self.dir.inverse(),
        }
    }

    /// The cubie cube reached by performing this move on a solved cube.
    #[must_use]
    pub fn cubie_cube(self) -> CubieCube {
        let quarter = &BASIC_MOVES[self.face.index()];
        (0..self.dir.quarter_turns()).fold(CubieCube::SOLVED, |acc, _| acc.multiply(quarter))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            None => return Err(MoveParseError::Empty),
            Some(c) => Face::from_name(&s[..c.len_utf8()])
                .ok_or_else(|| MoveParseError::UnknownFace(s.to_owned()))?,
        };
        let dir = match chars.as_str() {
            "" | "1" => Direction::Normal,
            "2" | "2'" => Direction::Double,
            "'" | "3" => Direction::Prime,
            _ => return Err(MoveParseError::UnknownDirection(s.to_owned())),
        };

        Ok(Move::new(face, dir))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.dir)
    }
}

/// A sequence of moves, e.g. a scramble.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn inverse(&self) -> Self {
        MoveSequence(self.iter().rev().map(|m| m.inverse()).collect())
    }

    /// The cubie cube reached by performing the sequence on a solved cube.
    #[must_use]
    pub fn cubie_cube(&self) -> CubieCube {
        CubieCube::SOLVED.apply_moves(self)
    }
}

impl FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map(MoveSequence)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl CubieCube {
    #[must_use]
    pub fn apply_move(&self, m: Move) -> Self {
        self.multiply(&m.cubie_cube())
    }

    /// Applies a sequence of moves, in order.
    #[must_use]
    pub fn apply_moves(&self, moves: &MoveSequence) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }
}

/// Clockwise quarter turns of each face, in `Face` order.
const BASIC_MOVES: [CubieCube; 6] = {
    use Corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use Edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    [
        CubieCube::from_parts_unchecked(
            [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
            [0; 8],
            [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
            [0; 12],
        ),
        CubieCube::from_parts_unchecked(
            [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
            [2, 0, 0, 1, 1, 0, 0, 2],
            [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
            [0; 12],
        ),
        CubieCube::from_parts_unchecked(
            [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
            [1, 2, 0, 0, 2, 1, 0, 0],
            [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
            [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
        ),
        CubieCube::from_parts_unchecked(
            [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
            [0; 8],
            [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
            [0; 12],
        ),
        CubieCube::from_parts_unchecked(
            [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
            [0, 1, 2, 0, 0, 2, 1, 0],
            [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
            [0; 12],
        ),
        CubieCube::from_parts_unchecked(
            [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
            [0, 0, 1, 2, 0, 0, 2, 1],
            [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
            [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
        ),
    ]
};
