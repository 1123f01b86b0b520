//! Cube states on two levels, as 54 colored facelets and as the position and
//! orientation of every corner and edge, along with the conversion between
//! them and the group operations on the cubie level.

#![warn(clippy::pedantic)]

pub mod cubie;
pub mod defs;
pub mod facelet;
pub mod moves;
pub mod scheme;
pub mod symmetry;

pub use cubie::{CubieCube, CubieError};
pub use defs::{Color, Corner, Edge, Facelet, InvalidIndex};
pub use facelet::{FaceCube, FaceletError};
pub use moves::{ALL_MOVES, Direction, Face, Move, MoveParseError, MoveSequence};
pub use scheme::{ColorScheme, SchemeError};
pub use symmetry::{SYM_COUNT, SymmetryTable};
