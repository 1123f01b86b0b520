//! The cube on the cubie level and its group operations.
//!
//! A state is four properties of the cube: corner permutation, corner
//! orientation, edge permutation, and edge orientation. `cp[i]` is the corner
//! sitting in position `i` and `co[i]` its twist; likewise for the edges.
//!
//! Corner orientations `0..3` describe ordinary states. Symmetry elements that
//! include a reflection use `3..6`, a twist of `o - 3` in a mirrored cube.

use std::{
    fmt::{self, Display},
    ops::Mul,
};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    defs::{
        CORNER_COLOR, CORNER_COUNT, CORNER_FACELET, Corner, EDGE_COLOR, EDGE_COUNT, EDGE_FACELET,
        Edge,
    },
    facelet::FaceCube,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubieError {
    #[error("Corner {0} appears more than once in the corner permutation")]
    CornerPermutation(Corner),
    #[error("Edge {0} appears more than once in the edge permutation")]
    EdgePermutation(Edge),
    #[error("Invalid orientation {orientation} for the corner at {position}, expected a value below 6")]
    CornerOrientation { position: Corner, orientation: u8 },
    #[error("Invalid orientation {orientation} for the edge at {position}, expected 0 or 1")]
    EdgeOrientation { position: Edge, orientation: u8 },
    #[error("The corner at {0} is mirrored")]
    MirroredCorner(Corner),
    #[error("Total corner twist is {0} modulo 3, expected 0")]
    Twist(u8),
    #[error("Total edge flip is odd")]
    Flip,
    #[error("Corner and edge permutations have different parity")]
    Parity,
}

/// The cube on the cubie level.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CubieCube {
    cp: [Corner; CORNER_COUNT],
    co: [u8; CORNER_COUNT],
    ep: [Edge; EDGE_COUNT],
    eo: [u8; EDGE_COUNT],
}

impl CubieCube {
    /// The solved cube, which is also the identity of the group.
    pub const SOLVED: CubieCube = CubieCube {
        cp: Corner::ALL,
        co: [0; CORNER_COUNT],
        ep: Edge::ALL,
        eo: [0; EDGE_COUNT],
    };

    #[must_use]
    pub const fn solved() -> Self {
        Self::SOLVED
    }

    /// Create a cubie cube, checking that both permutations are bijections and
    /// that the orientations are in range.
    ///
    /// # Errors
    ///
    /// If a piece appears twice, or an orientation is out of range. Twist,
    /// flip and parity are not checked; see [`CubieCube::verify`].
    pub fn new(
        cp: [Corner; CORNER_COUNT],
        co: [u8; CORNER_COUNT],
        ep: [Edge; EDGE_COUNT],
        eo: [u8; EDGE_COUNT],
    ) -> Result<Self, CubieError> {
        if let Some(corner) = first_duplicate(&cp, Corner::index) {
            return Err(CubieError::CornerPermutation(corner));
        }
        if let Some(edge) = first_duplicate(&ep, Edge::index) {
            return Err(CubieError::EdgePermutation(edge));
        }
        if let Some(position) = Corner::ALL.into_iter().find(|c| co[c.index()] >= 6) {
            return Err(CubieError::CornerOrientation {
                position,
                orientation: co[position.index()],
            });
        }
        if let Some(position) = Edge::ALL.into_iter().find(|e| eo[e.index()] >= 2) {
            return Err(CubieError::EdgeOrientation {
                position,
                orientation: eo[position.index()],
            });
        }

        Ok(CubieCube { cp, co, ep, eo })
    }

    /// The caller guarantees that `cp` and `ep` are permutations and the
    /// orientations are in range.
    pub(crate) const fn from_parts_unchecked(
        cp: [Corner; CORNER_COUNT],
        co: [u8; CORNER_COUNT],
        ep: [Edge; EDGE_COUNT],
        eo: [u8; EDGE_COUNT],
    ) -> Self {
        CubieCube { cp, co, ep, eo }
    }

    #[must_use]
    pub fn cp(&self) -> &[Corner; CORNER_COUNT] {
        &self.cp
    }

    #[must_use]
    pub fn co(&self) -> &[u8; CORNER_COUNT] {
        &self.co
    }

    #[must_use]
    pub fn ep(&self) -> &[Edge; EDGE_COUNT] {
        &self.ep
    }

    #[must_use]
    pub fn eo(&self) -> &[u8; EDGE_COUNT] {
        &self.eo
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Paint the pieces onto a facelet cube.
    #[must_use]
    pub fn to_facelet_cube(&self) -> FaceCube {
        let mut face_cube = FaceCube::solved();

        for position in Corner::ALL {
            let i = position.index();
            let colors = CORNER_COLOR[self.cp[i].index()];
            let ori = usize::from(self.co[i]);
            for (k, color) in colors.into_iter().enumerate() {
                face_cube.facelets[CORNER_FACELET[i][(k + ori) % 3].index()] = color;
            }
        }

        for position in Edge::ALL {
            let i = position.index();
            let colors = EDGE_COLOR[self.ep[i].index()];
            let ori = usize::from(self.eo[i]);
            for (k, color) in colors.into_iter().enumerate() {
                face_cube.facelets[EDGE_FACELET[i][(k + ori) % 2].index()] = color;
            }
        }

        face_cube
    }

    /// The product `self * other`: the state reached by performing `self`
    /// on a solved cube and then `other`. Neither operand is modified.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        CubieCube {
            cp: std::array::from_fn(|c| self.cp[other.cp[c].index()]),
            co: std::array::from_fn(|c| {
                compose_corner_orientation(self.co[other.cp[c].index()], other.co[c])
            }),
            ep: std::array::from_fn(|e| self.ep[other.ep[e].index()]),
            eo: std::array::from_fn(|e| (other.eo[e] + self.eo[other.ep[e].index()]) % 2),
        }
    }

    /// The inverse element; `self * self.invert()` is solved.
    #[must_use]
    pub fn invert(&self) -> Self {
        let mut cp = Corner::ALL;
        for (position, corner) in Corner::ALL.into_iter().zip(self.cp) {
            cp[corner.index()] = position;
        }
        let mut ep = Edge::ALL;
        for (position, edge) in Edge::ALL.into_iter().zip(self.ep) {
            ep[edge.index()] = position;
        }

        CubieCube {
            cp,
            co: std::array::from_fn(|c| invert_corner_orientation(self.co[cp[c].index()])),
            ep,
            eo: std::array::from_fn(|e| self.eo[ep[e].index()]),
        }
    }

    /// 0 if the corner permutation is even, 1 if it is odd.
    #[must_use]
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp)
    }

    /// 0 if the edge permutation is even, 1 if it is odd.
    #[must_use]
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep)
    }

    /// Check that the cube can be solved with face turns.
    ///
    /// # Errors
    ///
    /// If a corner is mirrored, the corners are twisted, the edges are
    /// flipped, or the permutation parities differ.
    pub fn verify(&self) -> Result<(), CubieError> {
        if let Some(position) = Corner::ALL.into_iter().find(|c| self.co[c.index()] >= 3) {
            return Err(CubieError::MirroredCorner(position));
        }

        let twist = self.co.iter().sum::<u8>() % 3;
        if twist != 0 {
            return Err(CubieError::Twist(twist));
        }

        if self.eo.iter().sum::<u8>() % 2 != 0 {
            return Err(CubieError::Flip);
        }

        if self.corner_parity() != self.edge_parity() {
            return Err(CubieError::Parity);
        }

        Ok(())
    }

    /// A uniformly random solvable cube.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut cp = Corner::ALL;
        rng.shuffle(&mut cp);
        let mut ep = Edge::ALL;
        rng.shuffle(&mut ep);
        if permutation_parity(&cp) != permutation_parity(&ep) {
            ep.swap(EDGE_COUNT - 2, EDGE_COUNT - 1);
        }

        let mut co = [0; CORNER_COUNT];
        for o in &mut co[..CORNER_COUNT - 1] {
            *o = rng.u8(0..3);
        }
        co[CORNER_COUNT - 1] = (3 - co.iter().sum::<u8>() % 3) % 3;

        let mut eo = [0; EDGE_COUNT];
        for o in &mut eo[..EDGE_COUNT - 1] {
            *o = rng.u8(0..2);
        }
        eo[EDGE_COUNT - 1] = eo.iter().sum::<u8>() % 2;

        CubieCube { cp, co, ep, eo }
    }
}

/// Compose the twist `a` of the left operand with the twist `b` of the right
/// one. A mirrored left operand reverses the direction of `b`.
const fn compose_corner_orientation(a: u8, b: u8) -> u8 {
    match (a < 3, b < 3) {
        (true, true) => (a + b) % 3,
        (true, false) => (a + b) % 3 + 3,
        (false, true) => (a - b) % 3 + 3,
        (false, false) => (a + 3 - b) % 3,
    }
}

const fn invert_corner_orientation(o: u8) -> u8 {
    if o < 3 { (3 - o) % 3 } else { o }
}

fn permutation_parity<T: Ord>(perm: &[T]) -> u8 {
    let inversions = perm
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count();
    u8::from(inversions % 2 == 1)
}

fn first_duplicate<T: Copy>(pieces: &[T], index: impl Fn(T) -> usize) -> Option<T> {
    let mut seen = [false; EDGE_COUNT];
    pieces
        .iter()
        .copied()
        .find(|&piece| std::mem::replace(&mut seen[index(piece)], true))
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Mul for CubieCube {
    type Output = CubieCube;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (corner, o) in self.cp.iter().zip(self.co) {
            write!(f, "({corner},{o})")?;
        }
        for (edge, o) in self.ep.iter().zip(self.eo) {
            write!(f, "({edge},{o})")?;
        }
        Ok(())
    }
}
