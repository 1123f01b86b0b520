//! The 48 symmetries of the cube and symmetry classification of states.
//!
//! Symmetry `j` is built from four basic symmetries as
//! `ROT_URF3^a * ROT_F2^b * ROT_U4^c * MIRR_LR2^d` with
//! `j = 16a + 8b + 2c + d`, so odd indices are exactly the mirrored ones.

use std::sync::LazyLock;

use log::debug;

use crate::{
    cubie::CubieCube,
    defs::{Corner, Edge},
};

/// Number of symmetries of the cube, reflections included.
pub const SYM_COUNT: usize = 48;

/// 120° clockwise turn of the whole cube around the URF-DBL diagonal.
pub const ROT_URF3: CubieCube = {
    use Corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use Edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    CubieCube::from_parts_unchecked(
        [URF, DFR, DLF, UFL, UBR, DRB, DBL, ULB],
        [1, 2, 1, 2, 2, 1, 2, 1],
        [UF, FR, DF, FL, UB, BR, DB, BL, UR, DR, DL, UL],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
    )
};

/// Half turn of the whole cube around the F-B axis.
pub const ROT_F2: CubieCube = {
    use Corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use Edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    CubieCube::from_parts_unchecked(
        [DLF, DFR, DRB, DBL, UFL, URF, UBR, ULB],
        [0; 8],
        [DL, DF, DR, DB, UL, UF, UR, UB, FL, FR, BR, BL],
        [0; 12],
    )
};

/// Quarter turn of the whole cube around the U-D axis.
pub const ROT_U4: CubieCube = {
    use Corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use Edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    CubieCube::from_parts_unchecked(
        [UBR, URF, UFL, ULB, DRB, DFR, DLF, DBL],
        [0; 8],
        [UB, UR, UF, UL, DB, DR, DF, DL, BR, FR, FL, BL],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
    )
};

/// Reflection in the plane through the U, D, F and B centers.
pub const MIRR_LR2: CubieCube = {
    use Corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use Edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    CubieCube::from_parts_unchecked(
        [UFL, URF, UBR, ULB, DLF, DFR, DRB, DBL],
        [3; 8],
        [UL, UF, UR, UB, DL, DF, DR, DB, FL, FR, BR, BL],
        [0; 12],
    )
};

static SYMMETRY_TABLE: LazyLock<SymmetryTable> = LazyLock::new(SymmetryTable::generate);

/// Every symmetry of the cube as a cubie cube, along with the index of each
/// one's inverse.
#[derive(Debug, Clone)]
pub struct SymmetryTable {
    cubes: [CubieCube; SYM_COUNT],
    inv_idx: [usize; SYM_COUNT],
}

impl SymmetryTable {
    /// Build the table from the four basic symmetries.
    ///
    /// # Panics
    ///
    /// If the basic symmetries do not generate a group.
    #[must_use]
    pub fn generate() -> Self {
        let mut cubes = [CubieCube::SOLVED; SYM_COUNT];

        let mut cc = CubieCube::SOLVED;
        let mut idx = 0;
        for _urf3 in 0..3 {
            for _f2 in 0..2 {
                for _u4 in 0..4 {
                    for _lr2 in 0..2 {
                        cubes[idx] = cc;
                        idx += 1;
                        cc = cc * MIRR_LR2;
                    }
                    cc = cc * ROT_U4;
                }
                cc = cc * ROT_F2;
            }
            cc = cc * ROT_URF3;
        }

        let mut inv_idx = [0; SYM_COUNT];
        for (j, cube) in cubes.iter().enumerate() {
            inv_idx[j] = cubes
                .iter()
                .position(|other| cube.multiply(other).is_solved())
                .expect("every symmetry has an inverse in the table");
        }

        debug!("Generated the table of {SYM_COUNT} symmetries");

        SymmetryTable { cubes, inv_idx }
    }

    /// The process wide table, generated on first use.
    #[must_use]
    pub fn get() -> &'static SymmetryTable {
        &SYMMETRY_TABLE
    }

    #[must_use]
    pub fn cube(&self, j: usize) -> &CubieCube {
        &self.cubes[j]
    }

    #[must_use]
    pub fn cubes(&self) -> &[CubieCube; SYM_COUNT] {
        &self.cubes
    }

    /// The index `i` with `cube(j) * cube(i)` solved.
    #[must_use]
    pub fn inverse_index(&self, j: usize) -> usize {
        self.inv_idx[j]
    }

    /// `S_j * cube * S_j^-1`
    #[must_use]
    pub fn conjugate(&self, j: usize, cube: &CubieCube) -> CubieCube {
        self.cubes[j]
            .multiply(cube)
            .multiply(&self.cubes[self.inv_idx[j]])
    }

    /// Whether symmetry `j` includes a reflection.
    #[must_use]
    pub const fn is_mirror(j: usize) -> bool {
        j % 2 == 1
    }
}

impl CubieCube {
    /// The symmetries of this state, in increasing order.
    ///
    /// `j < 48` is included when conjugating by symmetry `j` gives back this
    /// state, and `j + 48` when the conjugate is this state's inverse.
    #[must_use]
    pub fn symmetries(&self, table: &SymmetryTable) -> Vec<usize> {
        let mut symmetric = Vec::new();
        let mut antisymmetric = Vec::new();

        for j in 0..SYM_COUNT {
            let c = table.conjugate(j, self);
            if c == *self {
                symmetric.push(j);
            }
            if c.invert() == *self {
                antisymmetric.push(j + SYM_COUNT);
            }
        }

        symmetric.extend(antisymmetric);
        symmetric
    }
}
