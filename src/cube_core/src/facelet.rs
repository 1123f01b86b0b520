//! The cube as 54 colored facelets.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use log::trace;
use thiserror::Error;

use crate::{
    cubie::CubieCube,
    defs::{
        CORNER_COLOR, CORNER_COUNT, CORNER_FACELET, Color, Corner, EDGE_COLOR, EDGE_COUNT,
        EDGE_FACELET, Edge, FACELET_COUNT, Facelet,
    },
    scheme::ColorScheme,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("A cube definition must contain exactly {FACELET_COUNT} facelets, got {0}")]
    Length(usize),
    #[error("A cube definition must contain exactly 9 facelets of each color, {color} appears {count} times")]
    ColorCount { color: Color, count: usize },
    #[error("Invalid color {0:?}")]
    InvalidColor(String),
    #[error("The facelets at corner position {0} do not form a corner")]
    CornerDecode(Corner),
    #[error("The facelets at edge position {0} do not form an edge")]
    EdgeDecode(Edge),
    #[error("Corner {0} appears more than once")]
    DuplicateCorner(Corner),
    #[error("Edge {0} appears more than once")]
    DuplicateEdge(Edge),
}

/// The cube on the facelet level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCube {
    pub(crate) facelets: [Color; FACELET_COUNT],
}

impl FaceCube {
    #[must_use]
    pub fn solved() -> Self {
        FaceCube {
            facelets: std::array::from_fn(|i| Color::ALL[i / 9]),
        }
    }

    /// Create a facelet cube from the color of every facelet.
    ///
    /// # Errors
    ///
    /// If some color does not appear exactly nine times.
    pub fn from_facelets(facelets: [Color; FACELET_COUNT]) -> Result<Self, FaceletError> {
        let mut counts = [0; 6];
        for color in facelets {
            counts[color.index()] += 1;
        }

        match Color::ALL
            .into_iter()
            .find(|color| counts[color.index()] != 9)
        {
            Some(color) => Err(FaceletError::ColorCount {
                color,
                count: counts[color.index()],
            }),
            None => Ok(FaceCube { facelets }),
        }
    }

    /// Create a facelet cube from 54 tokens of an external color alphabet.
    ///
    /// # Errors
    ///
    /// If a token is not a name in `scheme`, or the tokens do not describe
    /// exactly nine facelets of each color.
    pub fn from_colors<I, S>(tokens: I, scheme: &ColorScheme) -> Result<Self, FaceletError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let facelets = tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                scheme
                    .color_of(token)
                    .map(Color::as_char)
                    .ok_or_else(|| FaceletError::InvalidColor(token.to_owned()))
            })
            .collect::<Result<String, _>>()?;

        facelets.parse()
    }

    #[must_use]
    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// The facelets laid out as an unfolded cube.
    #[must_use]
    pub fn to_2d_string(&self) -> String {
        let s = self.to_string();
        let row = |face: Color, r: usize| {
            let start = face.index() * 9 + r * 3;
            &s[start..start + 3]
        };

        let mut out = String::with_capacity(6 * 7 + 3 * 13);
        for r in 0..3 {
            out.push_str("   ");
            out.push_str(row(Color::U, r));
            out.push('\n');
        }
        for r in 0..3 {
            for face in [Color::L, Color::F, Color::R, Color::B] {
                out.push_str(row(face, r));
            }
            out.push('\n');
        }
        for r in 0..3 {
            out.push_str("   ");
            out.push_str(row(Color::D, r));
            out.push('\n');
        }
        out
    }

    /// Recover the pieces from the colors.
    ///
    /// # Errors
    ///
    /// If some corner or edge position holds colors that do not belong to any
    /// piece, or a piece shows up twice.
    pub fn to_cubie_cube(&self) -> Result<CubieCube, FaceletError> {
        let mut cp = [Corner::URF; CORNER_COUNT];
        let mut co = [0; CORNER_COUNT];
        let mut seen_corners = [false; CORNER_COUNT];

        for position in Corner::ALL {
            let facelets = CORNER_FACELET[position.index()];
            let ori = (0..3)
                .find(|&k| matches!(self[facelets[usize::from(k)]], Color::U | Color::D))
                .ok_or(FaceletError::CornerDecode(position))?;
            let colors: [Color; 3] =
                std::array::from_fn(|k| self[facelets[(usize::from(ori) + k) % 3]]);
            let corner = Corner::ALL
                .into_iter()
                .find(|corner| CORNER_COLOR[corner.index()] == colors)
                .ok_or(FaceletError::CornerDecode(position))?;

            if std::mem::replace(&mut seen_corners[corner.index()], true) {
                return Err(FaceletError::DuplicateCorner(corner));
            }
            cp[position.index()] = corner;
            co[position.index()] = ori;
        }

        let mut ep = [Edge::UR; EDGE_COUNT];
        let mut eo = [0; EDGE_COUNT];
        let mut seen_edges = [false; EDGE_COUNT];

        for position in Edge::ALL {
            let colors = EDGE_FACELET[position.index()].map(|facelet| self[facelet]);
            let (edge, ori) = Edge::ALL
                .into_iter()
                .find_map(|edge| {
                    let [a, b] = EDGE_COLOR[edge.index()];
                    if colors == [a, b] {
                        Some((edge, 0))
                    } else if colors == [b, a] {
                        Some((edge, 1))
                    } else {
                        None
                    }
                })
                .ok_or(FaceletError::EdgeDecode(position))?;

            if std::mem::replace(&mut seen_edges[edge.index()], true) {
                return Err(FaceletError::DuplicateEdge(edge));
            }
            ep[position.index()] = edge;
            eo[position.index()] = ori;
        }

        let cubie_cube = CubieCube::from_parts_unchecked(cp, co, ep, eo);
        trace!("Decoded {self} into {cubie_cube}");
        Ok(cubie_cube)
    }
}

impl Default for FaceCube {
    fn default() -> Self {
        FaceCube::solved()
    }
}

impl Index<Facelet> for FaceCube {
    type Output = Color;

    fn index(&self, index: Facelet) -> &Self::Output {
        &self.facelets[index.index()]
    }
}

impl FromStr for FaceCube {
    type Err = FaceletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != FACELET_COUNT {
            return Err(FaceletError::Length(len));
        }

        let mut facelets = [Color::U; FACELET_COUNT];
        for (facelet, c) in facelets.iter_mut().zip(s.chars()) {
            *facelet = Color::from_char(c).ok_or_else(|| FaceletError::InvalidColor(c.into()))?;
        }

        FaceCube::from_facelets(facelets)
    }
}

impl Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.facelets {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
    const SUPERFLIP: &str = "UBULURUFURURFRBRDRFUFLFRFDFDFDLDRDBDLULBLFLDLBUBRBLBDB";

    #[test]
    fn solved_round_trip() {
        assert_eq!(FaceCube::solved().to_string(), SOLVED);
        assert_eq!(SOLVED.parse::<FaceCube>().unwrap(), FaceCube::solved());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            SOLVED[1..].parse::<FaceCube>(),
            Err(FaceletError::Length(53))
        );
        assert_eq!(
            format!("{SOLVED}U").parse::<FaceCube>(),
            Err(FaceletError::Length(55))
        );

        let mut ten_u = SOLVED.to_owned();
        ten_u.replace_range(9..10, "U");
        assert_eq!(
            ten_u.parse::<FaceCube>(),
            Err(FaceletError::ColorCount {
                color: Color::U,
                count: 10
            })
        );

        let mut bad = SOLVED.to_owned();
        bad.replace_range(0..1, "X");
        assert_eq!(
            bad.parse::<FaceCube>(),
            Err(FaceletError::InvalidColor("X".to_owned()))
        );
    }

    #[test]
    fn render_is_inverse_of_parse() {
        let cube = SUPERFLIP.parse::<FaceCube>().unwrap();
        assert_eq!(cube.to_string(), SUPERFLIP);
    }

    #[test]
    fn cross_layout() {
        let expected = "   UUU\n   UUU\n   UUU\n\
                        LLLFFFRRRBBB\nLLLFFFRRRBBB\nLLLFFFRRRBBB\n\
                        \x20  DDD\n   DDD\n   DDD\n";
        assert_eq!(FaceCube::solved().to_2d_string(), expected);

        let cube = SUPERFLIP.parse::<FaceCube>().unwrap();
        let lines = cube.to_2d_string();
        let lines = lines.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "   UBU");
        assert_eq!(lines[3], "LULFUFRURBUB");
        assert_eq!(lines[8], "   DBD");
    }

    #[test]
    fn alternate_alphabet() {
        let scheme = ColorScheme::default();
        let tokens = SOLVED
            .chars()
            .map(|c| scheme.name(Color::from_char(c).unwrap()).to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            FaceCube::from_colors(&tokens, &scheme).unwrap(),
            FaceCube::solved()
        );

        let mut bad = tokens.clone();
        bad[4] = "Purple".to_owned();
        assert_eq!(
            FaceCube::from_colors(&bad, &scheme),
            Err(FaceletError::InvalidColor("Purple".to_owned()))
        );

        assert_eq!(
            FaceCube::from_colors(&tokens[..53], &scheme),
            Err(FaceletError::Length(53))
        );
    }

    #[test]
    fn solved_decodes_to_identity() {
        let cubie_cube = FaceCube::solved().to_cubie_cube().unwrap();
        assert_eq!(cubie_cube, CubieCube::SOLVED);
        assert_eq!(cubie_cube.to_facelet_cube(), FaceCube::solved());
    }

    #[test]
    fn superflip_decodes_to_flipped_edges() {
        let cubie_cube = SUPERFLIP.parse::<FaceCube>().unwrap().to_cubie_cube().unwrap();
        assert_eq!(cubie_cube.cp(), &Corner::ALL);
        assert_eq!(cubie_cube.co(), &[0; CORNER_COUNT]);
        assert_eq!(cubie_cube.ep(), &Edge::ALL);
        assert_eq!(cubie_cube.eo(), &[1; EDGE_COUNT]);
    }

    #[test]
    fn decode_errors() {
        // A corner showing U twice
        let mut facelets = *FaceCube::solved().facelets();
        facelets.swap(Facelet::on(Color::R, 1).index(), Facelet::on(Color::U, 1).index());
        facelets.swap(Facelet::on(Color::U, 1).index(), Facelet::on(Color::U, 5).index());
        let cube = FaceCube { facelets };
        assert!(matches!(
            cube.to_cubie_cube(),
            Err(FaceletError::CornerDecode(_))
        ));

        // A corner without a U or D sticker
        let mut facelets = *FaceCube::solved().facelets();
        facelets[Facelet::on(Color::U, 9).index()] = Color::F;
        let cube = FaceCube { facelets };
        assert_eq!(
            cube.to_cubie_cube(),
            Err(FaceletError::CornerDecode(Corner::URF))
        );

        // UR edge showing U on both facelets
        let mut facelets = *FaceCube::solved().facelets();
        facelets[Facelet::on(Color::R, 2).index()] = Color::U;
        facelets[Facelet::on(Color::U, 5).index()] = Color::R;
        let cube = FaceCube::from_facelets(facelets).unwrap();
        assert_eq!(
            cube.to_cubie_cube(),
            Err(FaceletError::EdgeDecode(Edge::UR))
        );
    }

    #[test]
    fn pieces_decoded_twice() {
        // URF painted as UFL, with the L center repainted to keep nine of each
        let mut facelets = *FaceCube::solved().facelets();
        facelets[Facelet::on(Color::R, 1).index()] = Color::F;
        facelets[Facelet::on(Color::F, 3).index()] = Color::L;
        facelets[Facelet::on(Color::L, 5).index()] = Color::R;
        let cube = FaceCube::from_facelets(facelets).unwrap();
        assert_eq!(
            cube.to_cubie_cube(),
            Err(FaceletError::DuplicateCorner(Corner::UFL))
        );

        // UF painted as UR and the R sticker of FR as F
        let mut facelets = *FaceCube::solved().facelets();
        facelets[Facelet::on(Color::F, 2).index()] = Color::R;
        facelets[Facelet::on(Color::R, 4).index()] = Color::F;
        let cube = FaceCube::from_facelets(facelets).unwrap();
        assert_eq!(
            cube.to_cubie_cube(),
            Err(FaceletError::DuplicateEdge(Edge::UR))
        );
    }
}
