//! External color alphabets, e.g. the names a camera or a sticker set uses for
//! the six colors.

use thiserror::Error;

use crate::defs::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("The color scheme gives no name for the {0} face")]
    Empty(Color),
    #[error("The color scheme uses the name {name:?} for both the {first} and the {second} face")]
    Duplicate {
        name: String,
        first: Color,
        second: Color,
    },
}

/// Six distinct names, one for each of `U R F D L B`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ColorSchemeRepr", into = "ColorSchemeRepr")
)]
pub struct ColorScheme {
    names: [String; 6],
}

impl ColorScheme {
    /// Create a scheme from the names of `U R F D L B`, in that order.
    ///
    /// # Errors
    ///
    /// If a name is empty or two faces share a name.
    pub fn new(names: [String; 6]) -> Result<Self, SchemeError> {
        for color in Color::ALL {
            let name = &names[color.index()];
            if name.is_empty() {
                return Err(SchemeError::Empty(color));
            }
            if let Some(first) = Color::ALL[..color.index()]
                .iter()
                .copied()
                .find(|other| names[other.index()] == *name)
            {
                return Err(SchemeError::Duplicate {
                    name: name.clone(),
                    first,
                    second: color,
                });
            }
        }

        Ok(ColorScheme { names })
    }

    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        &self.names[color.index()]
    }

    /// The color called `token` in this scheme.
    #[must_use]
    pub fn color_of(&self, token: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.names[color.index()] == token)
    }
}

impl Default for ColorScheme {
    /// Yellow up, red right, blue front, white down, orange left, green back.
    fn default() -> Self {
        ColorScheme {
            names: ["Y", "R", "B", "W", "O", "G"].map(String::from),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[allow(non_snake_case)]
struct ColorSchemeRepr {
    U: String,
    R: String,
    F: String,
    D: String,
    L: String,
    B: String,
}

#[cfg(feature = "serde")]
impl TryFrom<ColorSchemeRepr> for ColorScheme {
    type Error = SchemeError;

    fn try_from(value: ColorSchemeRepr) -> Result<Self, Self::Error> {
        ColorScheme::new([value.U, value.R, value.F, value.D, value.L, value.B])
    }
}

#[cfg(feature = "serde")]
impl From<ColorScheme> for ColorSchemeRepr {
    #[allow(non_snake_case)]
    fn from(value: ColorScheme) -> Self {
        let [U, R, F, D, L, B] = value.names;
        ColorSchemeRepr { U, R, F, D, L, B }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.color_of("Y"), Some(Color::U));
        assert_eq!(scheme.color_of("B"), Some(Color::F));
        assert_eq!(scheme.color_of("G"), Some(Color::B));
        assert_eq!(scheme.color_of("U"), None);
        assert_eq!(scheme.name(Color::D), "W");
    }

    #[test]
    fn rejects_bad_names() {
        let names = ["White", "Red", "Green", "Yellow", "Orange", "Red"].map(String::from);
        assert_eq!(
            ColorScheme::new(names),
            Err(SchemeError::Duplicate {
                name: "Red".to_owned(),
                first: Color::R,
                second: Color::B,
            })
        );

        let names = ["White", "Red", "", "Yellow", "Orange", "Blue"].map(String::from);
        assert_eq!(ColorScheme::new(names), Err(SchemeError::Empty(Color::F)));
    }
}
