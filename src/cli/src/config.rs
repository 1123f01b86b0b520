use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use cube_core::ColorScheme;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from the configuration file.
///
/// ```toml
/// color = true
///
/// [scheme]
/// U = "White"
/// R = "Red"
/// F = "Green"
/// D = "Yellow"
/// L = "Orange"
/// B = "Blue"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Whether to paint the net in color.
    pub color: bool,
    /// Names of the colors accepted by `cube colors` and used to paint the net.
    pub scheme: ColorScheme,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            color: true,
            scheme: ColorScheme::default(),
        }
    }
}

impl CliConfig {
    /// `<config dir>/cube/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cube").join("config.toml"))
    }

    /// Load the configuration at `path`, or at the default location if it
    /// exists, or fall back to the defaults.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match CliConfig::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file, using the defaults");
                    return Ok(CliConfig::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read the configuration file {}", path.display()))?;
        let config = CliConfig::parse(&text)
            .wrap_err_with(|| format!("Failed to parse the configuration file {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use cube_core::Color;

    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn full_file() {
        let config = CliConfig::parse(
            r#"
            color = false

            [scheme]
            U = "White"
            R = "Red"
            F = "Green"
            D = "Yellow"
            L = "Orange"
            B = "Blue"
            "#,
        )
        .unwrap();

        assert!(!config.color);
        assert_eq!(config.scheme.name(Color::F), "Green");
        assert_eq!(config.scheme.color_of("Yellow"), Some(Color::D));
    }

    #[test]
    fn invalid_scheme_is_rejected() {
        let err = CliConfig::parse(
            r#"
            [scheme]
            U = "White"
            R = "Red"
            F = "Red"
            D = "Yellow"
            L = "Orange"
            B = "Blue"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Red"), "{err}");

        assert!(CliConfig::parse("[scheme]\nU = \"White\"").is_err());
    }

    #[test]
    fn round_trip() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::parse(&text).unwrap(), config);
    }
}
