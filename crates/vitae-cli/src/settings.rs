//! Configuration settings
//!
//! Settings are read from `vitae.toml` (or the file given with `--config`):
//!
//! ```toml
//! [input]
//! path = "data/user_data.json"
//!
//! [output]
//! dir = "output"
//!
//! [pdf]
//! fonts = ["fonts/Inter-Regular.ttf", "fonts/Inter-Bold.ttf"]
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "vitae.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub output: OutputSettings,
    pub pdf: PdfSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from `config_path`, or from `vitae.toml` if it exists
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::read(path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Where the profile is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub path: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/user_data.json"),
        }
    }
}

/// Where the PDF is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(vitae_pdf::DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Typesetting options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PdfSettings {
    /// Font files to load (TTF/OTF)
    pub fonts: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.input.path, PathBuf::from("data/user_data.json"));
        assert_eq!(settings.output.dir, PathBuf::from("output"));
        assert!(settings.pdf.fonts.is_empty());
    }

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[input]
path = "profiles/jane.json"

[pdf]
fonts = ["fonts/Inter.ttf"]
"#;
        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.input.path, PathBuf::from("profiles/jane.json"));
        // unspecified sections keep defaults
        assert_eq!(settings.output.dir, PathBuf::from("output"));
        assert_eq!(settings.pdf.fonts, vec![PathBuf::from("fonts/Inter.ttf")]);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Settings::from_toml_str("[output]\ndir = 42").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = Settings::load(Some(Path::new("no/such/vitae.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
