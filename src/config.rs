//! User settings loaded from `config.toml`.

use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `[10, 20, 30]`
    #[default]
    List,
    /// One value per line.
    Lines,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output: OutputStyle,
    pub require_csv_extension: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output: OutputStyle::List,
            require_csv_extension: true,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> anyhow::Result<Settings> {
        Ok(toml::from_str(content)?)
    }
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "flatcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load settings from an explicit file (errors are fatal) or from the default
/// location (errors become warnings and defaults are used).
pub fn load_settings(explicit: Option<&Path>) -> (anyhow::Result<Settings>, Vec<String>) {
    let mut warnings = Vec::new();

    if let Some(path) = explicit {
        return (read_settings(path), warnings);
    }

    let Some(path) = default_config_path() else {
        return (Ok(Settings::default()), warnings);
    };
    if !path.exists() {
        return (Ok(Settings::default()), warnings);
    }
    match read_settings(&path) {
        Ok(settings) => (Ok(settings), warnings),
        Err(err) => {
            warnings.push(format!("{:#}; using default settings", err));
            (Ok(Settings::default()), warnings)
        }
    }
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        bail!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Settings::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.require_csv_extension);
        assert_eq!(settings.output, OutputStyle::List);
    }

    #[test]
    fn test_parse_all_fields() {
        let settings =
            Settings::from_toml("output = \"lines\"\nrequire_csv_extension = false\n").unwrap();
        assert_eq!(settings.output, OutputStyle::Lines);
        assert!(!settings.require_csv_extension);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Settings::from_toml("colour = true").is_err());
        assert!(Settings::from_toml("output = \"table\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let (settings, warnings) = load_settings(Some(Path::new("/definitely/not/here.toml")));
        assert!(settings.is_err());
        assert!(warnings.is_empty());
    }

    #[test]
    fn default_config_path_is_deterministic() {
        // Should never panic and should either be Some(path) or None.
        let _ = default_config_path();
    }
}
