use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured character set.
pub const CHARSET_ENV: &str = "NUMCODE_CHARSET";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
/// Persisted CLI settings.
pub struct Settings {
    /// Character set used when `--charset` is not given.
    pub charset: Option<String>,
    /// Default for `decode --zero-fill`.
    pub zero_fill: Option<bool>,
}

impl Settings {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing or blank file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => load_from(path),
            None => config_path().map_or_else(|| Ok(Self::default()), |path| load_from(&path)),
        }
    }

    /// Character set by precedence: flag, environment, file.
    pub fn resolve_charset(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| {
            std::env::var(CHARSET_ENV)
                .ok()
                .filter(|value| !value.is_empty())
        })
        .or_else(|| self.charset.clone())
    }
}

/// Parse one settings file.
fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }
    toml::from_str(&raw).map_err(|source| CliError::Config {
        path: path.display().to_string(),
        source,
    })
}

/// Default settings location, `None` when the home directory is unknown.
pub fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let base = std::env::var_os("APPDATA")?;
        let mut path = PathBuf::from(base);
        path.push("numcode");
        path.push("config.toml");
        Some(path)
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var_os("HOME")?;
        let mut path = PathBuf::from(home);
        path.push(".numcode");
        path.push("config.toml");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_load() {
        let temp = std::env::temp_dir().join("numcode_settings_test.toml");
        let _ = fs::remove_file(&temp);
        let write_result = fs::write(&temp, "charset = \"0123456789ABCDEF\"\nzero_fill = true\n");
        assert!(write_result.is_ok());
        let loaded_result = Settings::load(Some(&temp));
        assert!(loaded_result.is_ok());
        if let Ok(loaded) = loaded_result {
            assert_eq!(loaded.charset.as_deref(), Some("0123456789ABCDEF"));
            assert_eq!(loaded.zero_fill, Some(true));
        }
        let _ = fs::remove_file(&temp);
    }

    #[test]
    fn missing_file_is_default() {
        let temp = std::env::temp_dir().join("numcode_settings_missing.toml");
        let _ = fs::remove_file(&temp);
        let loaded_result = Settings::load(Some(&temp));
        assert!(matches!(loaded_result, Ok(Settings { charset: None, zero_fill: None })));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let temp = std::env::temp_dir().join("numcode_settings_unknown.toml");
        let write_result = fs::write(&temp, "charsets = \"abc\"\n");
        assert!(write_result.is_ok());
        assert!(matches!(Settings::load(Some(&temp)), Err(CliError::Config { .. })));
        let _ = fs::remove_file(&temp);
    }

    #[test]
    fn flag_wins_over_file() {
        let settings = Settings {
            charset: Some("FILE".to_string()),
            zero_fill: None,
        };
        assert_eq!(
            settings.resolve_charset(Some("FLAG".to_string())).as_deref(),
            Some("FLAG")
        );
    }
}
