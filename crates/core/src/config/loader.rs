//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "atlas.toml";

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed and validated settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, or search the standard locations.
    ///
    /// An explicit path that does not exist is an error. When nothing is found
    /// the defaults are used.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(Error::config_not_found(&p));
                }
                Some(p)
            }
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        schema.validate()?;
        Ok(Self { schema, path: None })
    }
}

/// Find a configuration file in the standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(CONFIG_FILE_NAME),
        PathBuf::from(format!(".{CONFIG_FILE_NAME}")),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("atlas").join(CONFIG_FILE_NAME));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("In {}", path.display()))?;

    schema
        .validate()
        .context(format!("In {}", path.display()))?;

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.browse.items_per_page, 12);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 5\n\n[logging]\njson = true").unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.api.timeout_secs, 5);
        assert!(config.schema.logging.json);
        assert_eq!(config.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(missing.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[browse\nitems_per_page = ").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[browse]\nfuzzy_threshold = -0.5").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml("[browse]\nitems_per_page = 8").unwrap();
        assert_eq!(config.schema.browse.items_per_page, 8);
        assert!(Config::from_toml("[browse]\nitems_per_page = 0").is_err());
    }
}
