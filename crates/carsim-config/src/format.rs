//! File formats.

use std::path::Path;

use carsim_errors::ConfigError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialization format of a configuration or script file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension (`.yaml`, `.yml`, `.json`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Deserialize `content`. Parse failures are reported against `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed.
    pub fn deserialize<T: DeserializeOwned>(self, content: &str, path: &Path) -> Result<T, ConfigError> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Read and deserialize a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`], [`ConfigError::UnsupportedFormat`] or
    /// [`ConfigError::Parse`].
    pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let format = Self::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        format.deserialize(&content, path)
    }

    /// Serialize a value for display.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the value cannot be represented.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        let rendered = match self {
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| ConfigError::Parse {
            path: "<render>".into(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml"))?, ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML"))?, ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("dir/a.json"))?, ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.toml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ConfigFormat::from_path(Path::new("noext")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        Ok(())
    }

    #[test]
    fn test_parse_error_names_path() {
        let result: Result<Vec<u32>, _> = ConfigFormat::Json.deserialize("[1,", Path::new("x.json"));
        match result {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, Path::new("x.json")),
            other => assert!(matches!(other, Err(ConfigError::Parse { .. })), "{other:?}"),
        }
    }
}
