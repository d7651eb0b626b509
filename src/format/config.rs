//! Formatter configuration.
//!
//! ```toml
//! format = "csv"
//! column_formats = ["%s", "%d", "%0.2f"]
//! upper_headers = true
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which formatter to build and how to decorate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Registered format name (`text`, `csv`, `html`)
    pub format: String,
    /// One printf-style specifier per column; absent or empty means none
    pub column_formats: Option<Vec<String>>,
    /// Upper-case every heading
    pub upper_headers: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            column_formats: None,
            upper_headers: false,
        }
    }
}

impl FormatConfig {
    /// Configuration for a plain formatter.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    /// Set per-column format specifiers.
    pub fn with_column_formats<S: Into<String>>(
        mut self,
        formats: impl IntoIterator<Item = S>,
    ) -> Self {
        self.column_formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    /// Upper-case headings.
    pub fn with_upper_headers(mut self, upper: bool) -> Self {
        self.upper_headers = upper;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnknownExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FormatConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormatConfig::default());
        assert_eq!(config.format, "text");
        assert!(config.column_formats.is_none());
        assert!(!config.upper_headers);
    }

    #[test]
    fn test_toml() {
        let config = FormatConfig::from_toml_str(
            "format = \"csv\"\ncolumn_formats = [\"%s\", \"%d\", \"%0.2f\"]\nupper_headers = true\n",
        )
        .unwrap();
        assert_eq!(
            config,
            FormatConfig::new("csv")
                .with_column_formats(["%s", "%d", "%0.2f"])
                .with_upper_headers(true)
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = FormatConfig::new("html").with_upper_headers(true);
        let json = config.to_json().unwrap();
        assert_eq!(FormatConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "format = \"html\"").unwrap();
        assert_eq!(FormatConfig::load(file.path()).unwrap().format, "html");

        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            FormatConfig::load(file.path()),
            Err(ConfigError::UnknownExtension { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            FormatConfig::from_toml_str("upper_headers = \"yes\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
