// crates/infra/src/persistence/settings_reader.rs
use std::path::Path;

use log::debug;
use row_index_filter_domain::FilterSettings;
use row_index_filter_shared_kernel::{InfraResult, InfrastructureError};

use super::FileReader;

/// Settings file formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl SettingsFormat {
    fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads [`FilterSettings`] from JSON (or YAML with the `yaml` feature) files.
pub struct SettingsReader;

impl SettingsReader {
    pub fn load(path: &Path) -> InfraResult<FilterSettings> {
        let format = SettingsFormat::detect(path).ok_or_else(|| InfrastructureError::UnsupportedSettingsFormat {
            path: path.to_path_buf(),
        })?;
        let text = FileReader::read_to_string(path)?;
        let settings = match format {
            SettingsFormat::Json => Self::from_json(&text)?,
            #[cfg(feature = "yaml")]
            SettingsFormat::Yaml => Self::from_yaml(&text)?,
        };
        debug!("loaded filter settings from {}: {settings:?}", path.display());
        Ok(settings)
    }

    pub fn from_json(text: &str) -> InfraResult<FilterSettings> {
        Ok(serde_json::from_str(text)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml(text: &str) -> InfraResult<FilterSettings> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(SettingsFormat::detect(Path::new("a/settings.JSON")), Some(SettingsFormat::Json));
        assert_eq!(SettingsFormat::detect(Path::new("settings.toml")), None);
        assert_eq!(SettingsFormat::detect(Path::new("settings")), None);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn detects_yaml_extensions() {
        assert_eq!(SettingsFormat::detect(Path::new("s.yml")), Some(SettingsFormat::Yaml));
        assert_eq!(SettingsFormat::detect(Path::new("s.yaml")), Some(SettingsFormat::Yaml));
    }

    #[test]
    fn json_errors_name_the_format() {
        let err = SettingsReader::from_json("{ nope").unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON settings"));
    }
}
