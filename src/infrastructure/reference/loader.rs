use std::path::Path;
use tracing::info;

use super::catalog::{ReferenceData, ReferenceFile};
use crate::domain::errors::{ReferenceDataError, ReferenceResult};

/// Loads reference tables from YAML or JSON files.
pub struct ReferenceLoader;

impl ReferenceLoader {
    /// Load and validate a reference file
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn load_from_file(path: impl AsRef<Path>) -> ReferenceResult<ReferenceData> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Self::parse_json(&content)?
        } else {
            Self::parse_yaml(&content)?
        };

        let data = ReferenceData::from_file(file)?;
        info!(
            path = %path.display(),
            series = data.series_count(),
            "reference data loaded"
        );
        Ok(data)
    }

    pub fn parse_yaml(content: &str) -> ReferenceResult<ReferenceFile> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn parse_json(content: &str) -> ReferenceResult<ReferenceFile> {
        Ok(serde_json::from_str(content)?)
    }
}
