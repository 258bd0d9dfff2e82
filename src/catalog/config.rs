//! Catalog loading configuration.

use camino::Utf8PathBuf;
use serde::Deserialize;

/// Default directory holding one sub-directory per agent.
pub const DEFAULT_AGENTS_ROOT: &str = "agents";

/// Default name of the metadata document inside each agent directory.
pub const DEFAULT_METADATA_FILE: &str = "metadata.yaml";

/// Where the catalog's metadata documents live.
///
/// # Examples
///
/// ```
/// use agent_catalog::catalog::config::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.agents_root.as_str(), "agents");
/// assert_eq!(config.metadata_file, "metadata.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Directory containing one sub-directory per agent.
    pub agents_root: Utf8PathBuf,
    /// File name of the metadata document in each agent directory.
    pub metadata_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            agents_root: Utf8PathBuf::from(DEFAULT_AGENTS_ROOT),
            metadata_file: DEFAULT_METADATA_FILE.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// Creates a configuration rooted at `agents_root` with the default
    /// metadata file name.
    #[must_use]
    pub fn with_root(agents_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            agents_root: agents_root.into(),
            ..Self::default()
        }
    }

    /// Parses a configuration from a YAML document.
    ///
    /// Keys that are absent keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the document is not a valid mapping of
    /// the known keys.
    pub fn from_yaml_str(document: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(document)
    }
}
