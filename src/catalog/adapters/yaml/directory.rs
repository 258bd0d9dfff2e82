//! Agent source reading one metadata document per agent directory.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::document::parse_named_document;
use crate::catalog::{
    config::CatalogConfig,
    domain::AgentRecord,
    ports::{AgentSource, AgentSourceError, AgentSourceResult},
};

/// Agent source over an `agents/<agent>/metadata.yaml` directory layout.
///
/// Agent directories are visited in ascending name order. Directories
/// without a metadata document are skipped; plain files in the root are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlDirectorySource {
    root: Utf8PathBuf,
    metadata_file: String,
}

impl YamlDirectorySource {
    /// Creates a source over `root` reading `metadata_file` from each agent
    /// directory.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>, metadata_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            metadata_file: metadata_file.into(),
        }
    }

    /// Creates a source from catalog configuration.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.agents_root.clone(), config.metadata_file.clone())
    }

    /// Returns the agents root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

#[async_trait]
impl AgentSource for YamlDirectorySource {
    async fn load(&self) -> AgentSourceResult<Vec<AgentRecord>> {
        let root = self.root.clone();
        let metadata_file = self.metadata_file.clone();
        tokio::task::spawn_blocking(move || read_agent_directories(&root, &metadata_file))
            .await
            .map_err(|err| AgentSourceError::read(self.root.as_str(), err))?
    }
}

fn read_agent_directories(
    root: &Utf8Path,
    metadata_file: &str,
) -> AgentSourceResult<Vec<AgentRecord>> {
    let read_err = |location: &Utf8Path| {
        let owned = location.to_string();
        move |err: std::io::Error| AgentSourceError::read(owned, err)
    };

    let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(read_err(root))?;
    let mut agent_dirs = Vec::new();
    for entry_result in dir.entries().map_err(read_err(root))? {
        let entry = entry_result.map_err(read_err(root))?;
        if entry.file_type().map_err(read_err(root))?.is_dir() {
            agent_dirs.push(entry.file_name().map_err(read_err(root))?);
        }
    }
    agent_dirs.sort();

    let mut records = Vec::with_capacity(agent_dirs.len());
    for agent_dir in agent_dirs {
        let document_path = root.join(&agent_dir).join(metadata_file);
        let agent = dir.open_dir(&agent_dir).map_err(read_err(&document_path))?;
        if !agent.exists(metadata_file) {
            tracing::debug!(directory = %agent_dir, "skipping agent directory without metadata");
            continue;
        }
        let content = agent
            .read_to_string(metadata_file)
            .map_err(read_err(&document_path))?;
        records.push(parse_named_document(document_path.as_str(), &content)?);
    }

    tracing::debug!(root = %root, agents = records.len(), "read agent metadata directory");
    Ok(records)
}
