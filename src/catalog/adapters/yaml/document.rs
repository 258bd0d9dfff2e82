//! Parsing of agent `metadata.yaml` documents.

use async_trait::async_trait;

use crate::catalog::{
    domain::AgentRecord,
    ports::{AgentSource, AgentSourceError, AgentSourceResult},
};

/// Parses one metadata document into a validated record.
///
/// Field names follow the document layout (`longDescription`,
/// `image.size`); `categories`, `tags` and `longDescription` may be
/// omitted.
///
/// # Errors
///
/// Returns the YAML error when the document is malformed, misses a
/// required field, or describes a record with a blank id or name.
pub fn parse_agent_metadata(document: &str) -> Result<AgentRecord, serde_yaml::Error> {
    serde_yaml::from_str(document)
}

/// Parses a named document, attributing failures to `name`.
pub(super) fn parse_named_document(name: &str, document: &str) -> AgentSourceResult<AgentRecord> {
    let record =
        parse_agent_metadata(document).map_err(|err| AgentSourceError::malformed(name, err))?;
    tracing::debug!(document = name, agent = %record.id(), "parsed agent metadata");
    Ok(record)
}

/// A metadata document together with the name used in error reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDocument {
    name: String,
    content: String,
}

impl NamedDocument {
    /// Creates a named document.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the document name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw YAML content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Agent source over metadata documents embedded at build time.
///
/// Documents are parsed in the order given, which becomes the catalog order.
///
/// ```
/// use agent_catalog::catalog::adapters::yaml::{NamedDocument, YamlDocumentSource};
///
/// let source = YamlDocumentSource::new(vec![NamedDocument::new(
///     "documentation/metadata.yaml",
///     "id: documentation\nname: Documentation Agent\n",
/// )]);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlDocumentSource {
    documents: Vec<NamedDocument>,
}

impl YamlDocumentSource {
    /// Creates a source over `documents`.
    #[must_use]
    pub const fn new(documents: Vec<NamedDocument>) -> Self {
        Self { documents }
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns whether the source holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl AgentSource for YamlDocumentSource {
    async fn load(&self) -> AgentSourceResult<Vec<AgentRecord>> {
        self.documents
            .iter()
            .map(|doc| parse_named_document(doc.name(), doc.content()))
            .collect()
    }
}
