//! Agent catalog entry value object.

use super::{AgentAuthor, AgentId, CatalogDomainError, ImageReference};
use serde::{Deserialize, Serialize};

/// Immutable metadata describing one discoverable agent.
///
/// Records are built once when the catalog is loaded and never mutated
/// afterwards. Only `id`, `name`, `description`, `tags` and `categories`
/// take part in filtering; everything else is carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AgentRecordData")]
pub struct AgentRecord {
    id: AgentId,
    name: String,
    version: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_description: Option<String>,
    image: ImageReference,
    author: AgentAuthor,
    license: String,
    homepage: String,
    repository: String,
    documentation: String,
    categories: Vec<String>,
    tags: Vec<String>,
}

/// Parameter object for constructing an [`AgentRecord`].
///
/// Mirrors the layout of an agent's `metadata.yaml` document, so it is also
/// the deserialization target for records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecordData {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Agent release version.
    pub version: String,
    /// Short description shown on the card and searched.
    pub description: String,
    /// Optional extended description.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Distribution image.
    pub image: ImageReference,
    /// Author metadata.
    pub author: AgentAuthor,
    /// License identifier.
    pub license: String,
    /// Project homepage URL.
    pub homepage: String,
    /// Source repository URL.
    pub repository: String,
    /// Documentation URL.
    pub documentation: String,
    /// Facet categories.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AgentRecordData {
    /// Creates record data with the searchable essentials and empty
    /// descriptive fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: String::new(),
            description: description.into(),
            long_description: None,
            image: ImageReference::new("", "", "", 0),
            author: AgentAuthor::new("", ""),
            license: String::new(),
            homepage: String::new(),
            repository: String::new(),
            documentation: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the facet categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl TryFrom<AgentRecordData> for AgentRecord {
    type Error = CatalogDomainError;

    fn try_from(data: AgentRecordData) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl AgentRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyAgentId`] when the id is blank or
    /// [`CatalogDomainError::EmptyAgentName`] when the name is blank.
    pub fn new(data: AgentRecordData) -> Result<Self, CatalogDomainError> {
        let id = AgentId::new(data.id)?;
        if data.name.trim().is_empty() {
            return Err(CatalogDomainError::EmptyAgentName(id));
        }

        Ok(Self {
            id,
            name: data.name,
            version: data.version,
            description: data.description,
            long_description: data.long_description,
            image: data.image,
            author: data.author,
            license: data.license,
            homepage: data.homepage,
            repository: data.repository,
            documentation: data.documentation,
            categories: data.categories,
            tags: data.tags,
        })
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the release version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the short description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the extended description, if any.
    #[must_use]
    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    /// Returns the distribution image.
    #[must_use]
    pub const fn image(&self) -> &ImageReference {
        &self.image
    }

    /// Returns the author metadata.
    #[must_use]
    pub const fn author(&self) -> &AgentAuthor {
        &self.author
    }

    /// Returns the license identifier.
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Returns the homepage URL.
    #[must_use]
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    /// Returns the source repository URL.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the documentation URL.
    #[must_use]
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// Returns the facet categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the search tags in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns whether `category` is one of this record's categories.
    ///
    /// The comparison is exact and case-sensitive.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
