//! Catalog entry author metadata.

use serde::{Deserialize, Serialize};

/// Author or maintainer of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAuthor {
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl AgentAuthor {
    /// Creates author metadata without a profile URL.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            url: None,
        }
    }

    /// Sets the author's profile URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the author's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the author's contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the author's profile URL, if declared.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
