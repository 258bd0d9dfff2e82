//! Source port supplying catalog entries at startup.

use crate::catalog::domain::{AgentRecord, CatalogDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent source operations.
pub type AgentSourceResult<T> = Result<T, AgentSourceError>;

/// Supplies the complete, ordered list of agent records.
///
/// Implementations are consulted once per catalog load; the records they
/// return are never written back.
#[async_trait]
pub trait AgentSource: Send + Sync {
    /// Loads every agent record in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`AgentSourceError`] when the underlying data cannot be read
    /// or does not describe valid records.
    async fn load(&self) -> AgentSourceResult<Vec<AgentRecord>>;
}

/// Errors returned by agent source implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentSourceError {
    /// The backing data could not be read.
    #[error("failed to read agent metadata at {location}: {source}")]
    Read {
        /// Path or name of the unreadable resource.
        location: String,
        /// Underlying I/O failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// A metadata document is not a valid agent description.
    #[error("malformed agent metadata in {document}: {source}")]
    Malformed {
        /// Path or name of the offending document.
        document: String,
        /// Underlying parse failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The loaded records violate a catalog invariant.
    #[error(transparent)]
    InvalidRecord(#[from] CatalogDomainError),
}

impl AgentSourceError {
    /// Wraps a read failure for `location`.
    pub fn read(
        location: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Read {
            location: location.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a parse failure for `document`.
    pub fn malformed(
        document: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Malformed {
            document: document.into(),
            source: Arc::new(err),
        }
    }
}
