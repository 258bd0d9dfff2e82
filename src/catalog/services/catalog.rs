//! Service layer for loading the agent catalog.
//!
//! Provides [`CatalogService`], which turns the records supplied by an
//! [`AgentSource`] into the shared [`AgentStore`].

use crate::catalog::{
    domain::{AgentStore, CatalogDomainError},
    ports::{AgentSource, AgentSourceError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for catalog loading.
#[derive(Debug, Clone, Error)]
pub enum CatalogServiceError {
    /// The source could not supply records.
    #[error(transparent)]
    Source(#[from] AgentSourceError),
    /// The supplied records do not form a valid store.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
}

/// Result type for catalog service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Catalog loading orchestration service.
#[derive(Debug)]
pub struct CatalogService<S>
where
    S: AgentSource,
{
    source: Arc<S>,
}

impl<S> Clone for CatalogService<S>
where
    S: AgentSource,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> CatalogService<S>
where
    S: AgentSource,
{
    /// Creates a catalog service over `source`.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Loads the records and builds the store.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Source`] when the source fails, or
    /// [`CatalogServiceError::Domain`] when the records share an id.
    pub async fn try_load(&self) -> CatalogServiceResult<AgentStore> {
        let records = self.source.load().await?;
        let store = AgentStore::new(records)?;
        tracing::debug!(
            agents = store.len(),
            categories = store.categories().len(),
            "agent catalog loaded"
        );
        Ok(store)
    }

    /// Loads the store, falling back to an empty catalog on failure.
    ///
    /// The failure is logged; callers then see no categories and no
    /// agents instead of an error.
    pub async fn load(&self) -> AgentStore {
        match self.try_load().await {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "failed to load agent catalog, continuing with an empty catalog"
                );
                AgentStore::empty()
            }
        }
    }
}
