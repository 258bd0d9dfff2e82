//! Immutable, shared store of catalog entries.

use super::{AgentId, AgentRecord, CatalogDomainError, extract_categories};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Ordered, read-only set of agent records shared by every consumer.
///
/// Cloning is cheap and yields a handle to the same store. Because the
/// records never change, the category list is computed at most once per
/// store.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<AgentRecord>,
    categories: OnceLock<Vec<String>>,
}

impl AgentStore {
    /// Creates a store, keeping the records in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::DuplicateAgentId`] when two records share
    /// an identifier.
    pub fn new(records: Vec<AgentRecord>) -> Result<Self, CatalogDomainError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CatalogDomainError::DuplicateAgentId(record.id().clone()));
            }
        }

        Ok(Self {
            inner: Arc::new(StoreInner {
                records,
                categories: OnceLock::new(),
            }),
        })
    }

    /// Creates a store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the records in load order.
    #[must_use]
    pub fn records(&self) -> &[AgentRecord] {
        &self.inner.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    /// Finds a record by identifier.
    #[must_use]
    pub fn get(&self, id: &AgentId) -> Option<&AgentRecord> {
        self.inner.records.iter().find(|record| record.id() == id)
    }

    /// Returns the sorted, distinct categories across all records.
    ///
    /// Computed on first use and reused for the lifetime of the store.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.inner
            .categories
            .get_or_init(|| extract_categories(&self.inner.records))
    }

    /// Returns whether both handles refer to the same store.
    #[must_use]
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
