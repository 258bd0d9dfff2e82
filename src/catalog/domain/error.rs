//! Error types for agent catalog domain validation.

use super::AgentId;
use thiserror::Error;

/// Errors returned while constructing agent catalog domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The agent display name is empty after trimming.
    #[error("agent name must not be empty (agent '{0}')")]
    EmptyAgentName(AgentId),

    /// Two records in the same store share an identifier.
    #[error("duplicate agent id: {0}")]
    DuplicateAgentId(AgentId),
}
