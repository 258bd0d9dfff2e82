//! In-memory agent source for records compiled into the binary.

use async_trait::async_trait;

use crate::catalog::{
    domain::AgentRecord,
    ports::{AgentSource, AgentSourceResult},
};

/// Agent source backed by a fixed, already-built list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticAgentSource {
    records: Vec<AgentRecord>,
}

impl StaticAgentSource {
    /// Creates a source that always yields `records` in the given order.
    #[must_use]
    pub const fn new(records: Vec<AgentRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl AgentSource for StaticAgentSource {
    async fn load(&self) -> AgentSourceResult<Vec<AgentRecord>> {
        Ok(self.records.clone())
    }
}
