//! Port contracts for loading the agent catalog.
//!
//! Ports define infrastructure-agnostic interfaces used by catalog services.

pub mod source;

pub use source::{AgentSource, AgentSourceError, AgentSourceResult};
