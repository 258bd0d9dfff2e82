//! YAML metadata adapters.
//!
//! Each agent is described by one YAML document. Documents can be embedded
//! at build time ([`YamlDocumentSource`]) or read from an agents directory
//! ([`YamlDirectorySource`]).

mod directory;
mod document;

pub use directory::YamlDirectorySource;
pub use document::{NamedDocument, YamlDocumentSource, parse_agent_metadata};
