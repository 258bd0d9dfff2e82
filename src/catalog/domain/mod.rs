//! Domain model for the agent catalog.
//!
//! Catalog entries are immutable value objects held in an [`AgentStore`].
//! Category extraction, label formatting and filtering are pure functions
//! over those records; all loading concerns live outside the domain
//! boundary.

mod author;
mod category;
mod error;
mod filter;
mod ids;
mod image;
mod label;
mod record;
mod store;

pub use author::AgentAuthor;
pub use category::extract_categories;
pub use error::CatalogDomainError;
pub use filter::{FilterState, filter_agents};
pub(crate) use filter::matching_positions;
pub use ids::AgentId;
pub use image::ImageReference;
pub use label::format_label;
pub use record::{AgentRecord, AgentRecordData};
pub use store::AgentStore;
