//! Navigation model for the how-to guide and the front-end's pages.
//!
//! The guide's prose is static presentation content; this module only
//! models which section is shown and how URL paths map to pages.

mod route;
mod section;

pub use route::Route;
pub use section::GuideSection;

use thiserror::Error;

/// Errors returned while interpreting guide navigation input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuideError {
    /// The section identifier does not name a guide section.
    #[error("unknown guide section: {0}")]
    UnknownSection(String),
}

#[cfg(test)]
mod tests;
