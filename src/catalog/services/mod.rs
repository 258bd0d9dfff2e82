//! Application services for loading and presenting the agent catalog.

mod catalog;
mod view;

pub use catalog::{CatalogService, CatalogServiceError, CatalogServiceResult};
pub use view::{ALL_CATEGORIES_LABEL, CatalogSnapshot, CatalogView, CategoryOption};
