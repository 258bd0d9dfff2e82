//! Agent catalog: discovery metadata for agent-to-agent services.
//!
//! This crate loads agent metadata records, derives the categories they use,
//! and filters them by search text and category for a catalog front-end. It
//! also models the navigation of the accompanying how-to guide.
//!
//! # Architecture
//!
//! The catalog follows hexagonal architecture principles:
//!
//! - **Domain**: Pure records and filtering functions with no I/O
//! - **Ports**: Abstract trait interfaces for loading records
//! - **Adapters**: Concrete record sources (embedded, YAML files)
//!
//! # Modules
//!
//! - [`catalog`]: Agent records, category extraction and filtering
//! - [`guide`]: How-to guide sections and page routes

pub mod catalog;
pub mod guide;
