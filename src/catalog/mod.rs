//! Agent catalog loading, categorisation and filtering.
//!
//! The catalog is read once at startup and shared read-only afterwards.
//! The module follows hexagonal architecture:
//!
//! - Domain types and the pure filtering functions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Loading and presentation services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
