//! Adapter implementations of the catalog source port.

pub mod memory;
pub mod yaml;
