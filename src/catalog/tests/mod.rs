//! Unit tests for the catalog module.
//!
//! Tests are organised by concern, covering the pure filtering contract,
//! the YAML adapters, loading orchestration and the view model.

mod yaml_tests;
