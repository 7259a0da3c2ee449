//! Testing infrastructure for stockgrid integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory and catalog file for CLI runs
//! - `fixtures`: sample catalog records
//! - `providers`: scripted catalog sources (delays, failures, gates)

pub mod fixtures;
pub mod providers;
pub mod world;

pub use fixtures::sample_products;
pub use providers::{CatalogGate, ScriptedCatalog};
pub use world::TestWorld;
