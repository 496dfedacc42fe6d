//! Integration test utilities for the community server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, including fixtures for users, categories, and servers.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
