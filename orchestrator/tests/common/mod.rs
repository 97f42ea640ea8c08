//! Common test utilities for orchestrator tests

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::TestFixtures;
