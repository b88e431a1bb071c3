//! Shared test scaffolding for checker test suites

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
