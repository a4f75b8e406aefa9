//! Canonical serialization and content hashing for reproducible fixtures.

pub mod canon;
pub mod hash;
