//! Shared fixtures for the cross-crate lock tests and the fixture binary.
