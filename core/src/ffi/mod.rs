//! PyO3 bindings
//!
//! Exposes the built-in generators and the deterministic shuffle to Python.

pub mod generator;
