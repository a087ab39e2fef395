//! Shared utilities for depgraft.
//!
//! This crate provides the cross-cutting error type used by the model and
//! resolver crates.

pub mod errors;
