//! Core data types for depgraft.
//!
//! This crate defines the values a dependency edge is built from: module
//! identifiers, version constraints, module- and project-addressed selectors,
//! immutable attribute sets, exclude rules, artifact names, the variants a
//! candidate component exposes, and the attribute schema used to match them.
//!
//! This crate is intentionally free of resolution logic.

pub mod artifact;
pub mod attributes;
pub mod component;
pub mod exclude;
pub mod module;
pub mod schema;
pub mod selector;
pub mod version;
