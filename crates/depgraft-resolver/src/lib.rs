//! Dependency edges as consumed by a resolution engine: immutable module
//! edges that evolve copy-on-write, project retargeting, and single-variant
//! selection through an injected attribute matcher.

pub mod edge;
pub mod graph;
pub mod matcher;
pub mod metadata;
pub mod project;

pub use edge::DependencyEdge;
pub use matcher::{AttributeMatcher, SchemaAttributeMatcher};
pub use metadata::{DependencyMetadata, Edge};
pub use project::ProjectDependencyEdge;
