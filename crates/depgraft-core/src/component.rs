//! Candidate components and the variants they expose for attribute matching.

use std::fmt;
use std::sync::Arc;

use crate::attributes::ImmutableAttributes;

/// One attribute-tagged variant (configuration) of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMetadata {
    pub name: String,
    pub attributes: ImmutableAttributes,
}

impl VariantMetadata {
    pub fn new(name: impl Into<String>, attributes: ImmutableAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

impl fmt::Display for VariantMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.attributes)
    }
}

/// A resolved candidate on the target side of an edge.
///
/// Variants are shared so a selection can be compared by identity.
#[derive(Debug, Clone)]
pub struct ComponentMetadata {
    pub id: String,
    pub variants: Vec<Arc<VariantMetadata>>,
}

impl ComponentMetadata {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variants: Vec::new(),
        }
    }

    /// Add a variant (builder pattern).
    pub fn with_variant(mut self, name: impl Into<String>, attributes: ImmutableAttributes) -> Self {
        self.variants
            .push(Arc::new(VariantMetadata::new(name, attributes)));
        self
    }

    pub fn variant(&self, name: &str) -> Option<&Arc<VariantMetadata>> {
        self.variants.iter().find(|v| v.name == name)
    }
}

impl fmt::Display for ComponentMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
