//! Edges retargeted to a project of the build tree.

use std::fmt;
use std::sync::Arc;

use depgraft_core::artifact::ArtifactName;
use depgraft_core::attributes::ImmutableAttributes;
use depgraft_core::component::{ComponentMetadata, VariantMetadata};
use depgraft_core::exclude::ExcludeRule;
use depgraft_core::schema::AttributesSchema;
use depgraft_core::selector::{ComponentSelector, ProjectSelector};
use depgraft_util::errors::GraftError;

use crate::edge::DependencyEdge;
use crate::matcher::AttributeMatcher;
use crate::metadata::{DependencyMetadata, Edge};

/// A module edge whose target was substituted by a project.
///
/// Only the selector differs; everything else is read from the wrapped edge.
#[derive(Debug, Clone)]
pub struct ProjectDependencyEdge {
    selector: ProjectSelector,
    delegate: DependencyEdge,
}

impl ProjectDependencyEdge {
    pub fn new(selector: ProjectSelector, delegate: DependencyEdge) -> Self {
        Self { selector, delegate }
    }

    pub fn project_selector(&self) -> &ProjectSelector {
        &self.selector
    }

    /// The edge as originally declared.
    pub fn delegate(&self) -> &DependencyEdge {
        &self.delegate
    }
}

impl DependencyMetadata for ProjectDependencyEdge {
    fn selector(&self) -> ComponentSelector {
        ComponentSelector::Project(self.selector.clone())
    }

    fn excludes(&self) -> &[ExcludeRule] {
        self.delegate.excludes()
    }

    fn artifacts(&self) -> &[ArtifactName] {
        self.delegate.artifacts()
    }

    fn is_changing(&self) -> bool {
        self.delegate.is_changing()
    }

    fn is_transitive(&self) -> bool {
        self.delegate.is_transitive()
    }

    fn is_constraint(&self) -> bool {
        self.delegate.is_constraint()
    }

    fn reason(&self) -> Option<&str> {
        self.delegate.reason()
    }

    fn select_configurations(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        consumer_schema: &AttributesSchema,
        matcher: &dyn AttributeMatcher,
    ) -> Result<Vec<Arc<VariantMetadata>>, GraftError> {
        self.delegate.select_configurations(
            consumer_attributes,
            target_component,
            consumer_schema,
            matcher,
        )
    }

    fn with_target(&self, target: ComponentSelector) -> Edge {
        match target {
            ComponentSelector::Project(ref selector) if *selector == self.selector => {
                Edge::Project(self.clone())
            }
            other => self.delegate.with_target(other),
        }
    }
}

impl fmt::Display for ProjectDependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectDependencyEdge: {}", self.selector)
    }
}
