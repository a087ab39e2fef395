//! The capability surface shared by every edge kind.

use std::fmt;
use std::sync::Arc;

use depgraft_core::artifact::ArtifactName;
use depgraft_core::attributes::ImmutableAttributes;
use depgraft_core::component::{ComponentMetadata, VariantMetadata};
use depgraft_core::exclude::ExcludeRule;
use depgraft_core::schema::AttributesSchema;
use depgraft_core::selector::ComponentSelector;
use depgraft_util::errors::GraftError;

use crate::edge::DependencyEdge;
use crate::matcher::AttributeMatcher;
use crate::project::ProjectDependencyEdge;

/// What a resolution engine can ask of a dependency edge.
///
/// Edges are immutable; `with_target` and the kind-specific `with_*`
/// operations return new snapshots and leave the receiver usable.
pub trait DependencyMetadata: fmt::Debug + fmt::Display + Send + Sync {
    /// The target this edge currently points at.
    fn selector(&self) -> ComponentSelector;

    /// Exclude rules, in declaration order.
    fn excludes(&self) -> &[ExcludeRule];

    /// Artifacts pinned by this edge. Empty means "whatever the variant provides".
    fn artifacts(&self) -> &[ArtifactName];

    fn is_changing(&self) -> bool;

    fn is_transitive(&self) -> bool;

    /// `true` when the edge only constrains versions instead of requiring the target.
    fn is_constraint(&self) -> bool;

    fn reason(&self) -> Option<&str>;

    /// Choose the variants of `target_component` this edge resolves to.
    fn select_configurations(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        consumer_schema: &AttributesSchema,
        matcher: &dyn AttributeMatcher,
    ) -> Result<Vec<Arc<VariantMetadata>>, GraftError>;

    /// An edge pointing at `target`, carrying over everything else.
    fn with_target(&self, target: ComponentSelector) -> Edge;
}

/// Any edge produced by retargeting: the kinds are a closed set.
#[derive(Debug, Clone)]
pub enum Edge {
    Module(DependencyEdge),
    Project(ProjectDependencyEdge),
}

impl Edge {
    pub fn as_module(&self) -> Option<&DependencyEdge> {
        match self {
            Self::Module(edge) => Some(edge),
            Self::Project(_) => None,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectDependencyEdge> {
        match self {
            Self::Module(_) => None,
            Self::Project(edge) => Some(edge),
        }
    }

    fn inner(&self) -> &dyn DependencyMetadata {
        match self {
            Self::Module(edge) => edge as &dyn DependencyMetadata,
            Self::Project(edge) => edge,
        }
    }
}

impl From<DependencyEdge> for Edge {
    fn from(edge: DependencyEdge) -> Self {
        Self::Module(edge)
    }
}

impl From<ProjectDependencyEdge> for Edge {
    fn from(edge: ProjectDependencyEdge) -> Self {
        Self::Project(edge)
    }
}

impl DependencyMetadata for Edge {
    fn selector(&self) -> ComponentSelector {
        self.inner().selector()
    }

    fn excludes(&self) -> &[ExcludeRule] {
        self.inner().excludes()
    }

    fn artifacts(&self) -> &[ArtifactName] {
        self.inner().artifacts()
    }

    fn is_changing(&self) -> bool {
        self.inner().is_changing()
    }

    fn is_transitive(&self) -> bool {
        self.inner().is_transitive()
    }

    fn is_constraint(&self) -> bool {
        self.inner().is_constraint()
    }

    fn reason(&self) -> Option<&str> {
        self.inner().reason()
    }

    fn select_configurations(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        consumer_schema: &AttributesSchema,
        matcher: &dyn AttributeMatcher,
    ) -> Result<Vec<Arc<VariantMetadata>>, GraftError> {
        self.inner().select_configurations(
            consumer_attributes,
            target_component,
            consumer_schema,
            matcher,
        )
    }

    fn with_target(&self, target: ComponentSelector) -> Edge {
        self.inner().with_target(target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(edge) => fmt::Display::fmt(edge, f),
            Self::Project(edge) => fmt::Display::fmt(edge, f),
        }
    }
}
