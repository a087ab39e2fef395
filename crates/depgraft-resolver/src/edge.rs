//! Module-addressed dependency edges.
//!
//! A `DependencyEdge` is a cheap handle to an immutable snapshot. Every
//! change produces a new snapshot; clones share the same one, so graphs
//! built from an older snapshot keep seeing it unchanged.

use std::fmt;
use std::sync::Arc;

use depgraft_core::artifact::ArtifactName;
use depgraft_core::attributes::ImmutableAttributes;
use depgraft_core::component::{ComponentMetadata, VariantMetadata};
use depgraft_core::exclude::ExcludeRule;
use depgraft_core::schema::AttributesSchema;
use depgraft_core::selector::{ComponentSelector, ModuleSelector};
use depgraft_core::version::VersionConstraint;
use depgraft_util::errors::GraftError;

use crate::matcher::AttributeMatcher;
use crate::metadata::{DependencyMetadata, Edge};
use crate::project::ProjectDependencyEdge;

/// One requested dependency on a module, selected through attribute matching.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    inner: Arc<EdgeState>,
}

#[derive(Debug)]
struct EdgeState {
    selector: ModuleSelector,
    excludes: Arc<[ExcludeRule]>,
    constraint: bool,
    reason: Option<String>,
}

impl DependencyEdge {
    pub fn new(
        selector: ModuleSelector,
        excludes: Vec<ExcludeRule>,
        constraint: bool,
        reason: Option<String>,
    ) -> Self {
        Self::from_state(EdgeState {
            selector,
            excludes: excludes.into(),
            constraint,
            reason,
        })
    }

    fn from_state(state: EdgeState) -> Self {
        Self {
            inner: Arc::new(state),
        }
    }

    pub fn module_selector(&self) -> &ModuleSelector {
        &self.inner.selector
    }

    /// Whether both handles point at the same snapshot.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// This edge with the requested version replaced.
    ///
    /// Returns the same snapshot when `version` is already the requested one.
    pub fn with_requested_version(&self, version: VersionConstraint) -> Self {
        if version == self.inner.selector.version {
            return self.clone();
        }
        tracing::debug!(
            "Overriding requested version of {} with {}",
            self.inner.selector,
            version
        );
        Self::from_state(EdgeState {
            selector: self.inner.selector.with_version(version),
            excludes: Arc::clone(&self.inner.excludes),
            constraint: self.inner.constraint,
            reason: self.inner.reason.clone(),
        })
    }

    /// This edge annotated with `reason`. Returns the same snapshot when unchanged.
    pub fn with_reason(&self, reason: Option<&str>) -> Self {
        if self.inner.reason.as_deref() == reason {
            return self.clone();
        }
        Self::from_state(EdgeState {
            selector: self.inner.selector.clone(),
            excludes: Arc::clone(&self.inner.excludes),
            constraint: self.inner.constraint,
            reason: reason.map(str::to_owned),
        })
    }
}

impl DependencyMetadata for DependencyEdge {
    fn selector(&self) -> ComponentSelector {
        ComponentSelector::Module(self.inner.selector.clone())
    }

    fn excludes(&self) -> &[ExcludeRule] {
        &self.inner.excludes
    }

    fn artifacts(&self) -> &[ArtifactName] {
        &[]
    }

    fn is_changing(&self) -> bool {
        false
    }

    fn is_transitive(&self) -> bool {
        true
    }

    fn is_constraint(&self) -> bool {
        self.inner.constraint
    }

    fn reason(&self) -> Option<&str> {
        self.inner.reason.as_deref()
    }

    /// Always a single variant, chosen by attribute matching.
    fn select_configurations(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        consumer_schema: &AttributesSchema,
        matcher: &dyn AttributeMatcher,
    ) -> Result<Vec<Arc<VariantMetadata>>, GraftError> {
        let variant =
            matcher.select_variant(consumer_attributes, target_component, consumer_schema)?;
        Ok(vec![variant])
    }

    fn with_target(&self, target: ComponentSelector) -> Edge {
        match target {
            ComponentSelector::Module(selector) => Edge::Module(Self::from_state(EdgeState {
                selector,
                excludes: Arc::clone(&self.inner.excludes),
                constraint: self.inner.constraint,
                reason: self.inner.reason.clone(),
            })),
            ComponentSelector::Project(selector) => {
                tracing::debug!("Substituting {} with {}", self.inner.selector, selector);
                Edge::Project(ProjectDependencyEdge::new(selector, self.clone()))
            }
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DependencyEdge: {}", self.inner.selector)
    }
}
