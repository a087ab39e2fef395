//! Selectors address the target of a dependency edge.
//!
//! The set of selector kinds is closed: a target is either a published
//! module or a project inside the current build tree.

use std::fmt;

use crate::attributes::ImmutableAttributes;
use crate::module::ModuleIdentifier;
use crate::version::VersionConstraint;

/// Path of the root build in a build tree.
pub const ROOT_BUILD_PATH: &str = ":";

/// Selects a published module by identity and version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleSelector {
    pub module: ModuleIdentifier,
    pub version: VersionConstraint,
    pub attributes: ImmutableAttributes,
}

impl ModuleSelector {
    pub fn new(module: ModuleIdentifier, version: VersionConstraint) -> Self {
        Self {
            module,
            version,
            attributes: ImmutableAttributes::empty(),
        }
    }

    /// Shorthand for a `group:name` module with a required version.
    pub fn of(group: &str, name: &str, version: &str) -> Self {
        Self::new(
            ModuleIdentifier::new(group, name),
            VersionConstraint::required(version),
        )
    }

    /// Attach requested attributes (builder pattern).
    pub fn with_attributes(mut self, attributes: ImmutableAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// A selector for the same module and attributes with `version` replaced.
    pub fn with_version(&self, version: VersionConstraint) -> Self {
        Self {
            module: self.module.clone(),
            version,
            attributes: self.attributes.clone(),
        }
    }
}

impl fmt::Display for ModuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.module)
        } else {
            write!(f, "{}:{}", self.module, self.version)
        }
    }
}

/// Selects a project of the build tree by its build and project paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectSelector {
    pub build_path: String,
    pub project_path: String,
    pub attributes: ImmutableAttributes,
}

impl ProjectSelector {
    /// A project of the root build.
    pub fn root_build(project_path: impl Into<String>) -> Self {
        Self::new(ROOT_BUILD_PATH, project_path)
    }

    pub fn new(build_path: impl Into<String>, project_path: impl Into<String>) -> Self {
        Self {
            build_path: build_path.into(),
            project_path: project_path.into(),
            attributes: ImmutableAttributes::empty(),
        }
    }

    pub fn with_attributes(mut self, attributes: ImmutableAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// The project's path within the whole build tree.
    pub fn identity_path(&self) -> String {
        if self.build_path == ROOT_BUILD_PATH {
            self.project_path.clone()
        } else if self.project_path == ":" {
            self.build_path.clone()
        } else {
            format!("{}{}", self.build_path, self.project_path)
        }
    }
}

impl fmt::Display for ProjectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project {}", self.identity_path())
    }
}

/// Any dependency target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentSelector {
    Module(ModuleSelector),
    Project(ProjectSelector),
}

impl ComponentSelector {
    pub fn attributes(&self) -> &ImmutableAttributes {
        match self {
            Self::Module(m) => &m.attributes,
            Self::Project(p) => &p.attributes,
        }
    }

    pub fn as_module(&self) -> Option<&ModuleSelector> {
        match self {
            Self::Module(m) => Some(m),
            Self::Project(_) => None,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectSelector> {
        match self {
            Self::Module(_) => None,
            Self::Project(p) => Some(p),
        }
    }
}

impl From<ModuleSelector> for ComponentSelector {
    fn from(selector: ModuleSelector) -> Self {
        Self::Module(selector)
    }
}

impl From<ProjectSelector> for ComponentSelector {
    fn from(selector: ProjectSelector) -> Self {
        Self::Project(selector)
    }
}

impl fmt::Display for ComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(m) => fmt::Display::fmt(m, f),
            Self::Project(p) => fmt::Display::fmt(p, f),
        }
    }
}
