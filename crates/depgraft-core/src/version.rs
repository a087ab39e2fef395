//! Requested-version constraints as carried by selectors.
//!
//! A constraint is an opaque value here: it is compared for equality and
//! displayed, never parsed into ranges or matched against candidates.

use std::fmt;

/// The version requirement attached to a module selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionConstraint {
    pub required: String,
    pub preferred: String,
    pub strictly: String,
    pub rejects: Vec<String>,
    pub branch: Option<String>,
}

impl VersionConstraint {
    /// A plain `required` version, the shape of `group:name:1.0` declarations.
    pub fn required(version: impl Into<String>) -> Self {
        Self {
            required: version.into(),
            ..Self::default()
        }
    }

    /// A strict version. Strict versions are also the required version.
    pub fn strictly(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            required: version.clone(),
            strictly: version,
            ..Self::default()
        }
    }

    pub fn prefer(mut self, version: impl Into<String>) -> Self {
        self.preferred = version.into();
        self
    }

    pub fn reject(mut self, version: impl Into<String>) -> Self {
        self.rejects.push(version.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Returns `true` when no part of the constraint is set.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && self.preferred.is_empty()
            && self.strictly.is_empty()
            && self.rejects.is_empty()
            && self.branch.is_none()
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.strictly.is_empty() {
            parts.push(format!("{{strictly {}}}", self.strictly));
        } else if !self.required.is_empty() {
            parts.push(self.required.clone());
        }
        if !self.preferred.is_empty() {
            parts.push(format!("{{prefer {}}}", self.preferred));
        }
        if !self.rejects.is_empty() {
            parts.push(format!("{{reject {}}}", self.rejects.join(" & ")));
        }
        if let Some(branch) = &self.branch {
            parts.push(format!("{{branch {branch}}}"));
        }
        f.write_str(&parts.join(" "))
    }
}
