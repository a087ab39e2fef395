use std::fmt;

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactName;

/// A transitive dependency to leave out of the graph below an edge.
///
/// Absent parts act as wildcards. How rules are applied is decided by the
/// resolution engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcludeRule {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub artifact: Option<ArtifactName>,
}

impl ExcludeRule {
    /// Exclude everything published under `group`.
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            module: None,
            artifact: None,
        }
    }

    /// Exclude one `group:module`.
    pub fn module(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            module: Some(module.into()),
            artifact: None,
        }
    }

    pub fn with_artifact(mut self, artifact: ArtifactName) -> Self {
        self.artifact = Some(artifact);
        self
    }
}

impl fmt::Display for ExcludeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.group.as_deref().unwrap_or("*"),
            self.module.as_deref().unwrap_or("*")
        )?;
        if let Some(artifact) = &self.artifact {
            write!(f, " ({artifact})")?;
        }
        Ok(())
    }
}
