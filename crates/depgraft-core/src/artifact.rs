use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a single artifact file, as pinned by artifact-selecting edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactName {
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
}

fn default_kind() -> String {
    "jar".to_string()
}

impl ArtifactName {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            extension: None,
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(classifier) = &self.classifier {
            write!(f, "-{classifier}")?;
        }
        let extension = self.extension.as_deref().unwrap_or(&self.kind);
        write!(f, ".{extension}")
    }
}
