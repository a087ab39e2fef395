//! Attribute schema: compatibility and disambiguation rules for matching
//! consumer attributes against the variants of a component.
//!
//! Schemas are plain configuration, loaded from TOML:
//!
//! ```toml
//! [attributes.usage]
//! compatible = { "java-api" = ["java-runtime"] }
//! prefer = ["java-api", "java-runtime"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use depgraft_util::errors::{GraftError, GraftResult};
use serde::{Deserialize, Serialize};

/// Matching rules keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributesSchema {
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeRules>,
}

/// Rules for a single attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRules {
    /// Consumer value to the producer values it also accepts.
    #[serde(default)]
    pub compatible: BTreeMap<String, Vec<String>>,

    /// Producer values in order of preference, used to break ties.
    #[serde(default)]
    pub prefer: Vec<String>,
}

impl AttributesSchema {
    pub fn from_toml_str(content: &str) -> Result<Self, GraftError> {
        toml::from_str(content).map_err(|e| GraftError::Schema {
            message: e.to_string(),
        })
    }

    /// Load a schema file.
    pub fn load(path: &Path) -> GraftResult<Self> {
        let content = std::fs::read_to_string(path).map_err(GraftError::Io)?;
        let schema = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded attribute schema from {} ({} attributes)",
            path.display(),
            schema.attributes.len()
        );
        Ok(schema)
    }

    /// Declare that consumers asking for `consumer` accept `producer` (builder pattern).
    pub fn with_compatibility(
        mut self,
        attribute: impl Into<String>,
        consumer: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .compatible
            .entry(consumer.into())
            .or_default()
            .push(producer.into());
        self
    }

    /// Set the preference order for `attribute` (builder pattern).
    pub fn with_preference<S: Into<String>>(
        mut self,
        attribute: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.attributes.entry(attribute.into()).or_default().prefer =
            values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a producer value satisfies a consumer value for `attribute`.
    pub fn is_compatible(&self, attribute: &str, consumer: &str, producer: &str) -> bool {
        if consumer == producer {
            return true;
        }
        self.attributes
            .get(attribute)
            .and_then(|rules| rules.compatible.get(consumer))
            .is_some_and(|accepted| accepted.iter().any(|v| v == producer))
    }

    /// Position of `value` in the preference order of `attribute`, if listed.
    pub fn preference_rank(&self, attribute: &str, value: &str) -> Option<usize> {
        self.attributes
            .get(attribute)?
            .prefer
            .iter()
            .position(|v| v == value)
    }
}
