use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An immutable, ordered set of `name = value` attributes.
///
/// Cloning shares the underlying map; `with` produces a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImmutableAttributes {
    entries: Arc<BTreeMap<String, String>>,
}

impl ImmutableAttributes {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from `(name, value)` pairs. Later pairs win on duplicate names.
    pub fn of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    /// A copy of this set with `name` bound to `value`.
    pub fn with(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(name.into(), value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ImmutableAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
