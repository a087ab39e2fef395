use std::fmt;

/// A module's `group:name` identity, without any version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleIdentifier {
    pub group: String,
    pub name: String,
}

impl ModuleIdentifier {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Parse `"group:name"` into an identifier.
    pub fn parse(s: &str) -> Option<Self> {
        let (group, name) = s.split_once(':')?;
        if group.is_empty() || name.is_empty() || name.contains(':') {
            return None;
        }
        Some(Self::new(group, name))
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}
