//! Core domain types for sgen.
//!
//! A resource file yields a flat collection of statically-flagged entries,
//! one list per supported kind. Entries keep their document encounter order;
//! the emitter renders them in exactly that order.

use std::fmt;

/// The three supported resource classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Boolean,
    Integer,
    String,
}

impl ResourceKind {
    /// Resolve a kind from its input vocabulary (XML tag name or `type`
    /// attribute value). Unrecognized names yield `None` and the entry is
    /// skipped downstream.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(ResourceKind::Boolean),
            "integer" => Some(ResourceKind::Integer),
            "string" => Some(ResourceKind::String),
            _ => None,
        }
    }

    /// The input-side tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Boolean => "bool",
            ResourceKind::Integer => "integer",
            ResourceKind::String => "string",
        }
    }

    /// The generated nested-module name for this kind.
    ///
    /// `bool` is a reserved word in the output language, so the boolean
    /// group is emitted as `boolean`.
    pub fn container_ident(&self) -> &'static str {
        match self {
            ResourceKind::Boolean => "boolean",
            ResourceKind::Integer => "integer",
            ResourceKind::String => "string",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single named resource value. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry<T> {
    pub name: String,
    pub value: T,
}

impl<T> ResourceEntry<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The intermediate representation between scanning and emission.
///
/// Three ordered sequences, one per kind. Insertion order is document
/// encounter order. Duplicate names are permitted here; the scanner attaches
/// a warning diagnostic when it sees one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceModel {
    pub booleans: Vec<ResourceEntry<bool>>,
    pub integers: Vec<ResourceEntry<i32>>,
    pub strings: Vec<ResourceEntry<String>>,
}

impl ResourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entry count across all kinds.
    pub fn len(&self) -> usize {
        self.booleans.len() + self.integers.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an entry with this name already exists under the given kind.
    pub fn contains_name(&self, kind: ResourceKind, name: &str) -> bool {
        match kind {
            ResourceKind::Boolean => self.booleans.iter().any(|e| e.name == name),
            ResourceKind::Integer => self.integers.iter().any(|e| e.name == name),
            ResourceKind::String => self.strings.iter().any(|e| e.name == name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(ResourceKind::parse("bool"), Some(ResourceKind::Boolean));
        assert_eq!(ResourceKind::parse("integer"), Some(ResourceKind::Integer));
        assert_eq!(ResourceKind::parse("string"), Some(ResourceKind::String));
        assert_eq!(ResourceKind::parse("fraction"), None);
        assert_eq!(ResourceKind::parse(""), None);
        assert_eq!(ResourceKind::parse("Bool"), None);
    }

    #[test]
    fn test_kind_container_ident() {
        assert_eq!(ResourceKind::Boolean.container_ident(), "boolean");
        assert_eq!(ResourceKind::Integer.container_ident(), "integer");
        assert_eq!(ResourceKind::String.container_ident(), "string");
    }

    #[test]
    fn test_model_counts() {
        let mut model = ResourceModel::new();
        assert!(model.is_empty());

        model.booleans.push(ResourceEntry::new("dark_mode", true));
        model.integers.push(ResourceEntry::new("max_retries", 7));
        model.strings.push(ResourceEntry::new("label", "Hello".to_string()));

        assert_eq!(model.len(), 3);
        assert!(!model.is_empty());
    }

    #[test]
    fn test_contains_name_is_per_kind() {
        let mut model = ResourceModel::new();
        model.booleans.push(ResourceEntry::new("flag", true));

        assert!(model.contains_name(ResourceKind::Boolean, "flag"));
        assert!(!model.contains_name(ResourceKind::Integer, "flag"));
        assert!(!model.contains_name(ResourceKind::Boolean, "other"));
    }
}
