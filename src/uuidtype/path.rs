//! Attribute paths.
//!
//! A path locates an attribute inside a schema so diagnostics can point at the offending field.

use serde::{Deserialize, Serialize};

/// One step of an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathStep {
    /// Descend into a named attribute of an object or block.
    AttributeName(String),
    /// Descend into a map element.
    ElementKeyString(String),
    /// Descend into a list element.
    ElementKeyInt(i64),
}

impl PathStep {
    /// The name of the step's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PathStep::AttributeName(_) => "AttributeName",
            PathStep::ElementKeyString(_) => "ElementKeyString",
            PathStep::ElementKeyInt(_) => "ElementKeyInt",
        }
    }
}

/// A sequence of steps from the schema root to an attribute.
///
/// Renders the way users write references: `servers[0].id`, `labels["env"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The empty path (the schema root itself).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self::empty().at_name(name)
    }

    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::AttributeName(name.into()));
        self
    }

    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::ElementKeyString(key.into()));
        self
    }

    pub fn at_index(mut self, index: i64) -> Self {
        self.steps.push(PathStep::ElementKeyInt(index));
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::AttributeName(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::AttributeName(name) => write!(f, ".{}", name)?,
                PathStep::ElementKeyString(key) => write!(f, "[{:?}]", key)?,
                PathStep::ElementKeyInt(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_display() {
        assert_eq!(AttributePath::root("id").to_string(), "id");
    }

    #[test]
    fn test_nested_path_display() {
        let path = AttributePath::root("servers").at_index(0).at_name("id");
        assert_eq!(path.to_string(), "servers[0].id");

        let path = AttributePath::root("labels").at_key("env");
        assert_eq!(path.to_string(), "labels[\"env\"]");
    }

    #[test]
    fn test_empty_path() {
        let path = AttributePath::empty();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_steps_are_recorded_in_order() {
        let path = AttributePath::root("a").at_key("b").at_index(2);
        assert_eq!(
            path.steps(),
            &[
                PathStep::AttributeName("a".into()),
                PathStep::ElementKeyString("b".into()),
                PathStep::ElementKeyInt(2),
            ]
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PathStep::AttributeName("x".into()).kind_name(), "AttributeName");
        assert_eq!(PathStep::ElementKeyString("x".into()).kind_name(), "ElementKeyString");
        assert_eq!(PathStep::ElementKeyInt(1).kind_name(), "ElementKeyInt");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let path = AttributePath::root("servers").at_index(3);
        let json = serde_json::to_string(&path).unwrap();
        let loaded: AttributePath = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, path);
    }
}
