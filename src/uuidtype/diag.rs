//! Diagnostics.
//!
//! A diagnostic is a user-facing error or warning with a short summary, a detailed body and,
//! usually, the path of the attribute it is about. Validation returns a [`Diagnostics`]
//! collection instead of failing fast so the host can report every problem at once.

use serde::{Deserialize, Serialize};

use crate::path::AttributePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Diagnostic {
    /// An error not tied to a specific attribute.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// An error located at `path`.
    pub fn attribute_error(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path),
            ..Self::error(summary, detail)
        }
    }

    /// A warning located at `path`.
    pub fn attribute_warning(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            path: Some(path),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        match &self.path {
            Some(path) if !path.is_empty() => {
                write!(f, "{}: {} (at {})", label, self.summary, path)?
            }
            _ => write!(f, "{}: {}", label, self.summary)?,
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Adds every diagnostic from `other` that is not already present.
    pub fn append(&mut self, other: Diagnostics) {
        for diagnostic in other.0 {
            if !self.0.contains(&diagnostic) {
                self.0.push(diagnostic);
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.0.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Diagnostics {
    type Output = Diagnostic;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> Diagnostic {
        Diagnostic::attribute_error(AttributePath::root("id"), "Bad", "Something is wrong")
    }

    #[test]
    fn test_empty_has_no_errors() {
        let diags = Diagnostics::new();
        assert!(diags.is_empty());
        assert!(!diags.has_error());
        assert_eq!(diags.error_count(), 0);
    }

    #[test]
    fn test_counts_by_severity() {
        let mut diags = Diagnostics::new();
        diags.push(sample_error());
        diags.push(Diagnostic::attribute_warning(
            AttributePath::root("id"),
            "Hmm",
            "Looks odd",
        ));

        assert!(diags.has_error());
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.warning_count(), 1);
    }

    #[test]
    fn test_append_skips_duplicates() {
        let mut diags = Diagnostics::from(sample_error());
        diags.append(Diagnostics::from(sample_error()));
        assert_eq!(diags.len(), 1);

        diags.append(Diagnostics::from(Diagnostic::error("Other", "")));
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_display_includes_path_and_detail() {
        assert_eq!(
            sample_error().to_string(),
            "Error: Bad (at id)\n\nSomething is wrong"
        );
        assert_eq!(Diagnostic::error("Bad", "").to_string(), "Error: Bad");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(Diagnostics::from(sample_error())).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "severity": "error",
                "summary": "Bad",
                "detail": "Something is wrong",
                "path": [{ "AttributeName": "id" }],
            }])
        );
    }

    #[test]
    fn test_pathless_diagnostic_omits_path() {
        let json = serde_json::to_value(Diagnostic::error("Bad", "x")).unwrap();
        assert!(json.get("path").is_none());

        let loaded: Diagnostic = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.path, None);
    }
}
