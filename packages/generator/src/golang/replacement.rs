//! Import Replacement
//!
//! Process-wide table that maps an import id to the id that should be used in
//! its place, e.g. a fork of the thrift runtime. Built once from configuration
//! and shared read-only (behind an `Arc`) by every file being generated.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Slash separated Go import path segments.
static IMPORT_PATH_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.~+\-]+(/[A-Za-z0-9_.~+\-]+)*$").unwrap());

pub fn is_valid_import_path(path: &str) -> bool {
    IMPORT_PATH_REGEXP.is_match(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReplacement {
    table: HashMap<String, String>,
}

impl ImportReplacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        id: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let id = id.into();
        let replacement = replacement.into();
        for path in [&id, &replacement] {
            if !is_valid_import_path(path) {
                return Err(ConfigError::InvalidImportPath(path.clone()));
            }
        }
        self.table.insert(id, replacement);
        Ok(())
    }

    /// Builder form of [`ImportReplacement::insert`].
    pub fn with(
        mut self,
        id: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        self.insert(id, replacement)?;
        Ok(self)
    }

    /// Returns the id to use in place of `id`; `id` itself when there is no entry.
    ///
    /// Replacement is not transitive: the returned id is never looked up again.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.table.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl TryFrom<HashMap<String, String>> for ImportReplacement {
    type Error = ConfigError;

    fn try_from(table: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut replacement = ImportReplacement::new();
        for (id, target) in table {
            replacement.insert(id, target)?;
        }
        Ok(replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_to_itself_without_entry() {
        let replacement = ImportReplacement::new();
        assert_eq!(replacement.resolve("fmt"), "fmt");
    }

    #[test]
    fn should_not_chain_replacements() {
        let replacement = ImportReplacement::new()
            .with("a/x", "b/x")
            .and_then(|r| r.with("b/x", "c/x"))
            .unwrap();
        assert_eq!(replacement.resolve("a/x"), "b/x");
        assert_eq!(replacement.resolve("b/x"), "c/x");
    }

    #[test]
    fn should_validate_import_paths() {
        assert!(is_valid_import_path("github.com/apache/thrift/lib/go/thrift"));
        assert!(is_valid_import_path("gopkg.in/yaml.v3"));
        assert!(!is_valid_import_path(""));
        assert!(!is_valid_import_path("/absolute"));
        assert!(!is_valid_import_path("trailing/"));
        assert!(!is_valid_import_path("with space"));
    }

    #[test]
    fn should_reject_invalid_replacement_target() {
        let err = ImportReplacement::new().with("fmt", "not a path").unwrap_err();
        assert_eq!(err, ConfigError::InvalidImportPath("not a path".to_string()));
    }
}
