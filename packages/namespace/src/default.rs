//! Default Namespace
//!
//! Map-backed namespace that resolves name conflicts with a rename function.

use crate::namespace::Namespace;
use crate::rename::{zero_indexed_rename, RenameFn};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

pub struct DefaultNamespace {
    /// name -> id, in registration order
    names: IndexMap<String, String>,
    /// id -> name
    ids: HashMap<String, String>,
    rename: RenameFn,
}

impl DefaultNamespace {
    pub fn new<F>(rename: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Self {
            names: IndexMap::new(),
            ids: HashMap::new(),
            rename: Box::new(rename),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the id bound to `name`, if any.
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    fn bind(&mut self, name: String, id: &str) {
        self.ids.insert(id.to_string(), name.clone());
        self.names.insert(name, id.to_string());
    }
}

impl Default for DefaultNamespace {
    fn default() -> Self {
        Self::new(zero_indexed_rename)
    }
}

impl fmt::Debug for DefaultNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultNamespace")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl Namespace for DefaultNamespace {
    fn add(&mut self, name: &str, id: &str) -> String {
        if let Some(existing) = self.ids.get(id) {
            return existing.clone();
        }

        let mut candidate = name.to_string();
        let mut cnt = 1;
        while self.names.contains_key(&candidate) {
            cnt += 1;
            candidate = (self.rename)(name, cnt);
        }

        self.bind(candidate.clone(), id);
        candidate
    }

    fn get(&self, id: &str) -> Option<String> {
        self.ids.get(id).cloned()
    }

    fn reserve(&mut self, name: &str, id: &str) -> bool {
        match (self.names.get(name), self.ids.get(id)) {
            (Some(bound_id), _) if bound_id != id => false,
            (_, Some(bound_name)) if bound_name != name => false,
            (Some(_), Some(_)) => true,
            _ => {
                self.bind(name.to_string(), id);
                true
            }
        }
    }

    fn iterate(&self, f: &mut dyn FnMut(&str, &str) -> bool) {
        for (name, id) in &self.names {
            if !f(name, id) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_existing_name_for_known_id() {
        let mut ns = DefaultNamespace::default();
        assert_eq!(ns.add("fmt", "fmt"), "fmt");
        assert_eq!(ns.add("other", "fmt"), "fmt");
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn should_rename_on_conflict() {
        let mut ns = DefaultNamespace::default();
        assert_eq!(ns.add("thrift", "github.com/apache/thrift/lib/go/thrift"), "thrift");
        assert_eq!(ns.add("thrift", "example.com/fork/thrift"), "thrift1");
        assert_eq!(ns.add("thrift", "example.com/other/thrift"), "thrift2");
        assert_eq!(ns.id_of("thrift1"), Some("example.com/fork/thrift"));
    }

    #[test]
    fn should_skip_reserved_candidates() {
        let mut ns = DefaultNamespace::default();
        assert!(ns.reserve("fmt1", "local-variable"));
        ns.add("fmt", "fmt");
        assert_eq!(ns.add("fmt", "example.com/fmt"), "fmt2");
    }
}
