//! Id Redirector
//!
//! A [`Namespace`] decorator that passes every id through the import
//! replacement table before delegating. Callers keep using the original id and
//! never observe the substitution: `add` and a later `get` under the same
//! original id land on the same underlying binding.

use crate::golang::replacement::ImportReplacement;
use crate::logging::{Logger, NullLogger};
use codegen_namespace::Namespace;
use std::sync::Arc;

pub struct IdRedirector<N> {
    inner: N,
    replacement: Arc<ImportReplacement>,
    logger: Arc<dyn Logger>,
}

impl<N: Namespace> IdRedirector<N> {
    pub fn new(inner: N, replacement: Arc<ImportReplacement>) -> Self {
        Self {
            inner,
            replacement,
            logger: Arc::new(NullLogger::new()),
        }
    }

    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = logger;
    }

    /// The id that `id` is stored under in the wrapped namespace.
    pub fn resolve_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.replacement.resolve(id)
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

fn redirect<'a>(replacement: &'a ImportReplacement, logger: &dyn Logger, id: &'a str) -> &'a str {
    let target = replacement.resolve(id);
    if target != id {
        logger.debug(&format!("redirect import {} -> {}", id, target));
    }
    target
}

impl<N: Namespace> Namespace for IdRedirector<N> {
    fn add(&mut self, name: &str, id: &str) -> String {
        let target = redirect(&self.replacement, self.logger.as_ref(), id);
        self.inner.add(name, target)
    }

    fn get(&self, id: &str) -> Option<String> {
        self.inner.get(self.replacement.resolve(id))
    }

    fn reserve(&mut self, name: &str, id: &str) -> bool {
        let target = redirect(&self.replacement, self.logger.as_ref(), id);
        self.inner.reserve(name, target)
    }

    fn must_reserve(&mut self, name: &str, id: &str) {
        let target = redirect(&self.replacement, self.logger.as_ref(), id);
        self.inner.must_reserve(name, target)
    }

    /// Visits the underlying (already substituted) ids.
    fn iterate(&self, f: &mut dyn FnMut(&str, &str) -> bool) {
        self.inner.iterate(f)
    }
}
