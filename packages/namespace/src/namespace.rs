//! Namespace
//!
//! A namespace binds local names to opaque ids. Every id owns at most one name
//! and every name belongs to at most one id.

/// Name allocation capability.
///
/// Implementations decide how conflicting names are disambiguated; callers only
/// rely on the binding being stable once made.
pub trait Namespace {
    /// Binds `id` to `name`, or to a derived name if `name` is taken.
    ///
    /// If `id` is already bound, its existing name is returned and `name` is ignored.
    fn add(&mut self, name: &str, id: &str) -> String;

    /// Returns the name bound to `id`, if any.
    fn get(&self, id: &str) -> Option<String>;

    /// Binds `id` to exactly `name`. Returns `false` when either side is
    /// already bound to something else.
    fn reserve(&mut self, name: &str, id: &str) -> bool;

    /// Like [`Namespace::reserve`] but a conflict is a programming error.
    fn must_reserve(&mut self, name: &str, id: &str) {
        if !self.reserve(name, id) {
            panic!("namespace: cannot reserve name {:?} for id {:?}", name, id);
        }
    }

    /// Visits every `(name, id)` binding in registration order until `f`
    /// returns `false`.
    fn iterate(&self, f: &mut dyn FnMut(&str, &str) -> bool);
}

impl<N: Namespace + ?Sized> Namespace for Box<N> {
    fn add(&mut self, name: &str, id: &str) -> String {
        (**self).add(name, id)
    }

    fn get(&self, id: &str) -> Option<String> {
        (**self).get(id)
    }

    fn reserve(&mut self, name: &str, id: &str) -> bool {
        (**self).reserve(name, id)
    }

    fn must_reserve(&mut self, name: &str, id: &str) {
        (**self).must_reserve(name, id)
    }

    fn iterate(&self, f: &mut dyn FnMut(&str, &str) -> bool) {
        (**self).iterate(f)
    }
}
