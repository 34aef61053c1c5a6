#![deny(clippy::all)]

/**
 * Codegen Namespace
 *
 * Collision-free allocation of local names for identifiers of a generated file
 */
pub mod default;
pub mod namespace;
pub mod rename;

pub use default::DefaultNamespace;
pub use namespace::Namespace;
pub use rename::{underscore_rename, zero_indexed_rename, RenameFn};
