//! Go Backend
//!
//! Import policy of the Go code generator.

pub mod imports;
pub mod libs;
pub mod planner;
pub mod redirect;
pub mod replacement;

pub use imports::{elide_alias, ImportManager, ImportTable, StdLibrary};
pub use planner::ImportPlanner;
pub use redirect::IdRedirector;
pub use replacement::ImportReplacement;
