#![deny(clippy::all)]

/**
 * IDL Generator - Go backend import policy
 *
 * Decides which packages a generated Go file imports, and under which alias
 */
pub mod ast;
pub mod config;
pub mod error;
pub mod features;
pub mod golang;
pub mod logging;

// Re-exports
pub use codegen_namespace as namespace;
pub use config::GeneratorConfig;
pub use error::{ConfigError, ImportError};
pub use features::Features;

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
