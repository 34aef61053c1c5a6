// Logging
//
// Leveled logger used by the code generator.

mod console_logger;
mod logger;
#[cfg(test)]
mod test;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};
