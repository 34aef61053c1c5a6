// Well-known Go imports
//
// Import paths and local names used by generated Go code.

/// Thrift runtime used by generated serialization code.
pub const DEFAULT_THRIFT_LIB: &str = "github.com/apache/thrift/lib/go/thrift";

/// Support library for preserving unknown fields.
pub const DEFAULT_UNKNOWN_LIB: &str = "github.com/cloudwego/thriftgo/generator/golang/extension/unknown";

/// `(local name, import path)` pairs registered from the document shape.
pub const FMT: (&str, &str) = ("fmt", "fmt");
pub const CONTEXT: (&str, &str) = ("context", "context");
pub const SQL_DRIVER: (&str, &str) = ("driver", "database/sql/driver");
pub const SQL: (&str, &str) = ("sql", "database/sql");
pub const THRIFT: (&str, &str) = ("thrift", DEFAULT_THRIFT_LIB);
pub const UNKNOWN: (&str, &str) = ("unknown", DEFAULT_UNKNOWN_LIB);
