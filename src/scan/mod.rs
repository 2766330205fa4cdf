//! Heuristic scanning of Go source files.
//!
//! Nothing here parses Go. Package and import declarations are recognized
//! by the textual layout gofmt gives them.

pub mod imports;
pub mod lines;
pub mod package_decl;

pub use imports::{extract_imports, UNINFORMATIVE_LIMIT};
pub use lines::LineReader;
pub use package_decl::{read_package_line, resolve_package_name};
