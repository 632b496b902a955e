//
// lib.rs
// linecmp
//
// Library entry that re-exports modules so the binary and tests can access CLI parsing, line loading, and comparison logic.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod error;
pub mod loader;

pub use cli::{build_options, Args, Options};
pub use compare::{compare_files, compare_lines, Comparison, DiffEntry};
pub use error::LoadError;
pub use loader::load_lines;
