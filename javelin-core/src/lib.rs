//! Core utilities and types for the javelin generator.
//!
//! This crate provides the file-writing layer, naming helpers and the
//! project [`Version`] shared by every other javelin crate.

mod file;
mod utils;
mod version;

// File operations
pub use file::{Content, File, FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// String utilities
pub use utils::{package_to_path, to_camel_case, to_pascal_case, to_snake_case};
pub use version::{Version, VersionError};
