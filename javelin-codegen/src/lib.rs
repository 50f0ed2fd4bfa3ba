//! Structural code emission for the javelin generator.
//!
//! The [`builder`] module holds the core: a line buffer and a code builder
//! whose brace-delimited scopes take their bodies as callbacks, which keeps
//! indentation and brace balance correct under arbitrary nesting.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Scope, CodeFragment, etc.)
//! - [`language`] - Language generator trait and result types
//! - [`ImportCollector`] - Sorted, deduplicated imports

pub mod builder;
pub mod language;

mod imports;

pub use builder::{CodeBuilder, CodeFragment, Indent, LineBuffer, Renderable, Scope};
pub use imports::ImportCollector;
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
