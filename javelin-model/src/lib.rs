//! Project model for the javelin Java service generator.
//!
//! A project is read from `javelin.toml`, validated with source-aware
//! diagnostics and then consumed read-only by the code generators.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod eligibility;
mod entity;
mod error;
mod project;

pub use eligibility::{EligibleRequest, ResolvedEntity, SkipReason};
pub use entity::{Entity, EntityKind, FieldType, HttpMethod};
pub use error::{Error, Result, SourceContext};
pub use project::{
    DEFAULT_FILENAME, GenerateSettings, Module, ParseContext, Project, ProjectSettings,
    is_java_keyword, validate_package,
};
