//! Java code generator for the javelin service generator.
//!
//! Turns a [`javelin_model::Project`] into a Spring Boot service skeleton.
//!
//! # Usage
//!
//! ```ignore
//! use javelin_codegen_java::Generator;
//! use javelin_codegen::LanguageCodegen;
//! use javelin_model::Project;
//! use std::path::Path;
//!
//! let project = Project::from_file("javelin.toml")?;
//! let generator = Generator::new(&project);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("output"))?;
//! ```
//!
//! # Generated Output
//!
//! - `src/main/java/{package}/{Name}Application.java` - Spring Boot entry point
//! - `src/main/java/{package}/controller/*.java` - One controller per module
//!   with at least one eligible request
//! - `src/main/java/{package}/model/*.java` - Data classes and enums
//! - `pom.xml`, `application.properties`, `README.md`, `.gitignore` - written
//!   once from the template tree

mod demo_data;
mod generator;
mod java_file;
mod type_mapper;

pub mod files;
pub mod templates;

pub use demo_data::{DemoData, MockResponse};
pub use generator::Generator;
pub use java_file::JavaSource;
pub use javelin_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use templates::{TemplateSource, TemplateTokens};
pub use type_mapper::JavaTypeMapper;
