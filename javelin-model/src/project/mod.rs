//! Project model and `javelin.toml` parsing.

mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
use javelin_core::{Version, to_snake_case};
use serde::Deserialize;

pub use parse::DEFAULT_FILENAME;
pub use validate::{ParseContext, is_java_keyword, validate_package};

use crate::Entity;

/// Root of `javelin.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Naming and packaging metadata
    #[serde(rename = "project")]
    pub settings: ProjectSettings,

    /// Code generation options
    #[serde(default)]
    pub generate: GenerateSettings,

    /// Modules in declaration order
    #[serde(default)]
    pub modules: IndexMap<String, Module>,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSettings {
    /// Project name; required, checked after parsing so the diagnostic can
    /// point at the table.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: Version,

    /// Base Java package; derived from the name when absent.
    package: Option<String>,

    pub description: Option<String>,
}

impl ProjectSettings {
    /// The base Java package, e.g. `com.example.petstore`.
    pub fn package(&self) -> String {
        match &self.package {
            Some(package) => package.clone(),
            None => format!("com.example.{}", to_snake_case(&self.name).replace('_', "")),
        }
    }

    /// Replace the base package.
    ///
    /// Callers are expected to check the value with [`validate_package`] first.
    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = Some(package.into());
    }

    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("{} service", self.name))
    }
}

/// The `[generate]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateSettings {
    /// Fill method bodies with synthetic responses instead of a placeholder.
    pub demo_data: bool,

    /// Spaces per indentation level.
    pub indent: u8,

    /// Indent with one tab per level instead of `indent` spaces.
    pub use_tabs: bool,

    /// Appended to the module name to form the controller class name.
    pub controller_suffix: String,

    /// Template directory to materialize instead of the built-in tree.
    pub templates: Option<PathBuf>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            demo_data: false,
            indent: 2,
            use_tabs: false,
            controller_suffix: "Controller".to_string(),
            templates: None,
        }
    }
}

/// A named group of entities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Module {
    pub description: Option<String>,

    /// Entities in declaration order
    #[serde(default)]
    pub entities: IndexMap<String, Entity>,
}
