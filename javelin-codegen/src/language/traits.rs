//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit a project model in a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk.
    ///
    /// Fails if any unit fails to render.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    ///
    /// Every unit is rendered before the first file is written, so a failing
    /// unit leaves the output directory untouched.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Scaffolding files left alone because they already existed
    pub kept: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
