//! Template materializer: a static file tree with token substitution.
//!
//! Templates are project scaffolding the user is expected to edit, so every
//! file is written only when it does not exist yet. Files that take no token
//! substitution are copied as raw bytes, binaries included.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use javelin_core::{Content, File, FileRules};
use javelin_model::Project;
use walkdir::WalkDir;

/// Files whose content goes through token substitution. Everything else is
/// copied verbatim.
const SUBSTITUTED_FILES: &[&str] = &["pom.xml", "application.properties", "README.md"];

const BUILT_IN: &[(&str, &str)] = &[
    ("pom.xml", include_str!("../templates/pom.xml")),
    (
        "src/main/resources/application.properties",
        include_str!("../templates/application.properties"),
    ),
    ("README.md", include_str!("../templates/README.md")),
    (".gitignore", include_str!("../templates/gitignore")),
];

/// Where template files come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The tree bundled with javelin.
    #[default]
    BuiltIn,
    /// A directory on disk, walked recursively.
    Directory(PathBuf),
}

impl TemplateSource {
    /// The configured source; relative directories are resolved against
    /// `base_dir`, normally the directory holding `javelin.toml`.
    pub fn from_project(project: &Project, base_dir: &Path) -> Self {
        match &project.generate.templates {
            Some(dir) => Self::Directory(base_dir.join(dir)),
            None => Self::BuiltIn,
        }
    }

    /// Read every template file and substitute tokens.
    ///
    /// Paths in the result are relative to the output directory.
    pub fn materialize(&self, tokens: &TemplateTokens) -> Result<Vec<File>> {
        match self {
            Self::BuiltIn => Ok(BUILT_IN
                .iter()
                .map(|(path, content)| {
                    let content = substitute_if_known(Path::new(path), content, tokens);
                    template_file(Path::new(path), Content::Text(content))
                })
                .collect()),
            Self::Directory(dir) => materialize_dir(dir, tokens),
        }
    }
}

fn materialize_dir(dir: &Path, tokens: &TemplateTokens) -> Result<Vec<File>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry
            .wrap_err_with(|| format!("failed to read template directory '{}'", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir)?;
        let content = if is_substituted(relative) {
            let text = std::fs::read_to_string(entry.path()).wrap_err_with(|| {
                format!("failed to read template '{}'", entry.path().display())
            })?;
            Content::Text(tokens.substitute(&text))
        } else {
            let bytes = std::fs::read(entry.path()).wrap_err_with(|| {
                format!("failed to read template '{}'", entry.path().display())
            })?;
            Content::from_bytes(bytes)
        };
        files.push(template_file(relative, content));
    }

    Ok(files)
}

fn is_substituted(relative: &Path) -> bool {
    relative
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SUBSTITUTED_FILES.contains(&name))
}

fn substitute_if_known(relative: &Path, content: &str, tokens: &TemplateTokens) -> String {
    if is_substituted(relative) {
        tokens.substitute(content)
    } else {
        content.to_string()
    }
}

fn template_file(relative: &Path, content: Content) -> File {
    File::with_content(relative, content).with_rules(FileRules::create_once())
}

/// Values for the `{{name}}`, `{{version}}`, `{{package}}` and
/// `{{description}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTokens {
    pub name: String,
    pub version: String,
    pub package: String,
    pub description: String,
}

impl TemplateTokens {
    pub fn from_project(project: &Project) -> Self {
        let settings = &project.settings;
        Self {
            name: settings.name.clone(),
            version: settings.version.to_string(),
            package: settings.package(),
            description: settings.description_or_default(),
        }
    }

    /// Replace every known placeholder; unknown `{{...}}` text is left alone.
    pub fn substitute(&self, text: &str) -> String {
        text.replace("{{name}}", &self.name)
            .replace("{{version}}", &self.version)
            .replace("{{package}}", &self.package)
            .replace("{{description}}", &self.description)
    }
}
