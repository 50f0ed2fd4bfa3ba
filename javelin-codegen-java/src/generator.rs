//! Java code generator producing a Spring Boot service skeleton.

use std::path::{Path, PathBuf};

use eyre::Result;
use javelin_codegen::{
    Indent,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use javelin_core::{File, FileRules, GeneratedFile, WriteResult};
use javelin_model::{EntityKind, Project, SkipReason};
use tracing::{debug, info};

use crate::{
    DemoData, MockResponse,
    files::{ApplicationJava, ControllerJava, ModelJava},
    templates::{TemplateSource, TemplateTokens},
};

/// Java code generator for Spring Boot services.
pub struct Generator<'a> {
    project: &'a Project,
    demo_data: Option<Box<dyn DemoData + 'a>>,
    templates: TemplateSource,
    indent: Indent,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .render_all()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    /// Create a generator configured from the project's `[generate]` table.
    ///
    /// A relative template directory is taken relative to the working
    /// directory; use [`Generator::with_templates`] to anchor it elsewhere.
    pub fn new(project: &'a Project) -> Self {
        let demo_data: Option<Box<dyn DemoData + 'a>> = if project.generate.demo_data {
            Some(Box::new(MockResponse))
        } else {
            None
        };

        let indent = if project.generate.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(project.generate.indent)
        };

        Self {
            project,
            demo_data,
            templates: TemplateSource::from_project(project, Path::new("")),
            indent,
        }
    }

    /// Fill method bodies through a custom demo-data generator.
    pub fn with_demo_data(mut self, demo_data: impl DemoData + 'a) -> Self {
        self.demo_data = Some(Box::new(demo_data));
        self
    }

    /// Emit the "not yet implemented" placeholder in every method body.
    pub fn without_demo_data(mut self) -> Self {
        self.demo_data = None;
        self
    }

    pub fn with_templates(mut self, templates: TemplateSource) -> Self {
        self.templates = templates;
        self
    }

    /// Render every unit into memory. Fails on the first unit that fails, so
    /// either every file is available or none is.
    fn render_all(&self) -> Result<Vec<File>> {
        let mut files = Vec::new();
        let package = self.project.settings.package();

        for (module, definition) in &self.project.modules {
            for (name, reason) in self.project.skipped_entities(module) {
                if reason != SkipReason::NotARequest {
                    debug!(module = %module, entity = name, %reason, "skipping entity");
                }
            }

            let requests = self.project.eligible_requests(module);
            if requests.is_empty() {
                debug!(module = %module, "no eligible requests, controller skipped");
            } else {
                let mut controller =
                    ControllerJava::new(self.project, module, requests).with_indent(self.indent);
                if let Some(demo_data) = &self.demo_data {
                    controller = controller.with_demo_data(&**demo_data);
                }
                files.push(prerender(&controller)?);
            }

            for (name, entity) in &definition.entities {
                let is_model = match entity.kind {
                    EntityKind::Data => !entity.is_abstract,
                    EntityKind::Enum => true,
                    EntityKind::Request => false,
                };
                if is_model {
                    let model = ModelJava::new(&package, name, entity).with_indent(self.indent);
                    files.push(prerender(&model)?);
                }
            }
        }

        let application = ApplicationJava::new(&self.project.settings.name, &package)
            .with_indent(self.indent);
        files.push(prerender(&application)?);

        let tokens = TemplateTokens::from_project(self.project);
        files.extend(self.templates.materialize(&tokens)?);

        Ok(files)
    }

    /// Generate all files into the specified output directory.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.render_all()?;
        let mut result = GenerateResult::default();

        for file in &files {
            let path = file.relative_path().display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => {
                    info!(path = %path, "wrote file");
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    debug!(path = %path, "kept existing file");
                    result.kept.push(path);
                }
            }
        }

        Ok(result)
    }
}

/// Render a unit, header included, into an in-memory file that keeps the
/// unit's overwrite rule.
fn prerender(unit: &impl GeneratedFile) -> Result<File> {
    let path: PathBuf = unit.path(Path::new(""));
    let content = unit.render_with_header()?;
    let rules = FileRules {
        overwrite: unit.rules().overwrite,
        header: None,
    };
    Ok(File::new(path, content).with_rules(rules))
}
