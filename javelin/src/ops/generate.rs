//! Generate operation - render or write the Java project.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use javelin_codegen::LanguageCodegen;
use javelin_codegen_java::{Generator, TemplateSource};
use javelin_model::{Project, validate_package};
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult, ModuleSummary};

/// Command-line overrides and destinations for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Location of javelin.toml; relative template paths resolve against
    /// its directory.
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    /// Force demo data on, whatever javelin.toml says.
    pub demo_data: bool,
    pub package: Option<String>,
}

/// Apply overrides to `project` and run the Java generator.
pub fn generate(mut project: Project, options: &GenerateOptions) -> Result<GenerateReport> {
    if let Some(package) = &options.package {
        validate_package(package)
            .map_err(|reason| eyre!("invalid package '{}': {}", package, reason))?;
        project.settings.set_package(package);
    }
    if options.demo_data {
        project.generate.demo_data = true;
    }

    let base_dir = options.config_path.parent().unwrap_or(Path::new(""));
    debug!(
        package = %project.settings.package(),
        demo_data = project.generate.demo_data,
        dry_run = options.dry_run,
        "running java generator"
    );
    let generator = Generator::new(&project)
        .with_templates(TemplateSource::from_project(&project, base_dir));

    let result = if options.dry_run {
        GenerationResult::Preview(generator.preview().wrap_err("Failed to render code")?)
    } else {
        let result = generator
            .generate(&options.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: options.output_dir.clone(),
            written: result.written,
            kept: result.kept,
        }
    };

    let modules = project
        .modules
        .keys()
        .map(|module| ModuleSummary {
            name: module.clone(),
            requests: project.eligible_requests(module).len(),
        })
        .collect();

    Ok(GenerateReport {
        project_name: project.settings.name.clone(),
        version: project.settings.version.to_string(),
        package: project.settings.package(),
        modules,
        result,
    })
}
