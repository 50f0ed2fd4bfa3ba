use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use javelin_model::Project;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to javelin.toml (defaults to ./javelin.toml)
    #[arg(short, long, default_value = "javelin.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Fill method bodies with example responses (overrides javelin.toml)
    #[arg(long)]
    pub demo_data: bool,

    /// Base Java package (overrides javelin.toml)
    #[arg(long)]
    pub package: Option<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::from_file(&self.config).unwrap_or_exit();

        let options = GenerateOptions {
            config_path: self.config.clone(),
            output_dir: self.output.clone(),
            dry_run: self.dry_run,
            demo_data: self.demo_data,
            package: self.package.clone(),
        };
        let report = ops::generate(project, &options)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
