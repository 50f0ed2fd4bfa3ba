use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use javelin_model::Project;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to javelin.toml (defaults to ./javelin.toml)
    #[arg(short, long, default_value = "javelin.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::from_file(&self.config).unwrap_or_exit();

        let report = ops::check(&project, &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
