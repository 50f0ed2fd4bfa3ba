mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for javelin_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "javelin")]
#[command(version)]
#[command(about = "Generate Spring Boot services from TOML project descriptions")]
pub(crate) struct Cli {
    /// Log generation details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources and project files from javelin.toml
    Generate(GenerateCommand),

    /// Validate javelin.toml and list entities that produce no code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "javelin",
            "generate",
            "-c",
            "api/javelin.toml",
            "--dry-run",
            "--demo-data",
            "--package",
            "io.shop",
            "-v",
        ]);

        assert!(cli.verbose());
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.config, std::path::Path::new("api/javelin.toml"));
                assert!(cmd.dry_run);
                assert!(cmd.demo_data);
                assert_eq!(cmd.package.as_deref(), Some("io.shop"));
            }
            _ => panic!("expected generate"),
        }
    }
}
