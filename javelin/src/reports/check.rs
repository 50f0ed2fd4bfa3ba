//! Check command report.

use std::path::PathBuf;

use super::{
    ModuleSummary,
    output::{Output, Report},
};

/// What a valid project will generate, and what it silently skips.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub project_name: String,
    pub version: String,
    pub modules: Vec<ModuleSummary>,
    /// Requests that look intended but cannot produce a method.
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.text(&format!("info: {}", info));
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.blank();
        }

        out.text(&format!("{} v{}", self.project_name, self.version));
        out.heading(&format!("Modules ({})", self.modules.len()));
        for module in &self.modules {
            out.item(&module.to_string());
        }
        out.blank();

        out.text(&format!("✓ {} is valid", self.config_path.display()));
    }
}
