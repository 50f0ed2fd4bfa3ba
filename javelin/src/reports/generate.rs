//! Generate command report.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use javelin_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub project_name: String,
    pub version: String,
    /// Effective base package, after any override.
    pub package: String,
    pub modules: Vec<ModuleSummary>,
    pub result: GenerationResult,
}

/// Eligible request count for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary {
    pub name: String,
    pub requests: usize,
}

impl fmt::Display for ModuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.requests {
            0 => write!(f, "{} (no controller)", self.name),
            1 => write!(f, "{} (1 request)", self.name),
            n => write!(f, "{} ({} requests)", self.name, n),
        }
    }
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        written: Vec<String>,
        /// Existing files left untouched.
        kept: Vec<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written {
                output_dir,
                written,
                kept,
            } => self.render_written(out, output_dir, written, kept),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(
        &self,
        out: &mut dyn Output,
        output_dir: &Path,
        written: &[String],
        kept: &[String],
    ) {
        out.text(&format!("{} v{}", self.project_name, self.version));
        out.field("Package", &self.package);
        out.blank();

        out.heading(&format!("Modules ({})", self.modules.len()));
        for module in &self.modules {
            out.item(&module.to_string());
        }
        out.blank();

        out.field("Generated", &output_dir.display().to_string());
        for path in written {
            out.created(path);
        }

        if !kept.is_empty() {
            out.blank();
            out.heading("Kept existing");
            for path in kept {
                out.item(path);
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.text(&file.content);
    }

    out.divider("Summary");
    out.text(&format!("{} files would be generated", files.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            project_name: "shop".to_string(),
            version: "0.1.0".to_string(),
            package: "com.example.shop".to_string(),
            modules: vec![ModuleSummary {
                name: "orders".to_string(),
                requests: 1,
            }],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written {
            output_dir: PathBuf::from("out"),
            written: vec!["src/main/java/com/example/shop/ShopApplication.java".to_string()],
            kept: vec!["pom.xml".to_string()],
        });

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "shop v0.1.0",
                "Package: com.example.shop",
                "",
                "Modules (1):",
                "  - orders (1 request)",
                "",
                "Generated: out",
                "  + src/main/java/com/example/shop/ShopApplication.java",
                "",
                "Kept existing:",
                "  - pom.xml",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(vec![PreviewFile {
            path: "README.md".to_string(),
            content: "# shop".to_string(),
        }]));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "-- README.md --",
                "# shop",
                "-- Summary --",
                "1 files would be generated",
            ]
        );
    }
}
