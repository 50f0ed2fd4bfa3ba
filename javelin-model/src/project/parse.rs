//! Project parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Project, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Filename used in diagnostics when parsing from a string.
pub const DEFAULT_FILENAME: &str = "javelin.toml";

impl FromStr for Project {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_project(s, DEFAULT_FILENAME)
    }
}

impl Project {
    /// Parse a javelin.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_project(&content, &path.display().to_string())
    }

    /// Parse a javelin.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_project(content, filename)
    }
}

/// Parse and validate a project. Any error here is a configuration error and
/// must stop the run before emission starts.
pub fn parse_project(content: &str, filename: &str) -> Result<Project> {
    let source_ctx = SourceContext::new(content, filename);
    let project: Project = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ParseContext::new(content, filename).validate_project(&project)?;
    Ok(project)
}
