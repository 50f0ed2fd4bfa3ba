use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Result, bail};

/// A single emission unit that ends up as one file on disk.
pub trait GeneratedFile {
    /// Where the unit lands under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// Render the file content.
    ///
    /// Rendering may fail when a composition callback fails; in that case the
    /// partial content is dropped and nothing reaches the disk.
    fn render(&self) -> Result<String>;

    /// Render the file content with the header from [`FileRules`] prepended.
    fn render_with_header(&self) -> Result<String> {
        let body = self.render()?;
        Ok(match self.rules().header {
            Some(header) => format!("{}\n{}", header, body),
            None => body,
        })
    }

    /// The exact bytes that [`GeneratedFile::write`] puts on disk.
    fn render_bytes(&self) -> Result<Vec<u8>> {
        self.render_with_header().map(String::into_bytes)
    }

    /// Render and write under `base`, honoring the overwrite rule.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        if rules.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        let content = self.render_bytes()?;
        write_file(&path, content)?;
        Ok(WriteResult::Written)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An `IfMissing` file already existed and was left alone.
    Skipped,
}

/// Body of an in-memory [`File`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// Copied byte for byte; never decoded or given a header.
    Binary(Vec<u8>),
}

impl Content {
    /// Text content, or raw bytes that turn out to be valid UTF-8.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(err) => Self::Binary(err.into_bytes()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}

/// Text as is; binary content as a one-line placeholder.
impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Binary(bytes) => write!(f, "<binary file, {} bytes>", bytes.len()),
        }
    }
}

/// A file with already rendered content.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: Content,
    rules: FileRules,
}

impl File {
    /// A text file that is always overwritten and has no header.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_content(path, Content::Text(content.into()))
    }

    pub fn with_content(path: impl Into<PathBuf>, content: Content) -> Self {
        Self {
            path: path.into(),
            content,
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> Result<String> {
        match &self.content {
            Content::Text(text) => Ok(text.clone()),
            Content::Binary(_) => bail!("'{}' is a binary file", self.path.display()),
        }
    }

    fn render_bytes(&self) -> Result<Vec<u8>> {
        match &self.content {
            Content::Text(_) => self.render_with_header().map(String::into_bytes),
            Content::Binary(bytes) => Ok(bytes.clone()),
        }
    }
}

/// Overwrite policy and optional first line of a unit.
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Generated sources: always overwritten, marked with `header`.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(header),
        }
    }

    /// Scaffolding the user is expected to edit: written only once.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Generated sources.
    Always,
    /// Scaffolding owned by the user after the first run.
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Failing;

    impl GeneratedFile for Failing {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("Failing.java")
        }

        fn rules(&self) -> FileRules {
            FileRules::default()
        }

        fn render(&self) -> Result<String> {
            Err(eyre::eyre!("composition failed"))
        }
    }

    #[test]
    fn test_write_file_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("main").join("Foo.java");

        write_file(&path, "class Foo {}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "class Foo {}");
    }

    #[test]
    fn test_generated_file_replaces_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "original").unwrap();

        let result = File::new("a.txt", "updated").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_scaffolding_is_not_replaced() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pom.xml"), "mine").unwrap();

        let result = File::new("pom.xml", "theirs")
            .with_rules(FileRules::create_once())
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(temp.path().join("pom.xml")).unwrap(), "mine");
    }

    #[test]
    fn test_header_is_prepended() {
        let temp = TempDir::new().unwrap();
        File::new("Foo.java", "class Foo {}")
            .with_rules(FileRules::generated("// generated"))
            .write(temp.path())
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("Foo.java")).unwrap(),
            "// generated\nclass Foo {}"
        );
    }

    #[test]
    fn test_binary_file_is_written_verbatim() {
        let temp = TempDir::new().unwrap();
        let jar = vec![b'P', b'K', 3, 4, 0xff, 0xfe, 0];

        let file = File::with_content("lib/wrapper.jar", Content::from_bytes(jar.clone()))
            .with_rules(FileRules::generated("// generated"));
        assert_eq!(file.text(), None);
        assert_eq!(file.content().to_string(), "<binary file, 7 bytes>");
        assert!(file.render().is_err());

        file.write(temp.path()).unwrap();
        assert_eq!(fs::read(temp.path().join("lib/wrapper.jar")).unwrap(), jar);
    }

    #[test]
    fn test_utf8_bytes_become_text() {
        assert_eq!(
            Content::from_bytes(b"target/".to_vec()),
            Content::Text("target/".to_string())
        );
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let temp = TempDir::new().unwrap();

        assert!(Failing.write(temp.path()).is_err());
        assert!(!temp.path().join("Failing.java").exists());
    }
}
