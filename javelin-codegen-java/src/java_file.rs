//! Java compilation unit layout: package, imports, one top-level type.

use eyre::Result;
use javelin_codegen::{CodeBuilder, ImportCollector, Indent};

/// A Java source file with a single top-level declaration.
///
/// The declaration body is built first, so imports discovered while emitting
/// it still land in the import block above it.
///
/// # Example
///
/// ```
/// use javelin_codegen::Indent;
/// use javelin_codegen_java::JavaSource;
///
/// let source = JavaSource::new("com.example.model", Indent::TWO)
///     .render("public class Empty", |_, _| Ok(()))
///     .unwrap();
///
/// assert_eq!(source, "package com.example.model;\n\npublic class Empty {\n}");
/// ```
#[derive(Debug, Clone)]
pub struct JavaSource {
    package: String,
    imports: ImportCollector,
    indent: Indent,
}

impl JavaSource {
    pub fn new(package: impl Into<String>, indent: Indent) -> Self {
        Self {
            package: package.into(),
            imports: ImportCollector::new(),
            indent,
        }
    }

    /// Add a fully qualified import up front.
    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        self.imports.add(qualified);
        self
    }

    /// Render the file. `declaration` may span several lines, e.g. an
    /// annotation followed by `public class Foo`.
    ///
    /// A failing body fails the whole file; nothing partial is returned.
    pub fn render<F>(mut self, declaration: &str, body: F) -> Result<String>
    where
        F: FnOnce(&mut CodeBuilder, &mut ImportCollector) -> Result<()>,
    {
        let mut declaration_code = CodeBuilder::new(self.indent);
        let imports = &mut self.imports;
        declaration_code.scope(declaration, |b| body(b, imports))?;

        let mut code = CodeBuilder::new(self.indent);
        code.line(format!("package {};", self.package));
        code.blank();

        let needed: Vec<&str> = self.imports.needed_from(&self.package).collect();
        if !needed.is_empty() {
            code.each(needed, |b, import| {
                b.line(format!("import {};", import));
            });
            code.blank();
        }

        Ok(format!("{}\n{}", code.build(), declaration_code.build()))
    }
}
