//! Scoped, brace-balanced code emission.

use std::{convert::Infallible, fmt};

use super::{CodeFragment, Indent, LineBuffer, Renderable};

const OPEN: &str = "{";
const CLOSE: &str = "}";

/// Builds indented, brace-delimited source text.
///
/// The builder owns the current depth. Block bodies are passed as callbacks
/// that receive the builder itself, so nesting is expressed as nested calls and
/// no caller ever tracks indentation or counts braces.
///
/// # Example
///
/// ```
/// use javelin_codegen::builder::CodeBuilder;
///
/// let mut code = CodeBuilder::default();
/// code.block("public class Foo", |b| {
///     b.line("int x;");
/// });
///
/// assert_eq!(code.render(), "public class Foo {\n  int x;\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: LineBuffer,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: LineBuffer::new(),
        }
    }

    /// Add a line of code at the current depth.
    ///
    /// Text containing line breaks is stored as several lines at the same depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buffer.append(text.as_ref(), self.depth);
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.append("", self.depth);
        self
    }

    /// Add a line comment (`// text`).
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(format!("// {}", text))
    }

    /// Add a single-line Javadoc comment (`/** text */`).
    pub fn javadoc(&mut self, text: &str) -> &mut Self {
        self.line(format!("/** {} */", text))
    }

    /// Open a brace-delimited block.
    ///
    /// Emits `header {` and enters the block. The returned [`Scope`] runs the
    /// body and closes the block; dropping it unused leaves an empty block.
    pub fn open_scope(&mut self, header: impl AsRef<str>) -> Scope<'_> {
        let header = header.as_ref();
        if header.is_empty() {
            self.line(OPEN);
        } else {
            self.line(format!("{} {}", header, OPEN));
        }
        self.depth += 1;
        Scope {
            builder: self,
            failed: false,
        }
    }

    /// Open a block and fill it with a fallible body.
    pub fn scope<E, F>(&mut self, header: impl AsRef<str>, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut CodeBuilder) -> Result<(), E>,
    {
        self.open_scope(header).add(f)?;
        Ok(self)
    }

    /// Open a block and fill it with an infallible body.
    pub fn block<F>(&mut self, header: impl AsRef<str>, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.open_scope(header).fill(f);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut CodeBuilder, T),
    {
        for item in items {
            f(self, item);
        }
        self
    }

    /// Emit a [`Renderable`] node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(s);
            }
            CodeFragment::Blank => {
                self.blank();
            }
            CodeFragment::Javadoc(s) => {
                self.javadoc(&s);
            }
            CodeFragment::Scope { header, body } => {
                self.block(header, |b| {
                    for f in body {
                        b.apply_fragment(f);
                    }
                });
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The emitted lines so far.
    pub fn lines(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Render the emitted lines. Repeated calls yield the same string.
    pub fn render(&self) -> String {
        self.buffer.render(self.indent)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.render()
    }
}

impl fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// An open block returned by [`CodeBuilder::open_scope`].
///
/// Whatever happens to the body, the depth increment made by `open_scope` is
/// undone exactly once when the scope goes away. The closing brace is emitted
/// only when the body completed: a failed or panicking body leaves the block
/// open, and the unit it belongs to must be discarded.
#[must_use = "a scope is closed as soon as it is dropped"]
pub struct Scope<'a> {
    builder: &'a mut CodeBuilder,
    failed: bool,
}

impl Scope<'_> {
    /// Run `f` as the block body, then close the block.
    ///
    /// If `f` returns an error the depth is still restored, but no closing
    /// brace is written and the error is handed back to the caller.
    pub fn add<E, F>(mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut CodeBuilder) -> Result<(), E>,
    {
        let result = f(self.builder);
        self.failed = result.is_err();
        result
    }

    /// Run an infallible body, then close the block.
    pub fn fill<F>(self, f: F)
    where
        F: FnOnce(&mut CodeBuilder),
    {
        let result: Result<(), Infallible> = self.add(|b| {
            f(b);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.builder.depth -= 1;
        if !self.failed && !std::thread::panicking() {
            self.builder.line(CLOSE);
        }
    }
}
