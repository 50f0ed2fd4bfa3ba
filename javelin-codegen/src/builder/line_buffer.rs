//! Append-only storage of emitted lines.

use super::Indent;

/// One emitted line together with the depth it was emitted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub depth: usize,
}

/// Ordered, append-only sequence of lines tagged with their indentation depth.
///
/// Lines are never reordered or removed individually; [`LineBuffer::clear`]
/// drops everything at once. Indentation is applied only when rendering, so the
/// stored text is exactly what callers passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` at `depth`, one line per `\n`-separated piece.
    ///
    /// An empty string appends a single empty line.
    pub fn append(&mut self, text: &str, depth: usize) {
        for piece in text.split('\n') {
            self.lines.push(Line {
                text: piece.strip_suffix('\r').unwrap_or(piece).to_string(),
                depth,
            });
        }
    }

    /// Render all lines with `indent` units per depth level, joined by `\n`.
    ///
    /// Empty lines carry no indentation so the output has no trailing
    /// whitespace.
    pub fn render(&self, indent: Indent) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.text.is_empty() {
                indent.write_to(&mut out, line.depth);
                out.push_str(&line.text);
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
