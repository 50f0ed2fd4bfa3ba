//! Declarative code fragments.
//!
//! Nodes that know their shape up front can describe it as [`CodeFragment`]s
//! and let [`CodeBuilder::emit`](super::CodeBuilder::emit) lay them out through
//! the same scope machinery used by callback-driven code.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code.
    Line(String),
    /// A blank line.
    Blank,
    /// A single-line Javadoc comment.
    Javadoc(String),
    /// A brace-delimited block with its body.
    Scope {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn javadoc(s: impl Into<String>) -> Self {
        Self::Javadoc(s.into())
    }

    pub fn scope(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Scope {
            header: header.into(),
            body,
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Types that can describe themselves as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
