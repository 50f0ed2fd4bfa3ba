//! Indentation configuration for code generation.

/// Indentation unit for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Two spaces per level.
    pub const TWO: Self = Self::Spaces(2);

    /// Four spaces per level (Google/Oracle Java style).
    pub const FOUR: Self = Self::Spaces(4);

    /// Append `depth` indentation units to `buf`.
    pub fn write_to(&self, buf: &mut String, depth: usize) {
        match self {
            Self::Spaces(width) => {
                buf.extend(std::iter::repeat_n(' ', depth * usize::from(*width)))
            }
            Self::Tab => buf.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}
