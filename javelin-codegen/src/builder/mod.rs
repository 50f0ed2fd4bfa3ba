//! Code generation building blocks.
//!
//! - [`LineBuffer`] - Append-only lines tagged with their depth
//! - [`CodeBuilder`] - Brace-scoped emission with callback bodies
//! - [`Scope`] - Composer returned by [`CodeBuilder::open_scope`]
//! - [`CodeFragment`] / [`Renderable`] - Declarative nodes rendered through the builder
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod line_buffer;
mod renderable;

pub use code_builder::{CodeBuilder, Scope};
pub use indent::Indent;
pub use line_buffer::{Line, LineBuffer};
pub use renderable::{CodeFragment, Renderable};
