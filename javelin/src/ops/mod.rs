//! Operations behind the commands.
//!
//! Operations take a parsed project, do the work and return a report; they
//! never print.

mod check;
mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
