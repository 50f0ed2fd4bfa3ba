//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, ModuleSummary};
pub use output::{Report, TerminalOutput};
