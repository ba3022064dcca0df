// Command handlers for the gridkeys CLI

pub mod classify;
pub mod generate;
pub mod grid;

pub use classify::ClassifyCommand;
pub use generate::{GenerateArgs, GenerateCommand};
pub use grid::GridCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
