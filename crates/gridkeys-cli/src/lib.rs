// Gridkeys CLI Library

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod router;

pub use config::GridkeysConfig;
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use prompt::{Prompter, RustylinePrompter, ScriptedPrompter};
pub use router::{Cli, CommandRouter, Commands};
