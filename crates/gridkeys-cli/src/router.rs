// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::config::GridkeysConfig;
use crate::error::CliResult;
use crate::logging;

/// Gridkeys - grid hotkey profiles for StarCraft II
#[derive(Parser, Debug)]
#[command(name = "gridkeys")]
#[command(bin_name = "gridkeys")]
#[command(about = "Generate faction-specific grid hotkey profiles for StarCraft II")]
#[command(
    long_about = "Gridkeys builds a .SC2Hotkeys profile for one race.\n\nEvery ability bound to a key on the 3x5 hotkey grid is moved onto your grid, optionally behind a modifier such as Shift. Abilities of other races are left out.\n\nQuick Start:\n  • gridkeys generate          Answer a few questions and write a profile\n  • gridkeys classify          Show which race each hotkey belongs to\n  • gridkeys grid              Show the reference and destination grids"
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: <config dir>/gridkeys/config.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a hotkey profile
    #[command(about = "Generate a .SC2Hotkeys profile, prompting for anything not given")]
    Generate {
        /// Race to build the profile for (protoss, terran, zerg, all)
        #[arg(short, long)]
        faction: Option<String>,

        /// Custom grid as three rows of five keys, e.g. "q w e r t"
        #[arg(long, num_args = 3, value_names = ["ROW1", "ROW2", "ROW3"])]
        grid: Option<Vec<String>>,

        /// Modifier to hold for every grid key (shift, control, alt)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Profile name, used as the file name
        #[arg(short, long)]
        name: Option<String>,

        /// Directory the profile is written to (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Directory holding units-buildings/ and the raw hotkey JSON
        #[arg(short, long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Fail instead of prompting for missing values
        #[arg(long)]
        non_interactive: bool,
    },

    /// Classify hotkeys by race
    #[command(about = "Show the race each hotkey is classified as")]
    Classify {
        /// Pairings (Label=KEY) or labels to classify; all raw hotkeys if omitted
        #[arg(value_name = "LABEL")]
        labels: Vec<String>,

        /// Directory holding units-buildings/ and the raw hotkey JSON
        #[arg(short, long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Show the key grids
    #[command(about = "Show the reference grid and the destination grid")]
    Grid,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Run an already parsed command line
    pub fn dispatch(cli: Cli) -> CliResult<()> {
        logging::init_logging(cli.verbose, cli.quiet);
        let config = GridkeysConfig::load(cli.config.as_deref())?;

        match cli.command.unwrap_or(Commands::Generate {
            faction: None,
            grid: None,
            prefix: None,
            name: None,
            output_dir: None,
            data_dir: None,
            non_interactive: false,
        }) {
            Commands::Generate {
                faction,
                grid,
                prefix,
                name,
                output_dir,
                data_dir,
                non_interactive,
            } => {
                let args = GenerateArgs {
                    faction,
                    grid,
                    prefix,
                    name,
                    output_dir,
                    data_dir,
                    non_interactive,
                    verbose: cli.verbose,
                };
                GenerateCommand::new(args, config).execute()
            }
            Commands::Classify { labels, data_dir } => {
                ClassifyCommand::new(labels, data_dir, config).execute()
            }
            Commands::Grid => GridCommand::new(config).execute(),
        }
    }
}
