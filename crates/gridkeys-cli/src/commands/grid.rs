// Grid display command

use gridkeys_core::Grid;

use super::Command;
use crate::config::GridkeysConfig;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Print the reference grid and the destination grid in use
pub struct GridCommand {
    pub config: GridkeysConfig,
}

impl GridCommand {
    pub fn new(config: GridkeysConfig) -> Self {
        Self { config }
    }
}

impl Command for GridCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();

        println!("{}", style.header("Reference grid (source hotkeys)"));
        println!("{}", Grid::reference().render());
        println!();

        match self.config.grid()? {
            Some(grid) => {
                println!("{}", style.header("Configured grid"));
                println!("{}", grid.render());
            }
            None => {
                println!("{}", style.header("Default grid"));
                println!("{}", Grid::default().render());
            }
        }

        if let Some(modifier) = self.config.modifier()? {
            println!();
            println!("{}", style.info(&format!("Keys are prefixed with {}", modifier.prefix())));
        }

        Ok(())
    }
}
