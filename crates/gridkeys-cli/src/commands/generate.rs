// Profile generation command

use std::path::PathBuf;

use gridkeys_core::{Faction, GenerationRequest, Grid, HotkeyGenerator, Modifier};

use super::Command;
use crate::config::GridkeysConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use crate::prompt::{self, Prompter, RustylinePrompter};

/// Values for `gridkeys generate` collected from the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub faction: Option<String>,
    pub grid: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub non_interactive: bool,
    pub verbose: bool,
}

/// Generate and save a hotkey profile
pub struct GenerateCommand {
    pub args: GenerateArgs,
    pub config: GridkeysConfig,
}

impl GenerateCommand {
    pub fn new(args: GenerateArgs, config: GridkeysConfig) -> Self {
        Self { args, config }
    }

    /// Build the generation request from flags, config, then prompts
    ///
    /// Prompts are only asked for values that are still missing, in the
    /// order faction, grid, prefix, name.
    pub fn resolve_request(&self, prompter: &mut dyn Prompter) -> CliResult<GenerationRequest> {
        let faction = match &self.args.faction {
            Some(name) => Some(
                name.parse::<Faction>()
                    .map_err(|e| CliError::InvalidArgument { message: e.to_string() })?,
            ),
            None => None,
        };

        let grid = match &self.args.grid {
            Some(rows) => Some(Grid::from_rows(rows).map_err(|e| CliError::InvalidArgument {
                message: e.to_string(),
            })?),
            None => self.config.grid()?,
        };

        let modifier = match &self.args.prefix {
            Some(name) => Some(
                name.parse::<Modifier>()
                    .map_err(|e| CliError::InvalidArgument { message: e.to_string() })?,
            ),
            None => self.config.modifier()?,
        };

        let interactive = !self.args.non_interactive;
        let grid_configured = self.args.grid.is_some() || self.config.grid.is_some();
        let prefix_configured = self.args.prefix.is_some() || self.config.prefix.is_some();

        let faction = match faction {
            Some(faction) => faction,
            None if interactive => prompt::ask_faction(prompter)?,
            None => return Err(missing("--faction")),
        };

        let grid = if grid_configured || !interactive {
            grid
        } else {
            prompt::ask_grid(prompter)?
        };

        let modifier = if prefix_configured || !interactive {
            modifier
        } else {
            prompt::ask_prefix(prompter)?
        };

        let name = match &self.args.name {
            Some(name) => name.clone(),
            None if interactive => prompt::ask_profile_name(prompter)?,
            None => return Err(missing("--name")),
        };

        let mut request = GenerationRequest::new(faction, name);
        if let Some(grid) = grid {
            request = request.with_grid(grid);
        }
        if let Some(modifier) = modifier {
            request = request.with_modifier(modifier);
        }
        Ok(request)
    }

    /// Resolve, generate and save, returning the written path
    pub fn run_with(&self, prompter: &mut dyn Prompter) -> CliResult<PathBuf> {
        let style = OutputStyle::default();

        // Sources are loaded before any prompt is shown
        let sources = self.config.sources(self.args.data_dir.as_deref())?;
        let generator = HotkeyGenerator::load(&sources)?.verbose(self.args.verbose);

        let request = self.resolve_request(prompter)?;
        let (profile, summary) = generator.generate_with_summary(&request)?;

        let output_dir = self
            .args
            .output_dir
            .clone()
            .or_else(|| self.config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        let path = profile
            .save(&output_dir)
            .map_err(|e| CliError::Generate(e.into()))?;

        println!("{}", style.key_value("faction", &style.faction(request.faction.name())));
        println!(
            "{}",
            style.key_value(
                "hotkeys",
                &format!(
                    "{} written ({} of {} pairings kept for this race)",
                    summary.remapped, summary.retained, summary.loaded
                )
            )
        );
        println!("{}", style.success(&format!("Saved {}", path.display())));

        Ok(path)
    }
}

impl Command for GenerateCommand {
    fn execute(&self) -> CliResult<()> {
        if self.args.non_interactive {
            // Never prompts, so no terminal is needed
            let mut prompter = prompt::ScriptedPrompter::default();
            self.run_with(&mut prompter)?;
        } else {
            let mut prompter = RustylinePrompter::new()?;
            self.run_with(&mut prompter)?;
        }
        Ok(())
    }
}

fn missing(flag: &str) -> CliError {
    CliError::InvalidArgument {
        message: format!("{} is required with --non-interactive", flag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_resolve_from_flags_never_prompts() {
        let args = GenerateArgs {
            faction: Some("Terran".to_string()),
            prefix: Some("alt".to_string()),
            name: Some("TerranGrid".to_string()),
            non_interactive: true,
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());
        let mut prompter = ScriptedPrompter::default();

        let request = command.resolve_request(&mut prompter).unwrap();
        assert_eq!(request.faction, Faction::Terran);
        assert_eq!(request.prefix, "Alt+");
        assert!(request.grid.is_none());
        assert!(prompter.questions.is_empty());
    }

    #[test]
    fn test_resolve_prompts_in_order() {
        let command = GenerateCommand::new(GenerateArgs::default(), GridkeysConfig::default());
        let mut prompter = ScriptedPrompter::new(["protoss", "n", "y", "Shift", "MyGrid"]);

        let request = command.resolve_request(&mut prompter).unwrap();
        assert_eq!(request.faction, Faction::Protoss);
        assert_eq!(request.prefix, "Shift+");
        assert_eq!(request.profile_name, "MyGrid");
        assert_eq!(prompter.questions.len(), 5);
    }

    #[test]
    fn test_config_grid_skips_grid_prompt() {
        let config = GridkeysConfig {
            grid: Some(vec![
                "1 2 3 4 5".to_string(),
                "q w e r t".to_string(),
                "a s d f g".to_string(),
            ]),
            ..Default::default()
        };
        let command = GenerateCommand::new(GenerateArgs::default(), config);
        let mut prompter = ScriptedPrompter::new(["zerg", "n", "ZergGrid"]);

        let request = command.resolve_request(&mut prompter).unwrap();
        assert_eq!(request.grid.unwrap().get(0), Some("1"));
    }

    #[test]
    fn test_non_interactive_requires_faction() {
        let args = GenerateArgs {
            name: Some("Grid".to_string()),
            non_interactive: true,
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());
        let result = command.resolve_request(&mut ScriptedPrompter::default());
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn test_bad_grid_flag() {
        let args = GenerateArgs {
            faction: Some("zerg".to_string()),
            grid: Some(vec!["q w e".to_string()]),
            name: Some("Grid".to_string()),
            non_interactive: true,
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());
        let result = command.resolve_request(&mut ScriptedPrompter::default());
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }
}
