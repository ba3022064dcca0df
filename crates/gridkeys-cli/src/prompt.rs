// Interactive prompts for profile settings

use std::collections::VecDeque;

use gridkeys_core::{Faction, Grid, Modifier};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Source of answers to interactive questions
pub trait Prompter {
    /// Ask a question and return the answer line, without the newline
    fn ask(&mut self, question: &str) -> CliResult<String>;

    /// Report a rejected answer before asking again
    fn warn(&mut self, message: &str);
}

/// Reads answers from the terminal
pub struct RustylinePrompter {
    editor: DefaultEditor,
    style: OutputStyle,
}

impl RustylinePrompter {
    pub fn new() -> CliResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| CliError::Prompt(e.to_string()))?;
        Ok(Self {
            editor,
            style: OutputStyle::default(),
        })
    }
}

impl Prompter for RustylinePrompter {
    fn ask(&mut self, question: &str) -> CliResult<String> {
        println!("{}", self.style.prompt(question));
        match self.editor.readline("> ") {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(CliError::Prompt("input cancelled".to_string()))
            }
            Err(e) => Err(CliError::Prompt(e.to_string())),
        }
    }

    fn warn(&mut self, message: &str) {
        println!("{}", self.style.warning(message));
    }
}

/// Answers questions from a fixed script
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> CliResult<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CliError::Prompt(format!("no answer for: {}", question)))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

/// Check a yes/no answer; anything containing `y` counts as yes
pub fn is_yes(answer: &str) -> bool {
    answer.to_lowercase().contains('y')
}

/// Ask for the faction, repeating until a known one is given
pub fn ask_faction(prompter: &mut dyn Prompter) -> CliResult<Faction> {
    loop {
        let answer = prompter.ask("What race do you play?")?;
        match answer.parse::<Faction>() {
            Ok(faction) => return Ok(faction),
            Err(e) => prompter.warn(&e.to_string()),
        }
    }
}

/// Ask whether to use a custom grid, and read its three rows if so
pub fn ask_grid(prompter: &mut dyn Prompter) -> CliResult<Option<Grid>> {
    let answer = prompter.ask("Do you want to use a custom grid? [Y/N]")?;
    if !is_yes(&answer) {
        return Ok(None);
    }

    let first = prompter.ask(
        "Type the first line of the grid as lowercase letters separated by spaces (e.g., 'q w e r t')",
    )?;
    let second = prompter.ask("Type second line:")?;
    let third = prompter.ask("Type third line:")?;

    let grid = Grid::from_rows(&[first, second, third])
        .map_err(|e| CliError::Generate(e.into()))?;
    Ok(Some(grid))
}

/// Ask whether to prefix grid keys with a modifier
pub fn ask_prefix(prompter: &mut dyn Prompter) -> CliResult<Option<Modifier>> {
    let answer = prompter.ask("Prefix grid hotkeys with another key (e.g., Shift or Ctrl)? [Y/N]")?;
    if !is_yes(&answer) {
        return Ok(None);
    }

    loop {
        let answer = prompter.ask("Type prefix (format like 'Shift', 'Alt', 'Control'):")?;
        match answer.parse::<Modifier>() {
            Ok(modifier) => return Ok(Some(modifier)),
            Err(e) => prompter.warn(&e.to_string()),
        }
    }
}

/// Ask for the profile name
pub fn ask_profile_name(prompter: &mut dyn Prompter) -> CliResult<String> {
    loop {
        let answer = prompter.ask("What should the name of the hotkey profile be? (no space)")?;
        let name = answer.trim();
        if !name.is_empty() && !name.contains(char::is_whitespace) {
            return Ok(name.to_string());
        }
        prompter.warn("Profile name cannot be empty or contain spaces");
    }
}
