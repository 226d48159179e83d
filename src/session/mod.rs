//! Interactive menu driving the planners and materializers.

pub mod console;
mod create;
pub mod prompts;
mod review;
mod transfer;

pub use console::{confirm, is_affirmative, is_quit, Console, ScriptedConsole, StdConsole};
pub use review::{review_outline, ReviewAction};

use anyhow::Result;

use crate::workspace::Workspace;

const MENU: &str = "\
Choose from below:
1. Create folder structure
2. Add template files to subdirectories
3. Copy a directory tree to other locations
q. Quit";

/// Top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateStructure,
    AddTemplates,
    CopyTree,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CreateStructure),
            "2" => Some(Self::AddTemplates),
            "3" => Some(Self::CopyTree),
            other if is_quit(other) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// One interactive run over a console.
pub struct Session<'a> {
    console: &'a mut dyn Console,
    workspace: &'a Workspace,
}

impl<'a> Session<'a> {
    pub fn new(console: &'a mut dyn Console, workspace: &'a Workspace) -> Self {
        Self { console, workspace }
    }

    /// Shows the menu until the user quits or input ends.
    ///
    /// Only console I/O failures are returned; filesystem problems inside a
    /// flow are reported and the menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        self.console.say("Welcome! What do you want to do today?");
        loop {
            self.console.say(MENU);
            let Some(line) = self.console.read_line("Your choice: ")? else {
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateStructure) => self.create_structure()?,
                Some(MenuChoice::AddTemplates) => self.add_templates()?,
                Some(MenuChoice::CopyTree) => self.copy_tree()?,
                Some(MenuChoice::Quit) => break,
                None => self.console.warn("Invalid choice. Please try again."),
            }
        }
        self.console.say("Bye!");
        Ok(())
    }
}
