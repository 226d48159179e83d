use std::path::{Path, PathBuf};
use stemtree::session::{ScriptedConsole, Session};
use stemtree::workspace::{AppConfig, Workspace};
use tempfile::TempDir;

/// Owns a throwaway workspace home plus a scratch area for created trees.
pub struct IntegrationHarness {
    home: TempDir,
    scratch: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp workspace"),
            scratch: TempDir::new().expect("failed to create scratch dir"),
        }
    }

    pub fn scratch(&self) -> &Path {
        self.scratch.path()
    }

    pub fn scratch_join(&self, relative: &str) -> PathBuf {
        self.scratch.path().join(relative)
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::at(self.home.path()).expect("failed to open workspace")
    }

    pub fn with_config(&self, config: AppConfig) -> Workspace {
        let mut workspace = self.workspace();
        workspace.config = config;
        workspace.save_config().expect("failed to save config");
        self.workspace()
    }

    /// Runs the interactive menu over scripted input and returns the console.
    pub fn run_session<I, S>(&self, workspace: &Workspace, input: I) -> ScriptedConsole
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = ScriptedConsole::new(input);
        Session::new(&mut console, workspace)
            .run()
            .expect("session failed");
        console
    }
}

mod config_settings;
mod copy_flow;
mod create_flow;
mod outline_flow;
mod templates_flow;
pub mod support;
