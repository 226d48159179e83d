//! Line-oriented console seam.
//!
//! The core never touches stdin/stdout; it asks a [`Console`] for lines and
//! hands it diagnostics. [`StdConsole`] is the terminal implementation and
//! [`ScriptedConsole`] replays canned input for tests and scripted runs.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Input token that ends a multi-line input loop.
pub const QUIT_SENTINEL: &str = "q";

pub trait Console {
    /// Shows `prompt` and reads one line without its terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn say(&mut self, message: &str);

    /// One-line diagnostic for a recoverable error.
    fn warn(&mut self, message: &str);
}

pub fn is_quit(input: &str) -> bool {
    input == "q" || input == "Q"
}

/// Exactly `y` or `Y`; everything else, including empty input, is a no.
pub fn is_affirmative(input: &str) -> bool {
    input == "y" || input == "Y"
}

/// Asks a yes/no question. End of input counts as "no".
pub fn confirm(console: &mut dyn Console, question: &str) -> Result<bool> {
    let answer = console.read_line(&format!("{question} (y/n): "))?;
    Ok(answer.as_deref().map(is_affirmative).unwrap_or(false))
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Terminal console: prompts and messages on stdout, warnings on stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush().ok();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(line)))
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Replays scripted input lines and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
    warnings: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Prompts, messages and warnings in the order they were produced.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// True when any transcript line contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.transcript.push(message.to_string());
        self.warnings.push(message.to_string());
    }
}
