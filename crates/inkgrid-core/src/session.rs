//! Command dispatch and session state.

use std::collections::HashMap;

use crate::commands::{Command, CommandKind};
use crate::error::{CommandError, CommandResult};
use crate::grid::Grid;
use crate::render::render;

/// What the caller should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The rendered canvas after a successful command.
    Render(String),
    /// A rejection message. The session state is unchanged.
    Error(String),
    /// A farewell message. The caller should stop reading commands.
    Exit(String),
}

impl Response {
    /// The text to print.
    pub fn message(&self) -> &str {
        match self {
            Response::Render(text) | Response::Error(text) | Response::Exit(text) => text,
        }
    }

    /// Check whether the caller should terminate.
    pub fn should_exit(&self) -> bool {
        matches!(self, Response::Exit(_))
    }
}

/// A drawing session: the current canvas plus every command applied to it.
///
/// State and history change only when a command succeeds.
#[derive(Debug, Clone)]
pub struct Session {
    state: Option<Grid>,
    commands: Vec<Command>,
    registry: HashMap<&'static str, CommandKind>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with no canvas.
    pub fn new() -> Self {
        let registry = CommandKind::ALL
            .into_iter()
            .map(|kind| (kind.keyword(), kind))
            .collect();
        Self {
            state: None,
            commands: Vec::new(),
            registry,
        }
    }

    /// Run one line and translate the outcome for display.
    pub fn run_command(&mut self, line: &str) -> Response {
        match self.dispatch(line) {
            Ok(grid) => Response::Render(render(Some(grid))),
            Err(CommandError::UserExit(message)) => {
                log::info!("Session ended after {} commands", self.commands.len());
                Response::Exit(message)
            }
            Err(err) => {
                log::debug!("Rejected {:?}: {}", line, err);
                Response::Error(err.to_string())
            }
        }
    }

    /// Run one line, returning the new canvas or the typed failure.
    ///
    /// On error the current state and history are untouched.
    pub fn dispatch(&mut self, line: &str) -> CommandResult<&Grid> {
        let kind = self.lookup(line)?;
        let mut command = Command::new(kind, self.state.clone(), line);
        let next = command.execute()?;
        log::debug!("Applied {:?}", command.line());
        self.commands.push(command);
        let grid: &Grid = self.state.insert(next);
        Ok(grid)
    }

    /// Resolve the command kind from the first token of `line`.
    pub fn lookup(&self, line: &str) -> CommandResult<CommandKind> {
        line.split_whitespace()
            .next()
            .and_then(|keyword| self.registry.get(keyword).copied())
            .ok_or_else(|| CommandError::UnknownCommand(line.to_string()))
    }

    /// The current canvas, if one has been created.
    pub fn state(&self) -> Option<&Grid> {
        self.state.as_ref()
    }

    /// Successfully applied commands in execution order.
    pub fn history(&self) -> &[Command] {
        &self.commands
    }

    /// Render the current canvas; empty when none exists.
    pub fn render(&self) -> String {
        render(self.state.as_ref())
    }
}
