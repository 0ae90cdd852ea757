//! `Q`: end the session.

use crate::error::{CommandError, CommandResult};
use crate::grid::Grid;

/// Message carried by the exit signal.
pub const FAREWELL: &str = "Thanks for using the program";

/// Always signals termination; trailing tokens are ignored.
pub(super) fn run(_input: &str) -> CommandResult<Grid> {
    Err(CommandError::UserExit(FAREWELL.to_string()))
}
