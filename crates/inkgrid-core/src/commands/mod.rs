//! Drawing commands and their undo/redo bookkeeping.

mod args;
mod canvas;
mod fill;
mod line;
mod quit;
mod rectangle;

pub use quit::FAREWELL;

use crate::error::{CommandResult, InvalidInput};
use crate::grid::Grid;

/// Available commands, one per keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateCanvas,
    DrawLine,
    DrawRectangle,
    BucketFill,
    Quit,
}

impl CommandKind {
    /// Every command kind, in reference order.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::CreateCanvas,
        CommandKind::DrawLine,
        CommandKind::DrawRectangle,
        CommandKind::BucketFill,
        CommandKind::Quit,
    ];

    /// The keyword that selects this command.
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::CreateCanvas => "C",
            CommandKind::DrawLine => "L",
            CommandKind::DrawRectangle => "R",
            CommandKind::BucketFill => "B",
            CommandKind::Quit => "Q",
        }
    }

    /// Full syntax for display.
    pub fn syntax(self) -> &'static str {
        match self {
            CommandKind::CreateCanvas => "C w h",
            CommandKind::DrawLine => "L x1 y1 x2 y2",
            CommandKind::DrawRectangle => "R x1 y1 x2 y2",
            CommandKind::BucketFill => "B x y c",
            CommandKind::Quit => "Q",
        }
    }

    /// One-line description for display.
    pub fn description(self) -> &'static str {
        match self {
            CommandKind::CreateCanvas => "Create a new canvas of width w and height h",
            CommandKind::DrawLine => "Draw a horizontal or vertical line from (x1,y1) to (x2,y2)",
            CommandKind::DrawRectangle => "Draw a rectangle with corners (x1,y1) and (x2,y2)",
            CommandKind::BucketFill => "Fill the blank area connected to (x,y) with colour c",
            CommandKind::Quit => "Quit the program",
        }
    }

    /// Validate `input` against `state` and produce the next grid.
    fn apply(self, input: &str, state: Option<&Grid>) -> CommandResult<Grid> {
        match self {
            CommandKind::CreateCanvas => canvas::run(input),
            CommandKind::DrawLine => line::run(input, state),
            CommandKind::DrawRectangle => rectangle::run(input, state),
            CommandKind::BucketFill => fill::run(input, state),
            CommandKind::Quit => quit::run(input),
        }
    }
}

/// One instruction bound to its raw input line and the snapshot it was
/// built against.
///
/// A command moves between pending and done: [`Command::execute`] and
/// [`Command::redo`] mark it done, [`Command::undo`] marks it pending again.
/// The line is parsed once, on execution; undo and redo only swap snapshots.
#[derive(Debug, Clone)]
pub struct Command {
    kind: CommandKind,
    line: String,
    /// Snapshot the command was built against.
    prev_state: Option<Grid>,
    /// Snapshot produced by execution.
    state: Option<Grid>,
    done: bool,
}

impl Command {
    /// Bind a command to a copy of the current state and its input line.
    pub fn new(kind: CommandKind, state: Option<Grid>, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
            prev_state: state,
            state: None,
            done: false,
        }
    }

    /// Validate and run the command, returning the new grid.
    ///
    /// On failure the command stays pending and nothing is recorded.
    pub fn execute(&mut self) -> CommandResult<Grid> {
        if self.state.is_some() {
            return Err(InvalidInput::AlreadyExecuted(self.line.clone()).into());
        }
        let next = self.kind.apply(&self.line, self.prev_state.as_ref())?;
        self.state = Some(next.clone());
        self.done = true;
        Ok(next)
    }

    /// Revert to the snapshot the command was built against.
    ///
    /// Returns `None` when the command was run before any canvas existed.
    pub fn undo(&mut self) -> CommandResult<Option<Grid>> {
        if !self.done {
            return Err(InvalidInput::UndoPending.into());
        }
        self.done = false;
        Ok(self.prev_state.clone())
    }

    /// Reapply the snapshot produced by execution.
    pub fn redo(&mut self) -> CommandResult<Grid> {
        if self.done {
            return Err(InvalidInput::RedoDone.into());
        }
        let state = self
            .state
            .clone()
            .ok_or_else(|| InvalidInput::NotExecuted(self.line.clone()))?;
        self.done = true;
        Ok(state)
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The raw input line.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn prev_state(&self) -> Option<&Grid> {
        self.prev_state.as_ref()
    }

    /// The post-execution snapshot, once executed.
    pub fn state(&self) -> Option<&Grid> {
        self.state.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::grid::{MARKER, Pos};

    fn canvas(width: i64, height: i64) -> Grid {
        Grid::new(width, height).unwrap()
    }

    #[test]
    fn test_keywords_are_unique() {
        let mut keywords: Vec<&str> = CommandKind::ALL.iter().map(|k| k.keyword()).collect();
        keywords.sort();
        keywords.dedup();
        assert_eq!(keywords.len(), CommandKind::ALL.len());
    }

    #[test]
    fn test_syntax_starts_with_keyword() {
        for kind in CommandKind::ALL {
            assert!(kind.syntax().starts_with(kind.keyword()));
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_execute_marks_done() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 20 4");
        assert!(!command.is_done());

        let grid = command.execute().unwrap();
        assert!(command.is_done());
        assert_eq!(command.state(), Some(&grid));
        assert_eq!(command.prev_state(), None);
        assert_eq!(command.line(), "C 20 4");
        assert_eq!(command.kind(), CommandKind::CreateCanvas);
    }

    #[test]
    fn test_failed_execute_stays_pending() {
        let mut command = Command::new(CommandKind::DrawLine, Some(canvas(20, 4)), "L 1 2 6 3");
        assert!(command.execute().is_err());
        assert!(!command.is_done());
        assert_eq!(command.state(), None);
    }

    #[test]
    fn test_execute_twice_is_rejected() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 2 2");
        command.execute().unwrap();
        assert_eq!(
            command.execute(),
            Err(CommandError::InvalidInput(InvalidInput::AlreadyExecuted("C 2 2".into())))
        );
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let before = canvas(20, 4);
        let mut command = Command::new(CommandKind::DrawLine, Some(before.clone()), "L 1 2 6 2");
        let after = command.execute().unwrap();
        assert_eq!(after.get(Pos::new(0, 1)), Some(MARKER));

        let undone = command.undo().unwrap();
        assert_eq!(undone, Some(before));
        assert!(!command.is_done());

        let redone = command.redo().unwrap();
        assert_eq!(redone, after);
        assert!(command.is_done());
    }

    #[test]
    fn test_undo_first_canvas_restores_nothing() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 3 3");
        command.execute().unwrap();
        assert_eq!(command.undo().unwrap(), None);
    }

    #[test]
    fn test_undo_pending_fails() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 3 3");
        assert_eq!(
            command.undo(),
            Err(CommandError::InvalidInput(InvalidInput::UndoPending))
        );
    }

    #[test]
    fn test_redo_done_fails() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 3 3");
        command.execute().unwrap();
        assert_eq!(
            command.redo(),
            Err(CommandError::InvalidInput(InvalidInput::RedoDone))
        );
        assert!(command.is_done());
    }

    #[test]
    fn test_redo_never_executed_fails() {
        let mut command = Command::new(CommandKind::CreateCanvas, None, "C 3 3");
        assert!(matches!(
            command.redo(),
            Err(CommandError::InvalidInput(InvalidInput::NotExecuted(_)))
        ));
        assert!(!command.is_done());
    }

    #[test]
    fn test_quit_never_completes() {
        let mut command = Command::new(CommandKind::Quit, Some(canvas(2, 2)), "Q");
        let err = command.execute().unwrap_err();
        assert!(err.is_exit());
        assert!(!command.is_done());
    }
}
