//! InkGrid Core Library
//!
//! Character canvas, drawing commands and the session engine that turns one
//! line of text into a new canvas snapshot or a typed failure.

pub mod commands;
pub mod error;
pub mod grid;
pub mod render;
pub mod session;

pub use commands::{Command, CommandKind, FAREWELL};
pub use error::{CommandError, CommandResult, InvalidInput};
pub use grid::{BLANK, Grid, GridError, MARKER, Pos};
pub use render::render;
pub use session::{Response, Session};
