//! InkGrid Application
//!
//! The interactive shell: reads one command per line, hands it to a
//! [`inkgrid_core::Session`] and prints the rendered canvas or the error.

mod app;
mod help;

pub use app::{App, AppConfig};
pub use help::CommandHelp;
