//! Command reference shown at start-up.

use inkgrid_core::CommandKind;
use std::io::{self, Write};

/// Reference table for every supported command.
pub struct CommandHelp;

impl CommandHelp {
    /// One formatted row per command, in reference order.
    pub fn rows() -> Vec<String> {
        CommandKind::ALL
            .iter()
            .map(|kind| format!("  {:16} {}", kind.syntax(), kind.description()))
            .collect()
    }

    /// Write the table with its heading.
    pub fn write_all<W: Write>(writer: &mut W) -> io::Result<()> {
        writeln!(writer, "=== Commands ===")?;
        for row in Self::rows() {
            writeln!(writer, "{}", row)?;
        }
        writeln!(writer)
    }
}
