//! Read-print loop around a drawing session.

use crate::help::CommandHelp;
use inkgrid_core::Session;
use std::io::{self, BufRead, Write};

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Text written before each command is read.
    pub prompt: String,
    /// Print the command reference once before the first prompt.
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "enter command: ".to_string(),
            show_help: true,
        }
    }
}

/// Main application struct. Owns one session for its whole lifetime.
pub struct App {
    config: AppConfig,
    session: Session,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            session: Session::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run over the process's stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run until a quit command or end of input.
    ///
    /// Every response is printed on its own line, including the empty
    /// rendering produced before any canvas exists.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<()> {
        if self.config.show_help {
            CommandHelp::write_all(&mut writer)?;
        }

        let mut buf = Vec::new();
        loop {
            write!(writer, "{}", self.config.prompt)?;
            writer.flush()?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                log::info!("End of input, leaving");
                writeln!(writer)?;
                break;
            }

            // Undecodable bytes become U+FFFD and fall through to "Unknown command".
            let line = String::from_utf8_lossy(&buf);
            let input = line.trim_end_matches(['\r', '\n']);
            let response = self.session.run_command(input);
            writeln!(writer, "{}", response.message())?;
            if response.should_exit() {
                break;
            }
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkgrid_core::FAREWELL;
    use std::io::Cursor;

    fn quiet() -> App {
        App::with_config(AppConfig {
            prompt: "> ".to_string(),
            show_help: false,
        })
    }

    fn drive(app: &mut App, input: impl AsRef<[u8]>) -> String {
        let mut out = Vec::new();
        app.run_with(Cursor::new(input.as_ref()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_config() {
        let app = App::new();
        assert_eq!(app.config().prompt, "enter command: ");
        assert!(app.config().show_help);
    }

    #[test]
    fn test_prints_canvas_and_stops_on_quit() {
        let mut app = quiet();
        let out = drive(&mut app, "C 3 1\nQ\nC 5 5\n");

        assert_eq!(out, format!("> -----\n|   |\n-----\n> {FAREWELL}\n"));
        let grid = app.session().state().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_errors_keep_looping() {
        let mut app = quiet();
        let out = drive(&mut app, "L 1 1 1 1\nfoo\nC 2 2\n");

        assert!(out.contains("> Invalid initialization: L 1 1 1 1\n"));
        assert!(out.contains("> Unknown command: foo\n"));
        assert!(out.contains("|  |\n"));
        assert!(app.session().state().is_some());
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut app = quiet();
        assert_eq!(drive(&mut app, ""), "> \n");
    }

    #[test]
    fn test_blank_line_is_unknown() {
        let mut app = quiet();
        let out = drive(&mut app, "\r\nQ\r\n");
        assert_eq!(out, format!("> Unknown command: \n> {FAREWELL}\n"));
    }

    #[test]
    fn test_help_printed_first() {
        let mut app = App::new();
        let out = drive(&mut app, "Q\n");
        assert!(out.starts_with("=== Commands ===\n"));
        assert!(out.ends_with(&format!("enter command: {FAREWELL}\n")));
    }

    #[test]
    fn test_invalid_utf8_keeps_looping() {
        let mut app = quiet();
        let out = drive(&mut app, b"\xff\xfe 1\nC 1 1\nQ\n");

        assert!(out.starts_with("> Unknown command: \u{FFFD}\u{FFFD} 1\n"));
        assert!(out.ends_with(&format!("> {FAREWELL}\n")));
        assert_eq!(app.session().history().len(), 1);
    }
}
