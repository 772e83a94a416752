//! Terminal rendering module for rich markdown output
//!
//! Markdown is rendered with termimad, with a plain-text fallback for
//! `--no-color` and non-interactive use.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Whether output is styled and redrawn in place
    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Redraws the current line, used for the live countdown.
    ///
    /// Plain output prints one line per update instead.
    pub fn status_line(&self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            write!(stdout, "\r\x1b[2K{line}")?;
        } else {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Ends a line started by [`status_line`](Self::status_line).
    pub fn finish_line(&self) -> Result<()> {
        if self.rich_enabled {
            println!();
        }
        Ok(())
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&self, question: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
