//! TerminalRenderer: flushes a rendered board to a real terminal.
//!
//! The board is composed in memory first (see [`crate::grid`]); this module
//! only turns finished rows into a crossterm command stream and writes it in
//! one go.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::sink::LineBuffer;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    clear_screen: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
            clear_screen: false,
        }
    }

    /// Clear the terminal and home the cursor before every draw.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Write every row of `board` to stdout.
    pub fn draw(&mut self, board: &LineBuffer) -> Result<()> {
        self.buf.clear();
        encode_into(board, self.clear_screen, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(&self.buf)?;
        out.flush()?;
        Ok(())
    }
}

/// Encode a full board into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_into(board: &LineBuffer, clear_screen: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear_screen {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
    }
    for line in board.lines() {
        out.queue(Print(line))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}
