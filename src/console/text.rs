use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

use super::UserConsole;

/// Console over a buffered reader and a writer.
pub struct TextConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl TextConsole<StdinLock<'static>, Stdout> {
    /// Console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> UserConsole for TextConsole<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(Error::Transport)?;
        if read == 0 {
            return Err(Error::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{content}").map_err(Error::Transport)?;
        self.writer.flush().map_err(Error::Transport)
    }
}
