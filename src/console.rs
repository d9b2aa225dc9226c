//! Line-oriented console the session talks through.

use std::io::{self, BufRead, Stdout, Write};

/// A source of input lines and a sink for output lines.
pub trait Console {
    /// Reads one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
///
/// ```
/// use std::io::Cursor;
///
/// use blackjack::{Console, IoConsole};
///
/// let mut console = IoConsole::new(Cursor::new("hit\r\n"), Vec::new());
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("hit"));
/// assert_eq!(console.read_line().unwrap(), None);
///
/// console.write_line("You drew a 9 of Clubs.").unwrap();
/// assert_eq!(console.writer(), b"You drew a 9 of Clubs.\n");
/// ```
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoConsole<io::StdinLock<'static>, Stdout> {
    /// Creates a console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}
