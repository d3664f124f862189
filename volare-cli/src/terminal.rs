use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt/answer I/O, generic so scripted input can drive it.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line without its terminator.
    /// `None` means the input is exhausted. Invalid UTF-8 is replaced, not
    /// reported, so a stray byte cannot end the session.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }
}
