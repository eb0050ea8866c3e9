// Output sinks for `imprimir`

use std::io::{self, Write};

/// Destination for the lines a program prints.
///
/// The interpreter hands over one complete line per print statement,
/// without the trailing newline.
pub trait Terminal {
    fn print_line(&mut self, text: &str, line: usize) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn print_line(&mut self, text: &str, line: usize) -> io::Result<()> {
        (**self).print_line(text, line)
    }
}

/// Mock terminal for capturing printed output
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|tl| tl.text.clone()).collect()
    }
}

impl Terminal for MockTerminal {
    fn print_line(&mut self, text: &str, line: usize) -> io::Result<()> {
        self.lines.push(TerminalLine {
            text: text.to_string(),
            line,
        });
        Ok(())
    }
}

/// A line of terminal output with the source line that printed it
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLine {
    pub text: String,
    pub line: usize,
}

/// Writes each line straight to an underlying writer, flushing as it goes so
/// output is visible before a later runtime error is reported.
#[derive(Debug)]
pub struct WriterTerminal<W: Write> {
    writer: W,
}

impl<W: Write> WriterTerminal<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal for WriterTerminal<W> {
    fn print_line(&mut self, text: &str, _line: usize) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}
