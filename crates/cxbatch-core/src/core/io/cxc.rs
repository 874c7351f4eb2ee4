use crate::core::command::Command;
use crate::engine::executor::{CommandExecutor, ExecutorError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes dispatched commands to a ChimeraX command script (`.cxc`).
///
/// The host replays the script line by line, so dispatch order is preserved.
/// Status notes have no command equivalent and are written as `#` comments.
pub struct CxcScriptWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl CxcScriptWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CxcScriptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Writes leading comment lines, e.g. provenance of the script.
    pub fn write_header(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.writer, "# {}", line)?;
        }
        Ok(())
    }

    /// Number of command lines written so far (comments excluded).
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> CommandExecutor for CxcScriptWriter<W> {
    fn execute(&mut self, command: &Command) -> Result<(), ExecutorError> {
        writeln!(self.writer, "{}", command)?;
        self.lines_written += 1;
        Ok(())
    }

    fn status(&mut self, message: &str) {
        // A broken writer resurfaces on the next command.
        let _ = writeln!(self.writer, "# {}", message);
    }
}
