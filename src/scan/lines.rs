//! Line-at-a-time reading of source files.
//!
//! End of input is reported as `Ok(None)`, never as an error, so callers
//! can tell a short file apart from a failing one.

use std::io::{self, BufRead};

/// Reads text lines from a buffered reader, tracking the current line number.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_number: 0,
        }
    }

    /// Read the next line without its terminator (`\n` or `\r\n`).
    ///
    /// Returns `Ok(None)` at end of input. A final line that is not
    /// newline-terminated is still returned.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Number of the line most recently returned (1-based, 0 before the first read).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
