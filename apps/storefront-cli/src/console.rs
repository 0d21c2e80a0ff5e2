//! Line-oriented terminal I/O.
//!
//! Generic over the reader and writer so the menu can be driven from a
//! `Cursor` in tests and from locked stdin/stdout in the binary.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `text` without a newline and reads one line back.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 are
    /// replaced, so they reach the caller as an unparseable entry.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_lines_until_eof() {
        let mut console = Console::new(Cursor::new("3\r\n x \n"), Vec::new());

        assert_eq!(console.prompt("a: ").unwrap().as_deref(), Some("3"));
        assert_eq!(console.prompt("b: ").unwrap().as_deref(), Some(" x "));
        assert_eq!(console.prompt("c: ").unwrap(), None);

        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "a: b: c: ");
    }

    #[test]
    fn test_prompt_survives_invalid_utf8() {
        let input = vec![0xff, 0xfe, b'\n', b'1', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let garbled = console.prompt("a: ").unwrap().unwrap();
        assert!(garbled.parse::<i64>().is_err());
        assert_eq!(console.prompt("b: ").unwrap().as_deref(), Some("1"));
    }
}
