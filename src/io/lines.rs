use std::io::{self, BufRead};

/// Reads input one line at a time, stripping trailing `\r` and `\n` only.
pub struct LineReader<R> {
    reader: R,
    buffer: String,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
        }
    }

    /// Returns the next stripped line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(strip_line_ending(&self.buffer)))
    }

    /// 1-based number of the line most recently returned.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
}

pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        let mut reader = LineReader::new(Cursor::new(input));
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line.to_owned());
        }
        lines
    }

    #[test]
    fn strips_unix_and_windows_endings() {
        assert_eq!(collect("::1\n2001:db8::1\r\n::2"), ["::1", "2001:db8::1", "::2"]);
    }

    #[test]
    fn keeps_other_whitespace() {
        assert_eq!(collect(" ::1 \t\n"), [" ::1 \t"]);
    }

    #[test]
    fn strips_mixed_trailing_endings() {
        assert_eq!(strip_line_ending("::1\r\r\n"), "::1");
        assert_eq!(strip_line_ending("\r\n"), "");
    }

    #[test]
    fn reports_empty_lines() {
        assert_eq!(collect("\n::1\n"), ["", "::1"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn counts_lines() {
        let mut reader = LineReader::new(Cursor::new("a\nb\n"));
        assert_eq!(reader.line_number(), 0);
        reader.next_line().unwrap();
        reader.next_line().unwrap();
        assert_eq!(reader.line_number(), 2);
        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut reader = LineReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert!(reader.next_line().is_err());
    }
}
