use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::{
    io::lines::LineReader,
    ptr::name::{ipv6_to_ptr, parse_address},
};

/// Converts addresses to `<name>.\tPTR` lines until end of input or an empty
/// line. The first invalid address aborts the run; lines already written stay
/// written. Returns the number of records emitted.
pub fn forward<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize> {
    let mut reader = LineReader::new(input);
    let mut written = 0;

    loop {
        let line_number = reader.line_number() + 1;
        let line = match reader.next_line() {
            Ok(Some(line)) if !line.is_empty() => line,
            Ok(_) => break,
            Err(err) => {
                output.flush().context("Failed to flush output")?;
                return Err(err).with_context(|| format!("Failed to read input line {line_number}"));
            }
        };

        let ip = match parse_address(line) {
            Ok(ip) => ip,
            Err(err) => {
                output.flush().context("Failed to flush output")?;
                return Err(err).with_context(|| format!("Invalid input on line {line_number}"));
            }
        };

        writeln!(output, "{}.\tPTR", ipv6_to_ptr(&ip)).context("Failed to write record")?;
        written += 1;
    }

    output.flush().context("Failed to flush output")?;
    Ok(written)
}
