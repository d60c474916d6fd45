use anyhow::{Context, Result};
use regex::Regex;
use std::{
    io::{BufRead, Write},
    net::Ipv6Addr,
    sync::LazyLock,
};

use crate::{
    io::lines::LineReader,
    log_warn,
    ptr::name::{expanded_address, ptr_to_ipv6},
};

static PTR_RECORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // owner [ttl] [class] PTR target [; comment]
    Regex::new(r"^(?P<owner>\S+)(?:\s+\S+)*?\s+(?i:PTR)\s+(?P<target>[^\s;]+)\s*(?:;.*)?$")
        .unwrap()
});

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReverseSummary {
    pub written: usize,
    pub skipped: usize,
}

/// A PTR record whose owner is an `ip6.arpa` name.
#[derive(Debug, PartialEq, Eq)]
pub struct PtrRecord<'a> {
    pub address: Ipv6Addr,
    pub target: &'a str,
}

/// Matches a zone file line against `owner ... PTR target`. Lines with any
/// other shape, or whose owner is not a full `ip6.arpa` name, give `None`.
pub fn parse_ptr_record(line: &str) -> Option<PtrRecord<'_>> {
    let captures = PTR_RECORD_REGEX.captures(line)?;
    let address = ptr_to_ipv6(captures.name("owner")?.as_str()).ok()?;
    let target = captures.name("target")?.as_str();

    Some(PtrRecord {
        address,
        target: target.strip_suffix('.').unwrap_or(target),
    })
}

/// Turns `ip6.arpa` PTR records back into `address\thost` lines. Reads to end
/// of input; lines that aren't such records are skipped.
pub fn reverse<R: BufRead, W: Write>(input: R, output: &mut W, verbose: bool) -> Result<ReverseSummary> {
    let mut reader = LineReader::new(input);
    let mut summary = ReverseSummary::default();

    loop {
        let line_number = reader.line_number() + 1;
        let line = match reader.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                output.flush().context("Failed to flush output")?;
                return Err(err).with_context(|| format!("Failed to read input line {line_number}"));
            }
        };

        if line.is_empty() {
            continue;
        }

        let Some(record) = parse_ptr_record(line) else {
            if verbose {
                log_warn!(format!("Skipping line {line_number}: {line}"));
            }
            summary.skipped += 1;
            continue;
        };

        writeln!(output, "{}\t{}", expanded_address(&record.address), record.target)
            .context("Failed to write address")?;
        summary.written += 1;
    }

    output.flush().context("Failed to flush output")?;
    Ok(summary)
}
