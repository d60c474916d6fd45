use std::net::Ipv6Addr;

use super::error::PtrError;

pub const IP6_ARPA: &str = "ip6.arpa";

const NIBBLE_COUNT: usize = 32;

/// Parses a textual IPv6 literal, keeping the offending text in the error.
pub fn parse_address(input: &str) -> Result<Ipv6Addr, PtrError> {
    input
        .parse::<Ipv6Addr>()
        .map_err(|_| PtrError::InvalidAddress(input.to_owned()))
}

/// Builds the nibble-reversed reverse lookup name, without the root period.
pub fn ipv6_to_ptr(ip: &Ipv6Addr) -> String {
    let value = u128::from(*ip);
    let mut name = String::with_capacity(NIBBLE_COUNT * 2 + IP6_ARPA.len());

    // Least significant nibble first
    for index in 0..NIBBLE_COUNT {
        let nibble = ((value >> (4 * index)) & 0xf) as u32;
        name.push(char::from_digit(nibble, 16).unwrap_or('0'));
        name.push('.');
    }

    name.push_str(IP6_ARPA);
    name
}

/// Recovers the address from an `ip6.arpa` name. The root period is optional
/// and both the suffix and the nibbles are matched case-insensitively.
pub fn ptr_to_ipv6(name: &str) -> Result<Ipv6Addr, PtrError> {
    let invalid = || PtrError::InvalidPointer(name.to_owned());

    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let split_at = trimmed
        .len()
        .checked_sub(IP6_ARPA.len() + 1)
        .ok_or_else(invalid)?;
    let (nibbles, suffix) = trimmed.split_at_checked(split_at).ok_or_else(invalid)?;
    if !suffix.eq_ignore_ascii_case(".ip6.arpa") {
        return Err(invalid());
    }

    let mut value: u128 = 0;
    let mut count = 0;
    for (index, label) in nibbles.split('.').enumerate() {
        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let nibble = c.to_digit(16).ok_or_else(invalid)?;
        if index >= NIBBLE_COUNT {
            return Err(invalid());
        }
        value |= u128::from(nibble) << (4 * index);
        count += 1;
    }

    if count != NIBBLE_COUNT {
        return Err(invalid());
    }

    Ok(Ipv6Addr::from(value))
}

/// Renders all eight groups zero-padded, e.g.
/// `2001:0470:0000:0071:0000:0000:0000:0002`.
pub fn expanded_address(ip: &Ipv6Addr) -> String {
    ip.segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}
