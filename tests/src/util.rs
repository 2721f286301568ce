#![cfg(test)]
use iprefix_common::network::address::{Address, Family};
use std::net::Ipv4Addr;

/// Glob match of a pattern against the canonical text of an address.
/// A trailing `*` matches any suffix, anything else must match exactly.
pub fn matches(pattern: &str, addr: &Address) -> bool {
    let text = addr.to_string();
    match pattern.strip_suffix('*') {
        Some(head) => text.starts_with(head),
        None => text == pattern,
    }
}

/// Number of patterns matching `addr`.
pub fn hits(patterns: &[String], addr: &Address) -> usize {
    patterns.iter().filter(|p| matches(p, addr)).count()
}

pub fn v4(bits: u32) -> Address {
    Address::from(Ipv4Addr::from(bits))
}

pub fn v4_bits(addr: &Address) -> u32 {
    assert_eq!(addr.family(), Family::V4);
    addr.to_bits() as u32
}

pub fn sorted<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut items: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    items.sort();
    items
}

/// Numeric span matched by an IPv4 pattern such as `10.1.*` or `10.1.2.3`.
pub fn v4_span(pattern: &str) -> (u64, u64) {
    let (body, open) = match pattern.strip_suffix(".*") {
        Some(body) => (body, true),
        None => (pattern, false),
    };
    let octets: Vec<u64> = body.split('.').map(|o| o.parse().unwrap()).collect();
    assert!(!octets.is_empty() && octets.len() <= 4, "{pattern}");
    assert!(open || octets.len() == 4, "{pattern}");

    let free_bits = 8 * (4 - octets.len() as u32);
    let base = octets.iter().fold(0u64, |acc, o| (acc << 8) | o) << free_bits;
    (base, base | ((1u64 << free_bits) - 1))
}

/// Asserts that the IPv4 patterns tile `start..=end` exactly, without gaps
/// or overlaps.
pub fn assert_tiles(patterns: &[String], start: u32, end: u32) {
    let mut spans: Vec<(u64, u64)> = patterns.iter().map(|p| v4_span(p)).collect();
    spans.sort();

    let mut next = u64::from(start);
    for (lo, hi) in spans {
        assert_eq!(lo, next, "gap or overlap at {lo} in {patterns:?}");
        next = hi + 1;
    }
    assert_eq!(next, u64::from(end) + 1, "range end not reached in {patterns:?}");
}
