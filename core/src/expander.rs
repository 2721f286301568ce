//! # Prefix Expander
//!
//! Turns one CIDR block into wildcard patterns that vary a single word.
//! A `/14` IPv4 block becomes four `a.b.*` patterns, a `/111` IPv6 block two
//! `...:*` patterns, and a full-length prefix the address itself.

use iprefix_common::network::address::{Address, Family};
use iprefix_common::network::prefix::Prefix;
use tracing::debug;

use crate::compress;

/// Patterns covering exactly the addresses of `prefix`.
pub fn expand(prefix: &Prefix) -> Vec<String> {
    let addr = prefix.addr();
    if prefix.is_single_ip() {
        return vec![addr.to_string()];
    }

    let family = addr.family();
    let word_bits = u32::from(family.word_bits());
    let word_max = u32::from(family.word_max());
    let bits = u32::from(prefix.bits());

    // A /0 still varies the first word
    let block = (bits.saturating_sub(1) / word_bits) as usize;
    let rem = bits % word_bits;
    let variable_bits = if rem == 0 && bits != 0 { 0 } else { word_bits - rem };

    let first = u32::from(addr.word(block)) & (word_max << variable_bits) & word_max;
    let last = first + (1 << variable_bits) - 1;

    let patterns = expand_words(addr, block, first, last);
    debug!(%prefix, block, count = patterns.len(), "expanded prefix");
    patterns
}

/// Emits one pattern per value of word `block` in `first..=last`, in
/// ascending order. Words after `block` are wildcarded; an empty value range
/// yields nothing.
pub(crate) fn expand_words(addr: Address, block: usize, first: u32, last: u32) -> Vec<String> {
    match addr.family() {
        Family::V4 => expand_v4(addr, block, first, last),
        Family::V6 => compress::expand_v6(addr, block, first, last),
    }
}

fn expand_v4(mut addr: Address, block: usize, first: u32, last: u32) -> Vec<String> {
    let last_word = Family::V4.word_count() - 1;
    (first..=last)
        .map(|value| {
            addr.set_word(block, value as u16);
            let mut pattern = addr.octets()[..=block]
                .iter()
                .map(u8::to_string)
                .collect::<Vec<String>>()
                .join(".");
            if block < last_word {
                pattern.push_str(".*");
            }
            pattern
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
