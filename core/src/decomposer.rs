//! # Range Decomposer
//!
//! Splits an arbitrary `start-end` range into wildcard patterns.
//!
//! Both endpoints share the words before the first differing word, the
//! *prefix block*. Below it the endpoints are rarely aligned, so their lower
//! words are peeled first: the start is carried up word by word until it sits
//! on a block boundary, the end is borrowed down the same way. Each peeled
//! value becomes a single address (last word) or a block pattern (inner word).
//! What remains is an aligned span of the prefix block, which is expanded like
//! a CIDR block.
//!
//! ```text
//! 10.0.254.255-10.2.2.0
//!   start peel: 10.0.254.255, 10.0.255.*
//!   end peel:   10.2.2.0, 10.2.1.*, 10.2.0.*
//!   middle:     10.1.*
//! ```

use iprefix_common::network::address::Address;
use iprefix_common::network::range::AddressRange;
use tracing::debug;

use crate::compress::OCTET_STEP;
use crate::expander::expand_words;

/// Patterns covering exactly the addresses of `range`.
pub fn decompose(range: &AddressRange) -> Vec<String> {
    let (mut low, mut high) = (range.start(), range.end());
    let family = low.family();
    let word_max = u32::from(family.word_max());

    let Some(mut block) = (0..family.word_count()).position(|idx| low.word(idx) != high.word(idx))
    else {
        return vec![low.to_string()];
    };

    let mut patterns = Vec::new();
    peel(&mut low, block, Edge::Start, &mut patterns);
    peel(&mut high, block, Edge::End, &mut patterns);

    // The peeled words turned out to span the whole prefix block
    if block > 0 && low.word(block) == 0 && u32::from(high.word(block)) == word_max {
        block -= 1;
    }

    patterns.extend(expand_words(
        low,
        block,
        u32::from(low.word(block)),
        u32::from(high.word(block)),
    ));

    debug!(%range, block, count = patterns.len(), "decomposed range");
    patterns
}

/// Which endpoint is being aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// Walk up to the word maximum, then carry.
    Start,
    /// Walk down to zero, then borrow.
    End,
}

impl Edge {
    /// The value a word already aligned on this edge holds.
    fn aligned(self, word_max: u32) -> u32 {
        match self {
            Edge::Start => 0,
            Edge::End => word_max,
        }
    }

    /// Low byte at which a 4-in-6 tail switches to whole-octet steps.
    fn octet_edge(self) -> u32 {
        match self {
            Edge::Start => 0x00,
            Edge::End => 0xff,
        }
    }

    /// Text of the last octet that a `*` replaces in a whole-octet step.
    fn octet_text(self) -> &'static str {
        match self {
            Edge::Start => "0",
            Edge::End => "255",
        }
    }

    /// Applies a pending carry or borrow, wrapping inside the word.
    fn shift(self, value: u32, word_max: u32) -> u32 {
        match self {
            Edge::Start => (value + 1) & word_max,
            Edge::End => (value + word_max) & word_max,
        }
    }

    /// Next value to visit, or `None` once the word has run off its edge.
    fn advance(self, value: u32, step: u32, word_max: u32) -> Option<u32> {
        match self {
            Edge::Start => value.checked_add(step).filter(|next| *next <= word_max),
            Edge::End => value.checked_sub(step),
        }
    }
}

/// Aligns `addr` from the last word up to (not including) `block`, pushing
/// one pattern per visited value. On return `addr` holds the carried or
/// borrowed prefix block word and aligned lower words.
fn peel(addr: &mut Address, block: usize, edge: Edge, patterns: &mut Vec<String>) {
    let family = addr.family();
    let word_max = u32::from(family.word_max());
    let last_word = family.word_count() - 1;
    let mapped = addr.is_4in6();
    let mut pending = false;

    for idx in (block..=last_word).rev() {
        if pending {
            let shifted = edge.shift(u32::from(addr.word(idx)), word_max);
            addr.set_word(idx, shifted as u16);
        }
        if idx == block {
            break;
        }

        let mut value = u32::from(addr.word(idx));
        if value == edge.aligned(word_max) {
            continue;
        }

        let mut step = 1;
        loop {
            if mapped && step == 1 && value & 0xff == edge.octet_edge() {
                step = OCTET_STEP;
            }
            patterns.extend(peeled(*addr, idx, last_word, edge, mapped && step == OCTET_STEP));

            match edge.advance(value, step, word_max) {
                Some(next) => {
                    value = next;
                    addr.set_word(idx, value as u16);
                }
                None => {
                    addr.set_word(idx, edge.aligned(word_max) as u16);
                    break;
                }
            }
        }
        pending = true;
    }
}

/// Pattern(s) for one peeled value of word `idx`.
fn peeled(addr: Address, idx: usize, last_word: usize, edge: Edge, by_octet: bool) -> Vec<String> {
    if addr.is_4in6() {
        let text = addr.to_string();
        if by_octet {
            if let Some(head) = text.strip_suffix(edge.octet_text()) {
                return vec![format!("{head}*")];
            }
        }
        return vec![text];
    }

    if idx < last_word {
        let value = u32::from(addr.word(idx));
        return expand_words(addr.normalized(), idx, value, value);
    }

    vec![addr.to_string()]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
