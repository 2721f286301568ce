//! # IPv6 Pattern Compression
//!
//! IPv6 patterns are cut from the canonical text of an address, so they
//! inherit its `::` zero-run compression. Where the compressed run sits next
//! to the wildcard, a plain text match would miss addresses that compress
//! differently, so additional spellings of the same block are emitted:
//!
//! * `0:0:3333:0:*` next to `::3333:0:*` (explicit zero groups),
//! * `0:0:3333::*` (the zero word before the wildcard folded into `::`),
//! * `1111:0:0:4444:5555::` (a trailing `::` at the midpoint of the address).
//!
//! 4-in-6 addresses keep their dotted tail and are stepped one octet at a time
//! where the block allows it. A varying word above the tail is written in hex,
//! since every address of such a block either carries the `::ffff:` prefix
//! or none at all.

use iprefix_common::network::address::Address;

const LAST_WORD: usize = 7;
/// First word rendered as dotted decimal in a 4-in-6 address.
const DOTTED_WORD: usize = 6;
/// Blocks from here on never get rewritten spellings.
const REWRITE_LIMIT: usize = 5;
/// Resolved depth at which a rewritten pattern ends in `::`.
const OPEN_TAIL_DEPTH: isize = 4;
pub(crate) const OCTET_STEP: u32 = 0x100;

pub(crate) fn expand_v6(addr: Address, block: usize, first: u32, last: u32) -> Vec<String> {
    let mut compressor = Compressor::new(addr, block);
    let octet_end = octet_boundary(last);
    let mut patterns = Vec::new();
    let mut step = 1;
    let mut value = first;

    while value <= last {
        if compressor.mapped {
            if step == 1 && value & 0xff == 0 && value < octet_end {
                step = OCTET_STEP;
            } else if value >= octet_end {
                step = 1;
            }
        }
        patterns.extend(compressor.render(value, value == first, step == OCTET_STEP));
        value += step;
    }
    patterns
}

/// Last value of `last`'s word that may start a whole-octet step.
fn octet_boundary(last: u32) -> u32 {
    match last & 0xff {
        0x00 | 0xff => last,
        _ => last & 0xff00,
    }
}

/// Renders the patterns of one word position.
///
/// Every word after `block` is saturated to `0xffff` so it never joins a zero
/// run, and its fixed text is cut off the formatted address again. Outside the
/// dotted tail the text comes from the hex writer, because the saturated bytes
/// may spell an IPv4-mapped address (`::ffff:ffff:ffff` for `::/80`).
struct Compressor {
    addr: Address,
    block: usize,
    mapped: bool,
    tail: String,
    /// Explicit zero groups standing in for the `::` gap, fixed by the first value.
    filler: String,
}

impl Compressor {
    fn new(mut addr: Address, block: usize) -> Self {
        let mapped = addr.is_4in6() && block >= DOTTED_WORD;
        let mut tail = String::new();
        for idx in block + 1..=LAST_WORD {
            addr.set_word(idx, 0xffff);
            tail.push_str(if mapped { ".255.255" } else { ":ffff" });
        }

        Self {
            addr,
            block,
            mapped,
            tail,
            filler: String::from("0"),
        }
    }

    /// The primary pattern for `value` followed by its alternative spellings.
    fn render(&mut self, value: u32, first: bool, by_octet: bool) -> Vec<String> {
        self.addr.set_word(self.block, value as u16);
        let formatted = if self.mapped {
            self.addr.to_string()
        } else {
            self.addr.to_hex_string()
        };
        let mut text = formatted
            .strip_suffix(self.tail.as_str())
            .unwrap_or(&formatted)
            .to_string();

        if by_octet {
            if let Some(head) = text.strip_suffix(".0") {
                text = head.to_string();
            }
        }

        let mut depth = self.block + 1;
        if self.block < LAST_WORD || by_octet {
            text.push_str(if self.mapped { ".*" } else { ":*" });
            depth += 1;
        }

        let mut patterns = vec![text];
        if self.block < REWRITE_LIMIT {
            let variants = Groups::split(&patterns[0], depth).rewrite(self.block, first, &mut self.filler);
            patterns.extend(variants);
        }
        if !self.mapped && self.block < LAST_WORD {
            self.complete(&mut patterns);
        }
        patterns
    }

    /// Adds the spellings the block still misses when its lower words carry
    /// the longest zero run. Two addresses of the block are tried: all lower
    /// words zero, and a zero run starting one word further down.
    fn complete(&self, patterns: &mut Vec<String>) {
        let words: Vec<u16> = (0..=self.block).map(|idx| self.addr.word(idx)).collect();
        let explicit = join_hex(&words);

        for lead in [0u16, 1] {
            if lead == 1 && self.block + 2 > LAST_WORD {
                break;
            }
            let mut sample = self.addr;
            sample.set_word(self.block + 1, lead);
            for idx in self.block + 2..=LAST_WORD {
                sample.set_word(idx, 0);
            }

            let text = sample.to_string();
            if patterns.iter().any(|pattern| covers(pattern, &text)) {
                continue;
            }

            let merged = lead == 0 && words.last() == Some(&0);
            if merged {
                // The zero run reaches up into the block words
                let kept = words.iter().rposition(|word| *word != 0).map_or(0, |idx| idx + 1);
                patterns.push(format!("{}::*", join_hex(&words[..kept])));
            } else {
                patterns.push(format!("{explicit}:*"));
            }
        }
    }
}

fn join_hex(words: &[u16]) -> String {
    words.iter().map(|word| format!("{word:x}")).collect::<Vec<String>>().join(":")
}

/// Glob match of `pattern` against the text of an address.
fn covers(pattern: &str, text: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(head) => text.starts_with(head),
        None => text == pattern,
    }
}

/// Fold applied to the zero groups right before the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    None,
    /// `x:0:*` → `x::*`
    Single,
    /// `x:0:0:*` → `x::*`
    Double,
}

/// A pattern split on `:`, walked through three states: the leading empty
/// group, the internal `::` gap, and the zero run before the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Groups {
    parts: Vec<String>,
    /// Groups `::` hides, relative to the expected count.
    hidden: isize,
    /// Zero groups `::` stands for, counting a leading empty group.
    zeros: isize,
    rewritten: bool,
}

impl Groups {
    fn split(text: &str, depth: usize) -> Self {
        let parts: Vec<String> = text.split(':').map(str::to_owned).collect();
        let hidden = depth as isize - parts.len() as isize;
        Self {
            parts,
            hidden,
            zeros: hidden + 1,
            rewritten: false,
        }
    }

    /// A pattern starting with `::` gets an explicit leading zero.
    fn lead(&mut self) {
        if self.parts[0].is_empty() {
            self.parts[0] = String::from("0");
            self.rewritten = true;
            self.zeros += 1;
        }
    }

    /// Only short gaps are spelled out.
    fn gap_is_short(&self) -> bool {
        self.zeros < 3
    }

    /// Replaces the first interior empty group with `filler`.
    fn fill_gap(&mut self, filler: &str) {
        if let Some(gap) = self.parts.iter_mut().skip(1).find(|part| part.is_empty()) {
            *gap = filler.to_string();
            self.rewritten = true;
        }
    }

    /// Zero groups directly before the last group.
    fn pre_zero(&self) -> Fold {
        let count = self.parts[..self.parts.len() - 1]
            .iter()
            .rev()
            .take_while(|part| *part == "0")
            .count();
        match count {
            1 => Fold::Single,
            2 => Fold::Double,
            _ => Fold::None,
        }
    }

    fn join(&self) -> String {
        self.parts.join(":")
    }

    /// Runs the state machine and returns the alternative spellings.
    fn rewrite(mut self, block: usize, first: bool, filler: &mut String) -> Vec<String> {
        let mut variants = Vec::new();
        self.lead();
        if !self.gap_is_short() {
            return variants;
        }

        if first {
            for _ in 0..self.hidden.max(0) {
                filler.push_str(":0");
            }
        }
        self.fill_gap(filler);

        let count = self.parts.len();
        let mut resolved = block as isize;
        match self.pre_zero() {
            Fold::Double if count > 3 => {
                self.parts[count - 3].clear();
                self.parts[count - 2] = String::from("*");
                self.parts.truncate(count - 1);
                self.rewritten = true;
                resolved -= 2;
            }
            Fold::Single => {
                if count == 2 {
                    // ::/16
                    self.parts[count - 1] = String::from(":*");
                } else if self.rewritten {
                    variants.push(self.join());
                }
                self.parts[count - 2].clear();
                self.rewritten = true;
                resolved -= 1;
            }
            _ => {}
        }

        if self.rewritten {
            if resolved == OPEN_TAIL_DEPTH {
                if let Some(last) = self.parts.last_mut() {
                    *last = String::from(":");
                }
            }
            variants.push(self.join());
        }
        variants
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
