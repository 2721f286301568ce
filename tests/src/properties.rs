#![cfg(test)]
use crate::util::{assert_tiles, hits, v4, v4_bits};
use iprefix_common::network::address::{Address, Family};
use iprefix_common::network::prefix::Prefix;
use iprefix_common::network::range::AddressRange;
use iprefix_core::{decompose, expand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 0x5eed_1b7e;
const ROUNDS: usize = 300;

fn random_range(rng: &mut StdRng) -> (u32, u32) {
    // Mix widths of every magnitude, not just huge ones
    let magnitude = rng.random_range(0..=32u32);
    let width = if magnitude == 32 {
        u32::MAX
    } else {
        rng.random_range(0..(1u32 << magnitude))
    };
    let start = rng.random_range(0..=u32::MAX - width);
    (start, start + width)
}

#[test]
fn v4_ranges_tile_exactly() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let (start, end) = random_range(&mut rng);
        let range = AddressRange::new(v4(start), v4(end)).unwrap();
        let patterns = decompose(&range);
        assert_tiles(&patterns, start, end);
    }
}

#[test]
fn v4_ranges_match_edges_once() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    for _ in 0..ROUNDS {
        let (start, end) = random_range(&mut rng);
        let range = AddressRange::new(v4(start), v4(end)).unwrap();
        let patterns = decompose(&range);

        let inside = [start, end, rng.random_range(start..=end)];
        for bits in inside {
            assert!(range.contains(&v4(bits)));
            assert_eq!(hits(&patterns, &v4(bits)), 1, "{} in {range}", v4(bits));
        }

        let mut outside = Vec::new();
        if start > 0 {
            outside.push(start - 1);
        }
        if end < u32::MAX {
            outside.push(end + 1);
        }
        for bits in outside {
            assert_eq!(hits(&patterns, &v4(bits)), 0, "{} outside {range}", v4(bits));
        }
    }
}

#[test]
fn v4_prefixes_tile_their_block() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);
    for _ in 0..ROUNDS {
        let prefix = Prefix::new(v4(rng.random()), rng.random_range(0..=32)).unwrap();
        let block = prefix.to_range();
        assert_tiles(&expand(&prefix), v4_bits(&block.start()), v4_bits(&block.end()));
    }
}

#[test]
fn v4_prefix_agrees_with_its_range() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 3);
    for _ in 0..ROUNDS {
        let prefix = Prefix::new(v4(rng.random()), rng.random_range(0..=32)).unwrap();
        let expanded: BTreeSet<String> = expand(&prefix).into_iter().collect();
        let decomposed: BTreeSet<String> = decompose(&prefix.to_range()).into_iter().collect();
        assert_eq!(expanded, decomposed, "{prefix}");
    }
}

/// Random IPv6 address, often with leading zero words so that the `::`
/// compression lands in every position.
fn random_v6(rng: &mut StdRng) -> Address {
    let shift = rng.random_range(0..128u32);
    Address::from_bits(Family::V6, rng.random::<u128>() >> shift)
}

/// Random IPv6 prefix of at least 64 bits, outside the 4-in-6 space.
fn random_v6_prefix(rng: &mut StdRng) -> Prefix {
    loop {
        let addr = random_v6(rng);
        if !addr.is_4in6() {
            return Prefix::new(addr, rng.random_range(64..=128)).unwrap();
        }
    }
}

#[test]
fn v6_prefixes_match_their_edges() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 5);
    for _ in 0..ROUNDS {
        let prefix = random_v6_prefix(&mut rng);
        let block = prefix.to_range();
        for patterns in [expand(&prefix), decompose(&block)] {
            for edge in [block.start(), block.end()] {
                assert!(
                    hits(&patterns, &edge) >= 1,
                    "{edge} of {prefix} not in {patterns:?}"
                );
            }
        }
    }
}

#[test]
fn v6_prefix_agrees_with_its_range() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 6);
    for _ in 0..ROUNDS {
        let prefix = random_v6_prefix(&mut rng);
        let expanded: BTreeSet<String> = expand(&prefix).into_iter().collect();
        let decomposed: BTreeSet<String> = decompose(&prefix.to_range()).into_iter().collect();
        assert_eq!(expanded, decomposed, "{prefix}");
    }
}

#[test]
fn v6_blocks_spelling_mapped_bytes_are_covered() {
    for text in ["::/80", "::/72", "::fffe:0:0/95", "::1/80", "::38e/73"] {
        let prefix: Prefix = text.parse().unwrap();
        let block = prefix.to_range();
        let patterns = expand(&prefix);
        assert!(patterns.iter().all(|p| !p.contains('.')), "{text}: {patterns:?}");
        for edge in [block.start(), block.end()] {
            assert!(hits(&patterns, &edge) >= 1, "{edge} of {text}");
        }
    }
}

#[test]
fn singletons_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 4);
    for _ in 0..ROUNDS {
        let addr = if rng.random_bool(0.5) {
            Address::from_bits(Family::V4, u128::from(rng.random::<u32>()))
        } else {
            Address::from_bits(Family::V6, rng.random::<u128>())
        };
        let expected = vec![addr.to_string()];

        let range = AddressRange::new(addr, addr).unwrap();
        assert!(range.is_single());
        assert_eq!(decompose(&range), expected);

        let prefix = Prefix::new(addr, addr.family().width()).unwrap();
        assert_eq!(expand(&prefix), expected);
    }
}

#[test]
fn v6_last_word_range_matches_every_address_once() {
    let start: Address = "2001:db8::fff0".parse().unwrap();
    let end: Address = "2001:db8::1:10".parse().unwrap();
    let range = AddressRange::new(start, end).unwrap();
    let patterns = decompose(&range);
    assert_eq!(patterns.len(), 33);

    for addr in range.iter() {
        assert_eq!(hits(&patterns, &addr), 1, "{addr} in {patterns:?}");
    }
    for text in ["2001:db8::ffef", "2001:db8::1:11"] {
        let addr: Address = text.parse().unwrap();
        assert_eq!(hits(&patterns, &addr), 0, "{text}");
    }
}
