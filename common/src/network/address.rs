//! # Address Codec
//!
//! Holds an IPv4 or IPv6 address as a big-endian byte buffer and exposes it as
//! a sequence of *words*, the unit the pattern generators enumerate over:
//!
//! * IPv4: four 8-bit words (the octets).
//! * IPv6: eight 16-bit words (the groups).
//!
//! Formatting is the RFC 5952 text of `std::net`: lower-case hex, the leftmost
//! longest run of at least two zero groups collapsed to `::`, and IPv4-mapped
//! addresses rendered as `::ffff:a.b.c.d`.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub const fn word_count(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 8,
        }
    }

    pub const fn word_bits(self) -> u8 {
        match self {
            Family::V4 => 8,
            Family::V6 => 16,
        }
    }

    pub const fn word_max(self) -> u16 {
        match self {
            Family::V4 => 0xff,
            Family::V6 => 0xffff,
        }
    }

    /// Address width in bits.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    const fn byte_len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// An address with word-level access.
///
/// The 4-in-6 tag is taken from the bytes at construction and survives word
/// edits, so a generator keeps treating the tail as dotted decimal while it
/// rewrites it. Formatting always looks at the current bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: Family,
    octets: [u8; 16],
    mapped: bool,
}

impl Address {
    pub fn family(&self) -> Family {
        self.family
    }

    /// `true` for IPv6 addresses constructed in the `::ffff:a.b.c.d` form.
    pub fn is_4in6(&self) -> bool {
        self.mapped
    }

    pub fn octets(&self) -> &[u8] {
        &self.octets[..self.family.byte_len()]
    }

    pub fn word(&self, index: usize) -> u16 {
        match self.family {
            Family::V4 => u16::from(self.octets[index]),
            Family::V6 => u16::from_be_bytes([self.octets[2 * index], self.octets[2 * index + 1]]),
        }
    }

    /// Writes word `index`. IPv4 keeps only the low 8 bits of `value`.
    pub fn set_word(&mut self, index: usize, value: u16) {
        match self.family {
            Family::V4 => self.octets[index] = value as u8,
            Family::V6 => self.octets[2 * index..2 * index + 2].copy_from_slice(&value.to_be_bytes()),
        }
    }

    /// Same bytes, with the 4-in-6 tag derived again from them.
    pub fn normalized(self) -> Self {
        Self::from(self.to_ip())
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => {
                let [a, b, c, d, ..] = self.octets;
                IpAddr::V4(Ipv4Addr::new(a, b, c, d))
            }
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.octets)),
        }
    }

    /// Numeric value, right-aligned.
    pub fn to_bits(&self) -> u128 {
        match self.to_ip() {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        }
    }

    /// Canonical text with every IPv6 group in hex, even where the bytes spell
    /// an IPv4-mapped address.
    pub fn to_hex_string(&self) -> String {
        match self.to_ip() {
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => {
                // Words 0..=4 are zero and always form the longest run
                let [.., w6, w7] = v6.segments();
                format!("::ffff:{w6:x}:{w7:x}")
            }
            ip => ip.to_string(),
        }
    }

    /// Builds an address of `family` from its numeric value. Bits above the
    /// family width are dropped.
    pub fn from_bits(family: Family, bits: u128) -> Self {
        match family {
            Family::V4 => Self::from(Ipv4Addr::from(bits as u32)),
            Family::V6 => Self::from(Ipv6Addr::from(bits)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        let mut octets = [0u8; 16];
        octets[..4].copy_from_slice(&addr.octets());
        Self {
            family: Family::V4,
            octets,
            mapped: false,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            family: Family::V6,
            octets: addr.octets(),
            mapped: addr.to_ipv4_mapped().is_some(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::from(v4),
            IpAddr::V6(v6) => Self::from(v6),
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<IpAddr>()
            .map(Self::from)
            .map_err(|e| Error::parse(s, e))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip())
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
