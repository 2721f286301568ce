//! # CIDR Prefix Model
//!
//! An address plus a prefix length, e.g. `10.0.0.0/8` or `2001:db8::/32`.
//! Host bits are kept as given; the pattern generators mask them out.

use std::fmt;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::range::AddressRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    addr: Address,
    bits: u8,
}

impl Prefix {
    /// Fails with [`Error::PrefixLength`] when `bits` exceeds the address width.
    pub fn new(addr: Address, bits: u8) -> Result<Self> {
        IpNetwork::new(addr.to_ip(), bits).map_err(|_| Error::PrefixLength {
            bits,
            width: addr.family().width(),
        })?;
        Ok(Self { addr, bits })
    }

    pub fn addr(&self) -> Address {
        self.addr
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_single_ip(&self) -> bool {
        self.bits == self.addr.family().width()
    }

    /// The first and last address of the block.
    pub fn to_range(&self) -> AddressRange {
        let family = self.addr.family();
        let width = u32::from(family.width());
        let host_bits = width - u32::from(self.bits);
        let host_mask: u128 = if host_bits == 0 {
            0
        } else {
            u128::MAX >> (128 - host_bits)
        };

        let value = self.addr.to_bits();
        let start = Address::from_bits(family, value & !host_mask);
        let end = Address::from_bits(family, value | host_mask);
        AddressRange::spanning(start, end)
    }
}

impl FromStr for Prefix {
    type Err = Error;

    /// Parses `<address>/<bits>`. The length is plain decimal without sign or
    /// leading zeros.
    fn from_str(s: &str) -> Result<Self> {
        let Some((addr_str, bits_str)) = s.split_once('/') else {
            return Err(Error::parse(s, "missing prefix length"));
        };

        let addr: Address = addr_str.parse()?;

        let well_formed = !bits_str.is_empty()
            && bits_str.bytes().all(|b| b.is_ascii_digit())
            && (bits_str == "0" || !bits_str.starts_with('0'));
        if !well_formed {
            return Err(Error::parse(s, format!("bad prefix length '{bits_str}'")));
        }
        let bits = bits_str
            .parse::<u8>()
            .map_err(|e| Error::parse(s, format!("bad prefix length '{bits_str}': {e}")))?;

        Self::new(addr, bits)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
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
