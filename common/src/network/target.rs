//! # Target Model
//!
//! The first token of an input line, interpreted as one of:
//! * A CIDR block (e.g., `192.168.1.0/24`, `2001:db8::/32`).
//! * An address range (e.g., `10.0.0.254-10.0.2.1`).
//!
//! Anything else is not a target and is left alone by the line processor.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::prefix::Prefix;
use crate::network::range::AddressRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Cidr(Prefix),
    Range(AddressRange),
}

impl Target {
    /// Classifies and parses a token.
    ///
    /// `Ok(None)` means the token is neither a CIDR nor a range; errors are
    /// only reported for tokens that look like one of them.
    pub fn parse(s: &str) -> Result<Option<Self>> {
        if let Some(target) = parse_cidr(s)? {
            return Ok(Some(target));
        }
        parse_range(s)
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)?.ok_or_else(|| Error::parse(s, "expected a CIDR or an address range"))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cidr(prefix) => write!(f, "{prefix}"),
            Target::Range(range) => write!(f, "{range}"),
        }
    }
}

/// A token with a `/` is always a CIDR.
fn parse_cidr(s: &str) -> Result<Option<Target>> {
    if !s.contains('/') {
        return Ok(None);
    }
    s.parse::<Prefix>().map(|prefix| Some(Target::Cidr(prefix)))
}

/// Splits once on `-` and parses both sides as full addresses.
fn parse_range(s: &str) -> Result<Option<Target>> {
    let Some((start_str, end_str)) = s.split_once('-') else {
        return Ok(None);
    };

    let start: Address = start_str.parse()?;
    let end: Address = end_str.parse()?;
    let range = AddressRange::new(start, end)?;

    Ok(Some(Target::Range(range)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
