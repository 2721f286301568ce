//! # Address Range Model
//!
//! A continuous, inclusive range of addresses of one family, such as
//! `10.0.0.254-10.0.2.1`.

use std::fmt;

use crate::error::{Error, Result};
use crate::network::address::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    /// Validates that both endpoints share a family and 4-in-6 form and that
    /// `start <= end`. Equal endpoints make a one-address range.
    pub fn new(start: Address, end: Address) -> Result<Self> {
        if start.family() != end.family() || start.is_4in6() != end.is_4in6() {
            return Err(Error::TypeMismatch {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if start.octets() > end.octets() {
            return Err(Error::Order {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::spanning(start, end))
    }

    /// Endpoints already known to be ordered and of one type.
    pub(crate) fn spanning(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.start.family()
            && (self.start.to_bits()..=self.end.to_bits()).contains(&addr.to_bits())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Address> + Clone {
        let family = self.start.family();
        (self.start.to_bits()..=self.end.to_bits()).map(move |bits| Address::from_bits(family, bits))
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
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
