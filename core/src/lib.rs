//! # iprefix core
//!
//! Converts CIDR blocks and address ranges into wildcard prefix patterns such
//! as `10.1.*` or `2001:db8::*`, for block and allow lists that match on the
//! textual form of an address.
//!
//! * **[`expander`]**: one CIDR block, one word of variability.
//! * **[`decomposer`]**: an arbitrary range, peeled at both ends and expanded in the middle.
//!
//! All functions are pure and may be called from any number of threads.

mod compress;
pub mod decomposer;
pub mod expander;

use iprefix_common::error::Result;
use iprefix_common::network::prefix::Prefix;
use iprefix_common::network::range::AddressRange;
use iprefix_common::network::target::Target;

pub use decomposer::decompose;
pub use expander::expand;

/// Expands `"<address>/<bits>"`.
pub fn expand_cidr(text: &str) -> Result<Vec<String>> {
    let prefix: Prefix = text.parse()?;
    Ok(expand(&prefix))
}

/// Decomposes the range between two addresses of the same type.
pub fn expand_range(start_text: &str, end_text: &str) -> Result<Vec<String>> {
    let range = AddressRange::new(start_text.parse()?, end_text.parse()?)?;
    Ok(decompose(&range))
}

/// Patterns for an already validated target. Cannot fail: every check
/// happens while the target is parsed.
pub fn resolve(target: &Target) -> Vec<String> {
    match target {
        Target::Cidr(prefix) => expand(prefix),
        Target::Range(range) => decompose(range),
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
