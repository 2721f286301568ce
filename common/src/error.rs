use thiserror::Error;

/// Everything that can go wrong while turning text into wildcard patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed address or prefix text.
    #[error("invalid input '{input}': {reason}")]
    Parse { input: String, reason: String },
    /// Prefix length outside `[0, width]`.
    #[error("prefix length {bits} out of range for a {width}-bit address")]
    PrefixLength { bits: u8, width: u8 },
    /// Range endpoints of different families, or only one of them in the 4-in-6 form.
    #[error("not the same type: {start} vs {end}")]
    TypeMismatch { start: String, end: String },
    /// Range start greater than its end.
    #[error("{start} > {end}")]
    Order { start: String, end: String },
}

impl Error {
    pub fn parse(input: &str, reason: impl ToString) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
