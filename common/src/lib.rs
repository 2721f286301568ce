//! # iprefix common
//!
//! Shared models for the `iprefix` workspace.
//!
//! * **[`network`]**: addresses, prefixes, ranges and the targets parsed from input text.
//! * **[`error`]**: the error taxonomy shared by every crate.
//! * **[`config`]**: runtime settings handed down from the command line.

pub mod config;
pub mod error;
pub mod network;
