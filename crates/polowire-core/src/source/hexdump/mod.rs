//! Hex capture source.
//!
//! Captures are text files holding one already-delimited frame per line,
//! hex encoded, optionally preceded by an RFC3339 timestamp. Blank lines and
//! `#` comments are skipped. This module handles file I/O only; frames are
//! decoded downstream.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{HexFileSource, HexSource};
