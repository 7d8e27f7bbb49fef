//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: control bytes, widths and offsets (source of truth)
//! - `reader`: safe access and protocol conventions
//! - `parser`: domain-level decoding (no direct indexing)
//! - `error`: explicit, actionable errors
//!
//! `frame` handles the control-byte envelope shared by every scoreboard
//! message; `water_polo` interprets the payload of each message type.
//! Parsers are pure and contain no I/O.

pub(crate) mod common;
pub mod frame;
pub mod water_polo;
