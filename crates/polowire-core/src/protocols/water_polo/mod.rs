//! Water polo payload decoding.
//!
//! The ten-digit message type selects a micro-format for the payload:
//! `MM:SS` clocks, plain integers, fixed-offset digit groups, and repeated
//! fixed-width records (penalty timers in 7-byte chunks, penalty counts in
//! 3-byte chunks). Numeric fields are trimmed of padding before parsing.
//!
//! Repeated records are walked with an explicit cursor; a trailing partial
//! record is an error, never silently dropped. Codes and widths are defined
//! in `layout`, the cursor and field readers in `reader`.

pub mod error;
pub mod event;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::PayloadError;
pub use event::{MessageKind, PenaltyCounts, PenaltyTimer, ScoreboardEvent};
pub use parser::parse_event;
