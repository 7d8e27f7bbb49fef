//! Polowire core library: water polo scoreboard frame decoding.
//!
//! A scoreboard controller emits frames made of a two-byte message id, an
//! ETB/SYN marker, an optional eight-digit block, a ten-digit message type
//! and an ASCII payload. This crate decodes the envelope (`decode_frame`),
//! interprets the payload by message type (`parse_event`) and notifies a
//! consumer through `EventDispatcher`. Decoding is byte-oriented and side
//! effect free; capture files are read only by the `source` module and the
//! offline `analysis` pass built on top of it.
//!
//! Invariants:
//! - A frame decodes completely or not at all; there is no partial record.
//! - Unknown message types are never errors.
//! - A rejected payload never reaches the consumer.
//! - Report outputs are deterministic and stable across runs.
//!
//! # Examples
//! ```
//! use polowire_core::{EventDispatcher, GameState, ScoreboardEvent};
//!
//! let mut dispatcher = EventDispatcher::new(GameState::default());
//! let event = dispatcher.process_message(b"A1\x17\x16\x010042100015\x020714")?;
//! assert_eq!(event, Some(ScoreboardEvent::Score { home: 7, away: 14 }));
//! # Ok::<(), polowire_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod dispatch;
mod protocols;
mod source;
mod state;

pub use analysis::{AnalysisError, analyze_frame_file, analyze_source};
pub use dispatch::{DecodeError, EventConsumer, EventDispatcher, emit};
pub use protocols::frame::{DecodedFrame, FrameError, decode_frame, encode_frame};
pub use protocols::water_polo::{
    MessageKind, PayloadError, PenaltyCounts, PenaltyTimer, ScoreboardEvent, parse_event,
};
pub use source::{FrameEvent, FrameSource, HexFileSource, HexSource, SourceError};
pub use state::{GameState, ScoreState, TeamPenalties, TimeoutsState};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded capture with deterministic ordering.
///
/// # Examples
/// ```
/// use polowire_core::make_stub_report;
///
/// let report = make_stub_report("match.hex", 123);
/// assert_eq!(report.report_version, polowire_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp: last capture time, else first, else the epoch.
    pub generated_at: String,

    /// Input capture metadata.
    pub input: InputInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Frame counts per type code, sorted by code.
    pub message_types: Vec<MessageTypeSummary>,
    /// Events in capture order.
    pub events: Vec<EventRecord>,
    /// Rejected or skipped frames in capture order.
    pub issues: Vec<Issue>,
    /// Game state after the last frame.
    pub final_state: GameState,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Capture totals (timestamps may be absent).
///
/// # Examples
/// ```
/// use polowire_core::CaptureSummary;
///
/// let summary = CaptureSummary {
///     frames_total: 10,
///     frames_decoded: 9,
///     events_total: 8,
///     time_start: None,
///     time_end: None,
/// };
/// assert_eq!(summary.frames_total - summary.frames_decoded, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Records read from the capture.
    pub frames_total: u64,
    /// Records whose envelope decoded.
    pub frames_decoded: u64,
    /// Events produced by dispatch.
    pub events_total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// Frame count for one message type code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTypeSummary {
    pub message_type: String,
    /// Event kind name, or `unknown`.
    pub kind: String,
    pub count: u64,
}

/// One dispatched event and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Capture line of the frame.
    pub line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub event: ScoreboardEvent,
}

/// A frame that produced no event.
///
/// # Examples
/// ```
/// use polowire_core::Issue;
///
/// let issue = Issue {
///     line: 4,
///     kind: "payload".to_string(),
///     severity: "error".to_string(),
///     message: "payload too short: need 4 bytes, got 3".to_string(),
/// };
/// assert_eq!(issue.kind, "payload");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub line: u64,
    /// `frame`, `encoding`, `payload` or `skipped`.
    pub kind: String,
    /// `error` or `warning`.
    pub severity: String,
    pub message: String,
}

/// Build a stub report with base fields filled and empty aggregates.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "polowire".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        message_types: vec![],
        events: vec![],
        issues: vec![],
        final_state: GameState::default(),
    }
}
