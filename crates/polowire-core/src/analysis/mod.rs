use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{debug, warn};

use crate::dispatch::{DecodeError, EventDispatcher};
use crate::protocols::frame::decode_frame;
use crate::protocols::water_polo::MessageKind;
use crate::source::{FrameEvent, FrameSource, HexFileSource, SourceError};
use crate::state::GameState;
use crate::{
    CaptureSummary, DEFAULT_GENERATED_AT, EventRecord, Issue, MessageTypeSummary, Report,
    make_stub_report,
};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_frame_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = HexFileSource::open(path)?;
    analyze_source(path, source)
}

pub fn analyze_source<S: FrameSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut frames_total = 0u64;
    let mut frames_decoded = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;
    let mut type_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut events = Vec::new();
    let mut issues = Vec::new();
    let mut dispatcher = EventDispatcher::new(GameState::default());

    while let Some(FrameEvent { line, ts, data }) = source.next_frame()? {
        frames_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);

        let frame = match decode_frame(&data) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(line, error = %err, "dropping undecodable frame");
                issues.push(decode_issue(line, &DecodeError::from(err)));
                continue;
            }
        };
        frames_decoded += 1;
        *type_counts.entry(frame.message_type.clone()).or_default() += 1;

        match dispatcher.dispatch(&frame) {
            Ok(Some(event)) => events.push(EventRecord {
                line,
                timestamp: ts_to_rfc3339(ts),
                event,
            }),
            Ok(None) => issues.push(Issue {
                line,
                kind: "skipped".to_string(),
                severity: "warning".to_string(),
                message: format!(
                    "incomplete timeouts data {:?} (type {})",
                    frame.payload, frame.message_type
                ),
            }),
            Err(err) => {
                debug!(line, error = %err, "rejecting payload");
                issues.push(decode_issue(line, &DecodeError::from(err)));
            }
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        frames_total,
        frames_decoded,
        events_total: events.len() as u64,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.message_types = build_message_type_summaries(type_counts);
    report.events = events;
    report.issues = issues;
    report.final_state = dispatcher.into_consumer();
    Ok(report)
}

fn decode_issue(line: u64, err: &DecodeError) -> Issue {
    Issue {
        line,
        kind: err.kind().to_string(),
        severity: "error".to_string(),
        message: err.to_string(),
    }
}

fn build_message_type_summaries(counts: BTreeMap<String, u64>) -> Vec<MessageTypeSummary> {
    counts
        .into_iter()
        .map(|(message_type, count)| MessageTypeSummary {
            kind: MessageKind::from_code(&message_type)
                .map_or("unknown", MessageKind::name)
                .to_string(),
            message_type,
            count,
        })
        .collect()
}

fn update_ts_bounds(
    first: &mut Option<OffsetDateTime>,
    last: &mut Option<OffsetDateTime>,
    ts: Option<OffsetDateTime>,
) {
    let ts = match ts {
        Some(ts) => ts,
        None => return,
    };
    match first {
        None => *first = Some(ts),
        Some(existing) => {
            if ts < *existing {
                *first = Some(ts);
            }
        }
    }
    match last {
        None => *last = Some(ts),
        Some(existing) => {
            if ts > *existing {
                *last = Some(ts);
            }
        }
    }
}

fn ts_to_rfc3339(ts: Option<OffsetDateTime>) -> Option<String> {
    ts.and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use time::OffsetDateTime;

    use super::{build_message_type_summaries, ts_to_rfc3339, update_ts_bounds};

    #[test]
    fn ts_bounds_track_min_and_max() {
        let mut first = None;
        let mut last = None;
        let t = |secs| OffsetDateTime::from_unix_timestamp(secs).ok();
        update_ts_bounds(&mut first, &mut last, t(20));
        update_ts_bounds(&mut first, &mut last, None);
        update_ts_bounds(&mut first, &mut last, t(10));
        update_ts_bounds(&mut first, &mut last, t(30));
        assert_eq!(first, t(10));
        assert_eq!(last, t(30));
    }

    #[test]
    fn rfc3339_formatting() {
        let ts = OffsetDateTime::from_unix_timestamp(1_709_316_005).ok();
        assert_eq!(ts_to_rfc3339(ts).as_deref(), Some("2024-03-01T18:00:05Z"));
        assert_eq!(ts_to_rfc3339(None), None);
    }

    #[test]
    fn message_type_summaries_name_known_codes() {
        let mut counts = BTreeMap::new();
        counts.insert("0042100015".to_string(), 2);
        counts.insert("0042100099".to_string(), 1);
        let summaries = build_message_type_summaries(counts);
        assert_eq!(summaries[0].kind, "score");
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].kind, "unknown");
        assert_eq!(summaries[1].message_type, "0042100099");
    }
}
