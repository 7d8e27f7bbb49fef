use tracing::warn;

use super::error::PayloadError;
use super::event::{MessageKind, PenaltyCounts, PenaltyTimer, ScoreboardEvent};
use super::layout;
use super::reader::PayloadReader;

/// Parse the payload of one message into a scoreboard event.
///
/// Unrecognized type codes always succeed as `ScoreboardEvent::Unknown`.
/// Returns `Ok(None)` only for a timeouts payload shorter than two bytes,
/// which is skipped with a warning instead of rejected.
///
/// # Examples
/// ```
/// use polowire_core::{ScoreboardEvent, parse_event};
///
/// let event = parse_event("0042100000", "02:15").unwrap();
/// assert_eq!(event, Some(ScoreboardEvent::GameTime { seconds: 135 }));
/// ```
///
/// # Errors
/// Returns `PayloadError` when a recognized payload violates its format.
pub fn parse_event(
    message_type: &str,
    payload: &str,
) -> Result<Option<ScoreboardEvent>, PayloadError> {
    let Some(kind) = MessageKind::from_code(message_type) else {
        return Ok(Some(ScoreboardEvent::Unknown {
            message_type: message_type.to_string(),
            payload: payload.to_string(),
        }));
    };

    let reader = PayloadReader::new(payload)?;
    let event = match kind {
        MessageKind::GameTime => ScoreboardEvent::GameTime {
            seconds: reader.read_clock()?,
        },
        MessageKind::ShotTime => ScoreboardEvent::ShotTime {
            seconds: reader.read_whole_u32("shot time")?,
        },
        MessageKind::TimeoutTimer => ScoreboardEvent::TimeoutTimer {
            seconds: reader.read_clock()?,
        },
        MessageKind::Score => parse_score(&reader)?,
        MessageKind::TimeoutsLeft => return parse_timeouts_left(&reader),
        MessageKind::Period => ScoreboardEvent::Period {
            number: reader.read_whole_u32("period")?,
        },
        MessageKind::HomePenaltyTimer => ScoreboardEvent::HomePenaltyTimers {
            timers: parse_penalty_timers(&reader)?,
        },
        MessageKind::AwayPenaltyTimer => ScoreboardEvent::AwayPenaltyTimers {
            timers: parse_penalty_timers(&reader)?,
        },
        MessageKind::HomePenalties => ScoreboardEvent::HomePenalties {
            counts: parse_penalty_counts(&reader)?,
        },
        MessageKind::AwayPenalties => ScoreboardEvent::AwayPenalties {
            counts: parse_penalty_counts(&reader)?,
        },
    };
    Ok(Some(event))
}

fn parse_score(reader: &PayloadReader<'_>) -> Result<ScoreboardEvent, PayloadError> {
    reader.require_len(layout::SCORE_LEN)?;
    Ok(ScoreboardEvent::Score {
        home: reader.read_u32(layout::SCORE_HOME_RANGE, "home score")?,
        away: reader.read_u32(layout::SCORE_AWAY_RANGE, "away score")?,
    })
}

fn parse_timeouts_left(
    reader: &PayloadReader<'_>,
) -> Result<Option<ScoreboardEvent>, PayloadError> {
    if reader.len() < layout::TIMEOUTS_MIN_LEN {
        warn!(payload = reader.as_str(), "incomplete timeouts data, skipping");
        return Ok(None);
    }
    // Two or three bytes pass the skip guard but cannot hold the partial
    // counts; they are rejected rather than padded.
    reader.require_len(layout::TIMEOUTS_LEN)?;
    Ok(Some(ScoreboardEvent::TimeoutsLeft {
        home: reader.read_digit(layout::TIMEOUTS_HOME_OFFSET, "home timeouts")?,
        away: reader.read_digit(layout::TIMEOUTS_AWAY_OFFSET, "away timeouts")?,
        home_partial: reader
            .read_digit(layout::TIMEOUTS_HOME_PARTIAL_OFFSET, "home partial timeouts")?,
        away_partial: reader
            .read_digit(layout::TIMEOUTS_AWAY_PARTIAL_OFFSET, "away partial timeouts")?,
    }))
}

fn parse_penalty_timers(reader: &PayloadReader<'_>) -> Result<Vec<PenaltyTimer>, PayloadError> {
    reader
        .chunks(layout::PENALTY_TIMER_CHUNK_LEN)
        .map(|chunk| {
            let chunk = chunk?;
            Ok(PenaltyTimer {
                cap: chunk.read_u32(layout::CAP_RANGE, "cap number")?,
                seconds: chunk.read_u32(layout::PENALTY_TIME_RANGE, "penalty time")?,
            })
        })
        .collect()
}

fn parse_penalty_counts(reader: &PayloadReader<'_>) -> Result<PenaltyCounts, PayloadError> {
    let mut counts = PenaltyCounts::new();
    for chunk in reader.chunks(layout::PENALTY_COUNT_CHUNK_LEN) {
        let chunk = chunk?;
        let cap = chunk.read_u32(layout::CAP_RANGE, "cap number")?;
        let count = chunk.read_u32(layout::PENALTY_COUNT_RANGE, "penalty count")?;
        counts.insert(cap, count);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::parse_event;
    use crate::protocols::water_polo::error::PayloadError;
    use crate::protocols::water_polo::event::{PenaltyTimer, ScoreboardEvent};

    fn parse_ok(message_type: &str, payload: &str) -> ScoreboardEvent {
        parse_event(message_type, payload).unwrap().unwrap()
    }

    #[test]
    fn parse_game_time() {
        assert_eq!(
            parse_ok("0042100000", "02:15"),
            ScoreboardEvent::GameTime { seconds: 135 }
        );
        assert_eq!(
            parse_ok("0042100000", "59:59"),
            ScoreboardEvent::GameTime { seconds: 3599 }
        );
    }

    #[test]
    fn parse_timeout_timer() {
        assert_eq!(
            parse_ok("0042100010", "00:00"),
            ScoreboardEvent::TimeoutTimer { seconds: 0 }
        );
        assert_eq!(
            parse_ok("0042100010", "01:00"),
            ScoreboardEvent::TimeoutTimer { seconds: 60 }
        );
    }

    #[test]
    fn parse_shot_time_and_period() {
        assert_eq!(
            parse_ok("0042100005", "28"),
            ScoreboardEvent::ShotTime { seconds: 28 }
        );
        assert_eq!(
            parse_ok("0042100005", " 5"),
            ScoreboardEvent::ShotTime { seconds: 5 }
        );
        assert_eq!(
            parse_ok("0042100023", "4"),
            ScoreboardEvent::Period { number: 4 }
        );
    }

    #[test]
    fn parse_shot_time_empty_fails() {
        let err = parse_event("0042100005", "").unwrap_err();
        assert_eq!(
            err,
            PayloadError::InvalidNumber {
                field: "shot time",
                value: String::new()
            }
        );
    }

    #[test]
    fn parse_score_zero_padded_and_space_padded() {
        assert_eq!(
            parse_ok("0042100015", "0714"),
            ScoreboardEvent::Score { home: 7, away: 14 }
        );
        assert_eq!(
            parse_ok("0042100015", " 712"),
            ScoreboardEvent::Score { home: 7, away: 12 }
        );
    }

    #[test]
    fn parse_score_too_short() {
        let err = parse_event("0042100015", "071").unwrap_err();
        assert_eq!(
            err,
            PayloadError::TooShort {
                needed: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn parse_timeouts_left() {
        assert_eq!(
            parse_ok("0042100019", "3210"),
            ScoreboardEvent::TimeoutsLeft {
                home: 3,
                away: 2,
                home_partial: 1,
                away_partial: 0,
            }
        );
    }

    #[test]
    fn parse_timeouts_left_short_payload_is_skipped() {
        assert_eq!(parse_event("0042100019", "").unwrap(), None);
        assert_eq!(parse_event("0042100019", "3").unwrap(), None);
    }

    #[test]
    fn parse_timeouts_left_two_or_three_bytes_fails() {
        for payload in ["32", "321"] {
            let err = parse_event("0042100019", payload).unwrap_err();
            assert!(matches!(err, PayloadError::TooShort { needed: 4, .. }));
        }
    }

    #[test]
    fn parse_timeouts_left_non_digit_fails() {
        let err = parse_event("0042100019", "3x10").unwrap_err();
        assert_eq!(
            err,
            PayloadError::InvalidNumber {
                field: "away timeouts",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_penalty_timers_two_chunks() {
        assert_eq!(
            parse_ok("0042100024", "01  12330   45"),
            ScoreboardEvent::HomePenaltyTimers {
                timers: vec![
                    PenaltyTimer {
                        cap: 1,
                        seconds: 123
                    },
                    PenaltyTimer {
                        cap: 30,
                        seconds: 45
                    },
                ]
            }
        );
    }

    #[test]
    fn parse_away_penalty_timers_empty_payload() {
        assert_eq!(
            parse_ok("0042100045", ""),
            ScoreboardEvent::AwayPenaltyTimers { timers: vec![] }
        );
    }

    #[test]
    fn parse_penalty_timers_truncated_chunk_fails() {
        let err = parse_event("0042100045", "01  12330005").unwrap_err();
        assert_eq!(
            err,
            PayloadError::TruncatedChunk {
                width: 7,
                offset: 7,
                actual: 5
            }
        );
    }

    #[test]
    fn parse_home_penalties() {
        let event = parse_ok("0042100066", "013021");
        let ScoreboardEvent::HomePenalties { counts } = &event else {
            panic!("expected home penalties, got {event:?}");
        };
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(&1), Some(&3));
        assert_eq!(counts.get(&2), Some(&1));
    }

    #[test]
    fn parse_away_penalties_repeat_cap_overwrites() {
        let event = parse_ok("0042100141", " 41 42 12");
        assert_eq!(
            event,
            ScoreboardEvent::AwayPenalties {
                counts: [(4, 2), (1, 2)].into_iter().collect()
            }
        );
    }

    #[test]
    fn parse_penalties_truncated_chunk_fails() {
        let err = parse_event("0042100066", "0130").unwrap_err();
        assert!(matches!(err, PayloadError::TruncatedChunk { actual: 1, .. }));
    }

    #[test]
    fn parse_unknown_type_keeps_payload() {
        assert_eq!(
            parse_ok("0042100099", "whatever"),
            ScoreboardEvent::Unknown {
                message_type: "0042100099".to_string(),
                payload: "whatever".to_string()
            }
        );
    }
}
