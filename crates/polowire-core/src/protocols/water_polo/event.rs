use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layout;

/// Penalty counts keyed by cap number.
pub type PenaltyCounts = BTreeMap<u32, u32>;

/// One running penalty timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTimer {
    pub cap: u32,
    pub seconds: u32,
}

/// Structured game-state event decoded from one frame.
///
/// # Examples
/// ```
/// use polowire_core::ScoreboardEvent;
///
/// let event = ScoreboardEvent::Score { home: 7, away: 14 };
/// let json = serde_json::to_string(&event).unwrap();
/// assert_eq!(json, r#"{"score":{"home":7,"away":14}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreboardEvent {
    GameTime {
        seconds: u32,
    },
    ShotTime {
        seconds: u32,
    },
    TimeoutTimer {
        seconds: u32,
    },
    Score {
        home: u32,
        away: u32,
    },
    TimeoutsLeft {
        home: u32,
        away: u32,
        home_partial: u32,
        away_partial: u32,
    },
    Period {
        number: u32,
    },
    /// Every home timer listed in one frame, in payload order.
    HomePenaltyTimers {
        timers: Vec<PenaltyTimer>,
    },
    AwayPenaltyTimers {
        timers: Vec<PenaltyTimer>,
    },
    HomePenalties {
        counts: PenaltyCounts,
    },
    AwayPenalties {
        counts: PenaltyCounts,
    },
    /// Type code outside the recognized table; payload left raw.
    Unknown {
        message_type: String,
        payload: String,
    },
}

impl ScoreboardEvent {
    /// Recognized kind, or `None` for `Unknown`.
    pub fn kind(&self) -> Option<MessageKind> {
        let kind = match self {
            Self::GameTime { .. } => MessageKind::GameTime,
            Self::ShotTime { .. } => MessageKind::ShotTime,
            Self::TimeoutTimer { .. } => MessageKind::TimeoutTimer,
            Self::Score { .. } => MessageKind::Score,
            Self::TimeoutsLeft { .. } => MessageKind::TimeoutsLeft,
            Self::Period { .. } => MessageKind::Period,
            Self::HomePenaltyTimers { .. } => MessageKind::HomePenaltyTimer,
            Self::AwayPenaltyTimers { .. } => MessageKind::AwayPenaltyTimer,
            Self::HomePenalties { .. } => MessageKind::HomePenalties,
            Self::AwayPenalties { .. } => MessageKind::AwayPenalties,
            Self::Unknown { .. } => return None,
        };
        Some(kind)
    }
}

/// Recognized message type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    GameTime,
    ShotTime,
    TimeoutTimer,
    Score,
    TimeoutsLeft,
    Period,
    HomePenaltyTimer,
    AwayPenaltyTimer,
    HomePenalties,
    AwayPenalties,
}

impl MessageKind {
    pub const ALL: [MessageKind; 10] = [
        MessageKind::GameTime,
        MessageKind::ShotTime,
        MessageKind::TimeoutTimer,
        MessageKind::Score,
        MessageKind::TimeoutsLeft,
        MessageKind::Period,
        MessageKind::HomePenaltyTimer,
        MessageKind::AwayPenaltyTimer,
        MessageKind::HomePenalties,
        MessageKind::AwayPenalties,
    ];

    /// Look up a ten-digit type code.
    ///
    /// # Examples
    /// ```
    /// use polowire_core::MessageKind;
    ///
    /// assert_eq!(MessageKind::from_code("0042100015"), Some(MessageKind::Score));
    /// assert_eq!(MessageKind::from_code("0042100099"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::GameTime => layout::GAME_TIME_CODE,
            Self::ShotTime => layout::SHOT_TIME_CODE,
            Self::TimeoutTimer => layout::TIMEOUT_TIMER_CODE,
            Self::Score => layout::SCORE_CODE,
            Self::TimeoutsLeft => layout::TIMEOUTS_LEFT_CODE,
            Self::Period => layout::PERIOD_CODE,
            Self::HomePenaltyTimer => layout::HOME_PENALTY_TIMER_CODE,
            Self::AwayPenaltyTimer => layout::AWAY_PENALTY_TIMER_CODE,
            Self::HomePenalties => layout::HOME_PENALTIES_CODE,
            Self::AwayPenalties => layout::AWAY_PENALTIES_CODE,
        }
    }

    /// Stable snake_case name used in reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::GameTime => "game_time",
            Self::ShotTime => "shot_time",
            Self::TimeoutTimer => "timeout_timer",
            Self::Score => "score",
            Self::TimeoutsLeft => "timeouts_left",
            Self::Period => "period",
            Self::HomePenaltyTimer => "home_penalty_timer",
            Self::AwayPenaltyTimer => "away_penalty_timer",
            Self::HomePenalties => "home_penalties",
            Self::AwayPenalties => "away_penalties",
        }
    }
}
